use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{blog_tag, errors, tag};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique, column_type = "Text")]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { BlogTag }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::BlogTag => Entity::has_many(blog_tag::Entity).into(),
        }
    }
}

impl Related<blog_tag::Entity> for Entity {
    fn to() -> RelationDef { Relation::BlogTag.def() }
}

impl Related<tag::Entity> for Entity {
    fn to() -> RelationDef { blog_tag::Relation::Tag.def() }
    fn via() -> Option<RelationDef> { Some(blog_tag::Relation::Blog.def().rev()) }
}

crate::stamp_on_save!(ActiveModel);

fn require(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

pub fn validate(slug: &str, title: &str, description: &str, body: &str) -> Result<(), errors::ModelError> {
    require("slug", slug)?;
    require("title", title)?;
    require("description", description)?;
    require("body", body)
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    slug: &str,
    title: &str,
    description: &str,
    body: &str,
) -> Result<Model, errors::ModelError> {
    validate(slug, title, description, body)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        slug: Set(slug.to_string()),
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        body: Set(body.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_slug<C: ConnectionTrait>(db: &C, slug: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Slug.eq(slug)).one(db).await?)
}
