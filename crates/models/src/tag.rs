use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{blog, blog_tag, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique, column_type = "Text")]
    pub tag_description: String,
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

impl Related<blog::Entity> for Entity {
    fn to() -> RelationDef { blog_tag::Relation::Blog.def() }
    fn via() -> Option<RelationDef> { Some(blog_tag::Relation::Tag.def().rev()) }
}

crate::stamp_on_save!(ActiveModel);

pub async fn create<C: ConnectionTrait>(db: &C, description: &str) -> Result<Model, errors::ModelError> {
    if description.trim().is_empty() {
        return Err(errors::ModelError::Validation("tag description required".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        tag_description: Set(description.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_description<C: ConnectionTrait>(db: &C, description: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::TagDescription.eq(description)).one(db).await?)
}

/// All tags in the order they were stored.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::CreatedAt).all(db).await?)
}
