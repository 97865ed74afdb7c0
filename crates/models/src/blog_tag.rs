use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{blog, errors, tag};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub blog_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Blog, Tag }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Blog => Entity::belongs_to(blog::Entity)
                .from(Column::BlogId)
                .to(blog::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Tag => Entity::belongs_to(tag::Entity)
                .from(Column::TagId)
                .to(tag::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<blog::Entity> for Entity {
    fn to() -> RelationDef { Relation::Blog.def() }
}

impl Related<tag::Entity> for Entity {
    fn to() -> RelationDef { Relation::Tag.def() }
}

crate::stamp_on_save!(ActiveModel);

pub async fn link<C: ConnectionTrait>(db: &C, blog_id: Uuid, tag_id: Uuid) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        blog_id: Set(blog_id),
        tag_id: Set(tag_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Tags attached to any of `blog_ids`, paired with their join row, in link order.
pub async fn tags_for_blogs<C: ConnectionTrait>(
    db: &C,
    blog_ids: &[Uuid],
) -> Result<Vec<(Model, tag::Model)>, errors::ModelError> {
    if blog_ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows = Entity::find()
        .filter(Column::BlogId.is_in(blog_ids.iter().copied()))
        .order_by_asc(Column::CreatedAt)
        .find_also_related(tag::Entity)
        .all(db)
        .await?;
    Ok(rows.into_iter().filter_map(|(link, t)| t.map(|t| (link, t))).collect())
}

pub async fn count_for_blog<C: ConnectionTrait>(db: &C, blog_id: Uuid) -> Result<u64, errors::ModelError> {
    use sea_orm::PaginatorTrait;
    Ok(Entity::find().filter(Column::BlogId.eq(blog_id)).count(db).await?)
}
