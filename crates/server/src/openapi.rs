use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponseDoc {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequestDoc {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

#[derive(ToSchema)]
pub struct UpdateBlogRequestDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::posts::list_posts,
        crate::routes::posts::get_post,
        crate::routes::posts::create_post,
        crate::routes::posts::update_post,
        crate::routes::posts::delete_post,
        crate::routes::tags::list_tags,
    ),
    components(
        schemas(
            HealthResponse,
            BlogResponseDoc,
            CreateBlogRequestDoc,
            UpdateBlogRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "posts"),
        (name = "tags")
    )
)]
pub struct ApiDoc;
