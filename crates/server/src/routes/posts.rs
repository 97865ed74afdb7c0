use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use service::blog::{
    domain::{BlogResponse, CreateBlogInput, UpdateBlogInput},
    service::{CREATE_FAILED, DELETE_FAILED, GET_FAILED, LIST_FAILED, UPDATE_FAILED},
};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only blogs carrying this tag text
    pub tag: Option<String>,
}

#[utoipa::path(
    get, path = "/api/posts", tag = "posts",
    params(ListQuery),
    responses(
        (status = 200, description = "Blogs, newest first", body = [crate::openapi::BlogResponseDoc]),
        (status = 404, description = "No blogs"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list_posts(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<BlogResponse>>, JsonApiError> {
    state
        .blogs
        .list(q.tag.as_deref())
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, LIST_FAILED))
}

#[utoipa::path(
    get, path = "/api/posts/{slug}", tag = "posts",
    params(("slug" = String, Path, description = "Blog slug")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BlogResponseDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_post(State(state): State<ServerState>, Path(slug): Path<String>) -> Result<Json<BlogResponse>, JsonApiError> {
    state
        .blogs
        .get(&slug)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, GET_FAILED))
}

#[utoipa::path(
    post, path = "/api/posts", tag = "posts",
    request_body = crate::openapi::CreateBlogRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BlogResponseDoc),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Slug already taken"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create_post(
    State(state): State<ServerState>,
    payload: Result<Json<CreateBlogInput>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = payload?;
    let created = state
        .blogs
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, CREATE_FAILED))?;
    let location = format!("/api/posts/{}", created.slug);
    info!(%location, "created blog");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/posts/{slug}", tag = "posts",
    params(("slug" = String, Path, description = "Blog slug")),
    request_body = crate::openapi::UpdateBlogRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BlogResponseDoc),
        (status = 400, description = "Nothing to update"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "New title collides with another blog"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update_post(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    payload: Result<Json<UpdateBlogInput>, JsonRejection>,
) -> Result<Json<BlogResponse>, JsonApiError> {
    let Json(input) = payload?;
    state
        .blogs
        .update(&slug, input)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, UPDATE_FAILED))
}

#[utoipa::path(
    delete, path = "/api/posts/{slug}", tag = "posts",
    params(("slug" = String, Path, description = "Blog slug")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_post(State(state): State<ServerState>, Path(slug): Path<String>) -> Result<StatusCode, JsonApiError> {
    state
        .blogs
        .delete(&slug)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| JsonApiError::from_service(e, DELETE_FAILED))
}
