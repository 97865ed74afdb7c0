use axum::{extract::State, Json};
use service::tag::service::LIST_FAILED;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/tags", tag = "tags",
    responses(
        (status = 200, description = "All tag descriptions", body = [String]),
        (status = 404, description = "No tags"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list_tags(State(state): State<ServerState>) -> Result<Json<Vec<String>>, JsonApiError> {
    state
        .tags
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, LIST_FAILED))
}
