use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use stockdesk_service::InventoryService;

use crate::app::dto;

pub fn router() -> Router {
    Router::new().route("/", get(list_users))
}

pub async fn list_users(
    Extension(service): Extension<InventoryService>,
) -> axum::response::Response {
    let items = service
        .list_users()
        .await
        .iter()
        .map(dto::user_to_json)
        .collect::<Vec<_>>();
    Json(json!({ "items": items })).into_response()
}
