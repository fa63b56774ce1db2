use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};

use stockdesk_service::InventoryService;

use crate::app::dto;

pub fn router() -> Router {
    Router::new().route("/dashboard", get(dashboard))
}

pub async fn dashboard(
    Extension(service): Extension<InventoryService>,
) -> axum::response::Response {
    let stats = service.dashboard_stats().await;
    Json(dto::stats_to_json(&stats)).into_response()
}
