use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockdesk_core::{PageRequest, DEFAULT_PAGE_SIZE};
use stockdesk_movements::{MovementKind, NewMovement};
use stockdesk_service::InventoryService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_movements).post(record_movement))
}

/// The ledger, newest first.
pub async fn list_movements(
    Extension(service): Extension<InventoryService>,
    Query(query): Query<dto::PageQuery>,
) -> axum::response::Response {
    let page = PageRequest::new(
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    let result = service.list_movements(page).await;
    Json(dto::page_to_json(&result, dto::movement_view_to_json)).into_response()
}

pub async fn record_movement(
    Extension(service): Extension<InventoryService>,
    Json(body): Json<dto::RecordMovementRequest>,
) -> axum::response::Response {
    let kind = match body.kind.parse::<MovementKind>() {
        Ok(kind) => kind,
        Err(err) => return errors::domain_error_to_response(err),
    };
    let product_id = match errors::parse_id(&body.product_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let user_id = match errors::parse_id(&body.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let new = NewMovement {
        kind,
        quantity: body.quantity,
        product_id,
        user_id,
        reason: body.reason,
        reference: body.reference,
    };
    match service.record_movement(new).await {
        Ok(view) => (StatusCode::CREATED, Json(dto::movement_view_to_json(&view))).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
