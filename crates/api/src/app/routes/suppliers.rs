use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde_json::json;

use stockdesk_core::SupplierId;
use stockdesk_parties::{NewSupplier, SupplierPatch};
use stockdesk_service::InventoryService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route("/:id", patch(update_supplier).delete(delete_supplier))
}

pub async fn list_suppliers(
    Extension(service): Extension<InventoryService>,
) -> axum::response::Response {
    let items = service
        .list_suppliers()
        .await
        .iter()
        .map(dto::supplier_to_json)
        .collect::<Vec<_>>();
    Json(json!({ "items": items })).into_response()
}

pub async fn create_supplier(
    Extension(service): Extension<InventoryService>,
    Json(body): Json<dto::CreateSupplierRequest>,
) -> axum::response::Response {
    let new = NewSupplier {
        name: body.name,
        email: body.email,
        phone: body.phone,
        address: body.address,
        contact_person: body.contact_person,
        is_active: body.is_active,
    };
    match service.create_supplier(new).await {
        Ok(supplier) => {
            (StatusCode::CREATED, Json(dto::supplier_to_json(&supplier))).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_supplier(
    Extension(service): Extension<InventoryService>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateSupplierRequest>,
) -> axum::response::Response {
    let id: SupplierId = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let patch = SupplierPatch {
        name: body.name,
        email: body.email,
        phone: body.phone,
        address: body.address,
        contact_person: body.contact_person,
        is_active: body.is_active,
    };
    match service.update_supplier(id, patch).await {
        Ok(Some(supplier)) => Json(dto::supplier_to_json(&supplier)).into_response(),
        Ok(None) => errors::not_found("supplier"),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_supplier(
    Extension(service): Extension<InventoryService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SupplierId = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if service.delete_supplier(id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::not_found("supplier")
    }
}
