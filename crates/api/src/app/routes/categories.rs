use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use stockdesk_catalog::{CategoryPatch, NewCategory};
use stockdesk_core::CategoryId;
use stockdesk_service::InventoryService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
}

/// Categories with their live product counts.
pub async fn list_categories(
    Extension(service): Extension<InventoryService>,
) -> axum::response::Response {
    let items = service
        .list_categories()
        .await
        .iter()
        .map(dto::category_view_to_json)
        .collect::<Vec<_>>();
    Json(json!({ "items": items })).into_response()
}

pub async fn create_category(
    Extension(service): Extension<InventoryService>,
    Json(body): Json<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    let new = NewCategory {
        name: body.name,
        description: body.description,
        color: body.color,
    };
    match service.create_category(new).await {
        Ok(category) => {
            (StatusCode::CREATED, Json(dto::category_to_json(&category))).into_response()
        }
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_category(
    Extension(service): Extension<InventoryService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CategoryId = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match service.get_category(id).await {
        Some(view) => Json(dto::category_view_to_json(&view)).into_response(),
        None => errors::not_found("category"),
    }
}

pub async fn update_category(
    Extension(service): Extension<InventoryService>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCategoryRequest>,
) -> axum::response::Response {
    let id: CategoryId = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let patch = CategoryPatch {
        name: body.name,
        description: body.description,
        color: body.color,
    };
    match service.update_category(id, patch).await {
        Ok(Some(category)) => Json(dto::category_to_json(&category)).into_response(),
        Ok(None) => errors::not_found("category"),
        Err(err) => errors::domain_error_to_response(err),
    }
}

/// No cascade: products keep the dangling id and hydrate without a category.
pub async fn delete_category(
    Extension(service): Extension<InventoryService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CategoryId = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if service.delete_category(id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::not_found("category")
    }
}
