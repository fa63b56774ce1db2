use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockdesk_catalog::{NewProduct, ProductFilter, ProductPatch, StockStatus};
use stockdesk_core::{PageRequest, ProductId, DEFAULT_PAGE_SIZE};
use stockdesk_service::InventoryService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(service): Extension<InventoryService>,
    Query(query): Query<dto::ProductListQuery>,
) -> axum::response::Response {
    let mut filter = ProductFilter {
        search: query.search,
        is_active: query.is_active,
        ..ProductFilter::default()
    };
    if let Some(raw) = &query.category_id {
        filter.category_id = Some(match errors::parse_id(raw) {
            Ok(id) => id,
            Err(response) => return response,
        });
    }
    match query.stock_status.as_deref() {
        None | Some("all") => {}
        Some(raw) => {
            filter.stock_status = Some(match raw.parse::<StockStatus>() {
                Ok(status) => status,
                Err(err) => return errors::domain_error_to_response(err),
            });
        }
    }

    let page = PageRequest::new(
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    let result = service.list_products(&filter, page).await;
    Json(dto::page_to_json(&result, dto::product_view_to_json)).into_response()
}

pub async fn create_product(
    Extension(service): Extension<InventoryService>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let category_id = match errors::parse_id(&body.category_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let new = NewProduct {
        sku: body.sku,
        name: body.name,
        description: body.description,
        price_cents: body.price_cents,
        cost_cents: body.cost_cents,
        stock: body.stock,
        min_stock: body.min_stock,
        max_stock: body.max_stock,
        category_id,
        image_url: body.image_url,
    };
    match service.create_product(new).await {
        Ok(view) => (StatusCode::CREATED, Json(dto::product_view_to_json(&view))).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_product(
    Extension(service): Extension<InventoryService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match service.get_product(id).await {
        Some(view) => Json(dto::product_view_to_json(&view)).into_response(),
        None => errors::not_found("product"),
    }
}

pub async fn update_product(
    Extension(service): Extension<InventoryService>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    let id: ProductId = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut patch = ProductPatch {
        sku: body.sku,
        name: body.name,
        description: body.description,
        price_cents: body.price_cents,
        cost_cents: body.cost_cents,
        min_stock: body.min_stock,
        max_stock: body.max_stock,
        category_id: None,
        image_url: body.image_url,
        is_active: body.is_active,
    };
    if let Some(raw) = &body.category_id {
        patch.category_id = Some(match errors::parse_id(raw) {
            Ok(id) => id,
            Err(response) => return response,
        });
    }
    match service.update_product(id, patch).await {
        Ok(Some(view)) => Json(dto::product_view_to_json(&view)).into_response(),
        Ok(None) => errors::not_found("product"),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_product(
    Extension(service): Extension<InventoryService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if service.delete_product(id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::not_found("product")
    }
}
