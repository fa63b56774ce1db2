//! HTTP application wiring.
//!
//! - `routes/`: handlers, one file per resource
//! - `dto.rs`: request DTOs and JSON response mappers
//! - `errors.rs`: domain error → HTTP response mapping

use axum::{routing::get, Extension, Router};

use stockdesk_service::InventoryService;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full router over one shared service (public entrypoint used by
/// `main.rs` and the black-box tests).
pub fn build_app(service: InventoryService) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(service))
}
