use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use stockdesk_service::InventoryService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/login", post(login))
}

/// Demo login: a seeded email plus the shared demo password. Unknown email
/// and wrong password get the same 401.
pub async fn login(
    Extension(service): Extension<InventoryService>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match service.authenticate(&body.email, &body.password).await {
        Ok(user) => Json(dto::user_to_json(&user)).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
