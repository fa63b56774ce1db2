use axum::Router;

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod movements;
pub mod products;
pub mod suppliers;
pub mod system;
pub mod users;

/// Router for all resource endpoints (`/health` is wired one level up).
pub fn router() -> Router {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", products::router())
        .nest("/categories", categories::router())
        .nest("/movements", movements::router())
        .nest("/suppliers", suppliers::router())
        .nest("/users", users::router())
        .nest("/stats", dashboard::router())
}
