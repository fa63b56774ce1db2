//! `stockdesk-service` — the operations layer over the entity store.
//!
//! `views` hydrates relations, `query` filters and paginates, `stats`
//! aggregates the dashboard figures — all pure functions over a store
//! snapshot. [`InventoryService`] is the async facade that owns the store,
//! serializes mutations behind a write lock, and is the only place product
//! stock ever changes.

pub mod query;
pub mod service;
pub mod stats;
pub mod views;

pub use service::InventoryService;
pub use stats::{CategoryStock, DashboardStats, TopProduct};
pub use views::{CategoryView, MovementView, ProductView};
