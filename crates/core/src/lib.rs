//! `stockdesk-core` — shared domain foundation.
//!
//! Typed identifiers, the domain error taxonomy, the [`Entity`] trait the
//! in-memory collections are generic over, and the pagination primitives
//! every listing endpoint shares. Pure domain code: no IO, no framework
//! types.

pub mod entity;
pub mod error;
pub mod id;
pub mod page;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, MovementId, ProductId, SupplierId, UserId};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE};
