//! `stockdesk-parties` — suppliers and users.
//!
//! Registry data around the stock engine: suppliers are a plain directory
//! (movements never reference them), users are the actors movements are
//! attributed to. Pure domain logic, no IO.

pub mod supplier;
pub mod user;

pub use supplier::{NewSupplier, Supplier, SupplierPatch};
pub use user::{User, UserRole};
