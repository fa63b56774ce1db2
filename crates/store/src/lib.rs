//! `stockdesk-store` — the in-memory state of the whole system.
//!
//! One insertion-ordered [`Collection`] per entity family, plus the
//! append-only movement [`Ledger`], bundled into [`EntityStore`]. The store
//! is plain owned data: no globals, no interior mutability. Whoever owns the
//! store decides how access is synchronized (the service facade wraps it in
//! an async lock).

pub mod collection;
pub mod ledger;
pub mod seed;
pub mod store;

pub use collection::Collection;
pub use ledger::Ledger;
pub use store::EntityStore;
