//! `stockdesk-movements` — the stock movement ledger vocabulary.
//!
//! A movement is the only thing allowed to change a product's stock. This
//! crate defines the three movement kinds and their settlement math (the
//! overdraw check lives here), plus the immutable ledger record.

pub mod movement;

pub use movement::{MovementKind, NewMovement, StockMovement};
