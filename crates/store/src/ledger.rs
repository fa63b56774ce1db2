use std::collections::VecDeque;

use stockdesk_core::ProductId;
use stockdesk_movements::StockMovement;

/// Append-only stock movement log, most-recent-first.
///
/// New records go to the head, and that head order *is* the recency order:
/// seeding pushes historical movements chronologically so the invariant
/// holds from the first record on. Nothing here hands out `&mut` — recorded
/// movements are never edited or removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ledger {
    entries: VecDeque<StockMovement>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append at the head.
    pub fn record(&mut self, movement: StockMovement) {
        self.entries.push_front(movement);
    }

    /// Iterate most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &StockMovement> {
        self.entries.iter()
    }

    /// The newest `n` records, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &StockMovement> {
        self.entries.iter().take(n)
    }

    /// How many records concern the given product.
    pub fn count_for_product(&self, product_id: ProductId) -> usize {
        self.entries
            .iter()
            .filter(|m| m.product_id == product_id)
            .count()
    }

    /// The newest record for the given product, if it has any.
    pub fn latest_for_product(&self, product_id: ProductId) -> Option<&StockMovement> {
        self.entries.iter().find(|m| m.product_id == product_id)
    }
}
