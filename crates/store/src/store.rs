use stockdesk_catalog::{Category, Product};
use stockdesk_core::CategoryId;
use stockdesk_parties::{Supplier, User};

use crate::collection::Collection;
use crate::ledger::Ledger;

/// The entire in-memory state: one collection per entity family plus the
/// movement ledger.
///
/// Product `stock` is written only by the movement processor in the service
/// layer; everything else is free to read. Deletes never cascade — a product
/// may keep a dangling `category_id`, a movement a dangling product or user
/// id, and hydration resolves those to nothing.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub products: Collection<Product>,
    pub categories: Collection<Category>,
    pub suppliers: Collection<Supplier>,
    pub users: Collection<User>,
    pub movements: Ledger,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived category size; never stored, so it cannot go stale.
    pub fn category_product_count(&self, category_id: CategoryId) -> usize {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id)
            .count()
    }
}
