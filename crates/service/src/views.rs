//! Hydrated read views: records joined with what they reference.
//!
//! Resolution never fails — a dangling id (deleted category, deleted
//! product, unknown user) simply hydrates to `None`.

use stockdesk_catalog::{Category, Product};
use stockdesk_movements::StockMovement;
use stockdesk_parties::User;
use stockdesk_store::EntityStore;

/// A product with its category resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub product: Product,
    pub category: Option<Category>,
}

impl ProductView {
    pub fn resolve(store: &EntityStore, product: &Product) -> Self {
        Self {
            product: product.clone(),
            category: store.categories.get(product.category_id).cloned(),
        }
    }
}

/// A movement with its product and acting user resolved.
///
/// The embedded product is the raw record, without its own category join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementView {
    pub movement: StockMovement,
    pub product: Option<Product>,
    pub user: Option<User>,
}

impl MovementView {
    pub fn resolve(store: &EntityStore, movement: &StockMovement) -> Self {
        Self {
            movement: movement.clone(),
            product: store.products.get(movement.product_id).cloned(),
            user: store.users.get(movement.user_id).cloned(),
        }
    }
}

/// A category with its derived product count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub category: Category,
    pub product_count: usize,
}

impl CategoryView {
    pub fn resolve(store: &EntityStore, category: &Category) -> Self {
        Self {
            category: category.clone(),
            product_count: store.category_product_count(category.id),
        }
    }
}
