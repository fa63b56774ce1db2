//! The async service facade owning the authoritative store.

use std::sync::Arc;

use tokio::sync::RwLock;

use stockdesk_catalog::{
    Category, CategoryPatch, NewCategory, NewProduct, Product, ProductFilter, ProductPatch,
};
use stockdesk_core::{
    CategoryId, DomainError, DomainResult, Page, PageRequest, ProductId, SupplierId,
};
use stockdesk_movements::{NewMovement, StockMovement};
use stockdesk_parties::{NewSupplier, Supplier, SupplierPatch, User};
use stockdesk_store::{seed, EntityStore};

use crate::query;
use crate::stats::{self, DashboardStats};
use crate::views::{CategoryView, MovementView, ProductView};

/// Async facade over the one authoritative [`EntityStore`].
///
/// Cheap to clone; every clone shares the same state. Reads take the read
/// guard, mutations the write guard, so each operation observes or commits
/// one consistent snapshot. In particular the check-then-update inside
/// [`record_movement`](Self::record_movement) cannot interleave with any
/// other mutation — stock arithmetic is decided and applied under one
/// guard.
#[derive(Debug, Clone)]
pub struct InventoryService {
    store: Arc<RwLock<EntityStore>>,
}

impl InventoryService {
    /// Start with an empty store.
    pub fn new() -> Self {
        Self::with_store(EntityStore::new())
    }

    /// Start from an existing store.
    pub fn with_store(store: EntityStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Start with the demo dataset.
    pub fn with_demo_data() -> Self {
        Self::with_store(seed::demo_store())
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Page<ProductView> {
        let store = self.store.read().await;
        query::list_products(&store, filter, page)
    }

    pub async fn get_product(&self, id: ProductId) -> Option<ProductView> {
        let store = self.store.read().await;
        let product = store.products.get(id)?;
        Some(ProductView::resolve(&store, product))
    }

    pub async fn create_product(&self, new: NewProduct) -> DomainResult<ProductView> {
        let product = Product::create(new)?;
        let mut store = self.store.write().await;
        store.products.insert(product.clone())?;
        tracing::info!("product created: {} ({})", product.id, product.sku);
        Ok(ProductView::resolve(&store, &product))
    }

    /// `Ok(None)` when no product has this id.
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> DomainResult<Option<ProductView>> {
        let mut store = self.store.write().await;
        let Some(product) = store.products.get_mut(id) else {
            return Ok(None);
        };
        product.apply_patch(patch)?;
        let product = product.clone();
        tracing::info!("product updated: {id}");
        Ok(Some(ProductView::resolve(&store, &product)))
    }

    /// Hard delete. The ledger keeps any movements that reference the id.
    pub async fn delete_product(&self, id: ProductId) -> bool {
        let mut store = self.store.write().await;
        let removed = store.products.remove(id).is_some();
        if removed {
            tracing::info!("product deleted: {id}");
        }
        removed
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    pub async fn list_categories(&self) -> Vec<CategoryView> {
        let store = self.store.read().await;
        store
            .categories
            .iter()
            .map(|category| CategoryView::resolve(&store, category))
            .collect()
    }

    pub async fn get_category(&self, id: CategoryId) -> Option<CategoryView> {
        let store = self.store.read().await;
        let category = store.categories.get(id)?;
        Some(CategoryView::resolve(&store, category))
    }

    pub async fn create_category(&self, new: NewCategory) -> DomainResult<Category> {
        let category = Category::create(new)?;
        let mut store = self.store.write().await;
        store.categories.insert(category.clone())?;
        tracing::info!("category created: {} ({})", category.id, category.name);
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> DomainResult<Option<Category>> {
        let mut store = self.store.write().await;
        let Some(category) = store.categories.get_mut(id) else {
            return Ok(None);
        };
        category.apply_patch(patch)?;
        Ok(Some(category.clone()))
    }

    /// Hard delete, no cascade: products keep the dangling `category_id`
    /// and hydrate without a category from now on.
    pub async fn delete_category(&self, id: CategoryId) -> bool {
        let mut store = self.store.write().await;
        let removed = store.categories.remove(id).is_some();
        if removed {
            tracing::info!("category deleted: {id}");
        }
        removed
    }

    // ------------------------------------------------------------------
    // Movements
    // ------------------------------------------------------------------

    pub async fn list_movements(&self, page: PageRequest) -> Page<MovementView> {
        let store = self.store.read().await;
        query::list_movements(&store, page)
    }

    /// The movement processor: the only path that mutates product stock.
    ///
    /// Validates the request, resolves the product, settles the stock math
    /// (the salida overdraw check happens here, before anything changes),
    /// writes the new stock back and appends the ledger record — all under
    /// one write guard. A failed movement changes nothing and records
    /// nothing. Stock write-back does not bump the product's `updated_at`.
    pub async fn record_movement(&self, new: NewMovement) -> DomainResult<MovementView> {
        new.validate()?;
        let mut store = self.store.write().await;
        let Some(product) = store.products.get_mut(new.product_id) else {
            return Err(DomainError::not_found("product"));
        };
        let new_stock = match new.kind.apply(product.stock, new.quantity) {
            Ok(stock) => stock,
            Err(err) => {
                tracing::warn!("movement rejected for {}: {err}", new.product_id);
                return Err(err);
            }
        };
        product.stock = new_stock;

        let movement = StockMovement::record(new);
        store.movements.record(movement.clone());
        tracing::info!(
            "movement recorded: {} {} x{} -> stock {new_stock}",
            movement.kind,
            movement.product_id,
            movement.quantity,
        );
        Ok(MovementView::resolve(&store, &movement))
    }

    // ------------------------------------------------------------------
    // Suppliers
    // ------------------------------------------------------------------

    pub async fn list_suppliers(&self) -> Vec<Supplier> {
        let store = self.store.read().await;
        store.suppliers.iter().cloned().collect()
    }

    pub async fn create_supplier(&self, new: NewSupplier) -> DomainResult<Supplier> {
        let supplier = Supplier::create(new)?;
        let mut store = self.store.write().await;
        store.suppliers.insert(supplier.clone())?;
        tracing::info!("supplier created: {} ({})", supplier.id, supplier.name);
        Ok(supplier)
    }

    pub async fn update_supplier(
        &self,
        id: SupplierId,
        patch: SupplierPatch,
    ) -> DomainResult<Option<Supplier>> {
        let mut store = self.store.write().await;
        let Some(supplier) = store.suppliers.get_mut(id) else {
            return Ok(None);
        };
        supplier.apply_patch(patch)?;
        Ok(Some(supplier.clone()))
    }

    pub async fn delete_supplier(&self, id: SupplierId) -> bool {
        let mut store = self.store.write().await;
        store.suppliers.remove(id).is_some()
    }

    // ------------------------------------------------------------------
    // Users and login
    // ------------------------------------------------------------------

    pub async fn list_users(&self) -> Vec<User> {
        let store = self.store.read().await;
        store.users.iter().cloned().collect()
    }

    /// Demo login: a known email plus the shared demo password.
    ///
    /// Deliberately not real authentication — no hashing, no sessions. The
    /// same `invalid credentials` answer covers unknown emails and wrong
    /// passwords.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<User> {
        let store = self.store.read().await;
        let user = store
            .users
            .iter()
            .find(|u| u.email == email)
            .ok_or(DomainError::InvalidCredentials)?;
        if password != seed::DEMO_PASSWORD {
            return Err(DomainError::InvalidCredentials);
        }
        tracing::info!("login: {}", user.id);
        Ok(user.clone())
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    pub async fn dashboard_stats(&self) -> DashboardStats {
        let store = self.store.read().await;
        stats::dashboard_stats(&store)
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
