use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stockdesk_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};

/// Stock level relative to a product's own thresholds.
///
/// These are filter predicates, not a partition: a product whose `min_stock`
/// exceeds 80% of its `max_stock` can match `low` and `high` at once and is
/// never `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Normal,
    High,
}

impl StockStatus {
    pub fn matches(self, product: &Product) -> bool {
        match self {
            StockStatus::Low => product.is_low_stock(),
            StockStatus::High => product.is_high_stock(),
            StockStatus::Normal => !product.is_low_stock() && !product.is_high_stock(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::Low => "low",
            StockStatus::Normal => "normal",
            StockStatus::High => "high",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(StockStatus::Low),
            "normal" => Ok(StockStatus::Normal),
            "high" => Ok(StockStatus::High),
            other => Err(DomainError::validation(format!(
                "unknown stock status: {other}"
            ))),
        }
    }
}

/// Product record.
///
/// `stock` is the cached on-hand quantity. Its only legitimate write path is
/// the movement processor; seed data establishes the checkpoint the ledger
/// continues from. Patch updates cannot touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: String,
    /// Sale price in cents.
    pub price_cents: i64,
    /// Acquisition cost in cents; stock valuation multiplies against this.
    pub cost_cents: i64,
    pub stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    /// May dangle after a category delete; hydration then carries no category.
    pub category_id: CategoryId,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Validate the payload and mint a fresh record.
    ///
    /// New products start active; `stock` is the opening checkpoint.
    pub fn create(new: NewProduct) -> DomainResult<Self> {
        new.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: ProductId::new(),
            sku: new.sku,
            name: new.name,
            description: new.description,
            price_cents: new.price_cents,
            cost_cents: new.cost_cents,
            stock: new.stock,
            min_stock: new.min_stock,
            max_stock: new.max_stock,
            category_id: new.category_id,
            image_url: new.image_url,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge the present patch fields and bump `updated_at`.
    pub fn apply_patch(&mut self, patch: ProductPatch) -> DomainResult<()> {
        patch.validate()?;
        if let Some(sku) = patch.sku {
            self.sku = sku;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price_cents) = patch.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(cost_cents) = patch.cost_cents {
            self.cost_cents = cost_cents;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(max_stock) = patch.max_stock {
            self.max_stock = max_stock;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock < self.min_stock
    }

    /// Strictly above 80% of `max_stock`. `5·stock > 4·max_stock` is the
    /// exact integer form of `stock > 0.8 · max_stock`.
    pub fn is_high_stock(&self) -> bool {
        (self.stock as i128) * 5 > (self.max_stock as i128) * 4
    }

    /// On-hand valuation at acquisition cost. Negative stock counts against.
    pub fn stock_value_cents(&self) -> i64 {
        self.stock * self.cost_cents
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Creation payload for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub cost_cents: i64,
    pub stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub category_id: CategoryId,
    pub image_url: Option<String>,
}

impl NewProduct {
    fn validate(&self) -> DomainResult<()> {
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.price_cents < 0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if self.cost_cents < 0 {
            return Err(DomainError::validation("cost cannot be negative"));
        }
        if self.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        if self.min_stock < 0 {
            return Err(DomainError::validation("min_stock cannot be negative"));
        }
        if self.max_stock < 0 {
            return Err(DomainError::validation("max_stock cannot be negative"));
        }
        Ok(())
    }
}

/// Patch payload for a product. Absent fields stay untouched.
///
/// Deliberately has no `stock` field: stock changes go through movements.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub cost_cents: Option<i64>,
    pub min_stock: Option<i64>,
    pub max_stock: Option<i64>,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    fn validate(&self) -> DomainResult<()> {
        if let Some(sku) = &self.sku {
            if sku.trim().is_empty() {
                return Err(DomainError::validation("sku cannot be empty"));
            }
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
        }
        if let Some(price_cents) = self.price_cents {
            if price_cents < 0 {
                return Err(DomainError::validation("price cannot be negative"));
            }
        }
        if let Some(cost_cents) = self.cost_cents {
            if cost_cents < 0 {
                return Err(DomainError::validation("cost cannot be negative"));
            }
        }
        if let Some(min_stock) = self.min_stock {
            if min_stock < 0 {
                return Err(DomainError::validation("min_stock cannot be negative"));
            }
        }
        if let Some(max_stock) = self.max_stock {
            if max_stock < 0 {
                return Err(DomainError::validation("max_stock cannot be negative"));
            }
        }
        Ok(())
    }
}
