use stockdesk_core::CategoryId;

use crate::product::{Product, StockStatus};

/// Composable product filter. Every present criterion must hold (AND).
///
/// `search` is a case-insensitive substring match over name, sku and
/// description. Criteria are applied in declaration order, which only
/// matters for short-circuiting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
    pub stock_status: Option<StockStatus>,
    pub is_active: Option<bool>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.sku.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if product.category_id != category_id {
                return false;
            }
        }
        if let Some(status) = self.stock_status {
            if !status.matches(product) {
                return false;
            }
        }
        if let Some(is_active) = self.is_active {
            if product.is_active != is_active {
                return false;
            }
        }
        true
    }
}
