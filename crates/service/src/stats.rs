//! Dashboard aggregation: every figure computed from one store snapshot.

use chrono::{DateTime, Utc};

use stockdesk_catalog::Category;
use stockdesk_store::EntityStore;

use crate::views::{MovementView, ProductView};

/// How many hydrated movements the dashboard shows.
pub const RECENT_MOVEMENTS: usize = 5;
/// How many ranked products the dashboard shows.
pub const TOP_PRODUCTS: usize = 5;

/// A product ranked by how often it moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopProduct {
    pub product: ProductView,
    pub movement_count: usize,
    /// Timestamp of the newest movement touching this product, if any.
    pub last_movement_at: Option<DateTime<Utc>>,
}

/// Per-category stock rollup. Categories without products keep a zero row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStock {
    pub category: Category,
    pub total_products: usize,
    pub total_stock: i64,
    pub total_value_cents: i64,
}

/// The dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_categories: usize,
    /// Products strictly below their own minimum.
    pub low_stock_products: usize,
    /// Σ stock × cost over all products; negative stock counts against.
    pub total_stock_value_cents: i64,
    pub recent_movements: Vec<MovementView>,
    pub top_products: Vec<TopProduct>,
    pub stock_by_category: Vec<CategoryStock>,
}

/// Compute the whole dashboard from one snapshot.
pub fn dashboard_stats(store: &EntityStore) -> DashboardStats {
    let recent_movements = store
        .movements
        .recent(RECENT_MOVEMENTS)
        .map(|movement| MovementView::resolve(store, movement))
        .collect();

    let mut ranked: Vec<TopProduct> = store
        .products
        .iter()
        .map(|product| TopProduct {
            product: ProductView::resolve(store, product),
            movement_count: store.movements.count_for_product(product.id),
            last_movement_at: store
                .movements
                .latest_for_product(product.id)
                .map(|movement| movement.created_at),
        })
        .collect();
    // Stable sort: products with equal counts keep insertion order.
    ranked.sort_by(|a, b| b.movement_count.cmp(&a.movement_count));
    ranked.truncate(TOP_PRODUCTS);

    let stock_by_category = store
        .categories
        .iter()
        .map(|category| {
            let mut row = CategoryStock {
                category: category.clone(),
                total_products: 0,
                total_stock: 0,
                total_value_cents: 0,
            };
            for product in store
                .products
                .iter()
                .filter(|p| p.category_id == category.id)
            {
                row.total_products += 1;
                row.total_stock += product.stock;
                row.total_value_cents += product.stock_value_cents();
            }
            row
        })
        .collect();

    DashboardStats {
        total_products: store.products.len(),
        total_categories: store.categories.len(),
        low_stock_products: store.products.iter().filter(|p| p.is_low_stock()).count(),
        total_stock_value_cents: store.products.iter().map(|p| p.stock_value_cents()).sum(),
        recent_movements,
        top_products: ranked,
        stock_by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockdesk_catalog::NewCategory;
    use stockdesk_store::seed::demo_store;

    #[test]
    fn fixture_totals() {
        let stats = dashboard_stats(&demo_store());
        assert_eq!(stats.total_products, 12);
        assert_eq!(stats.total_categories, 5);
        assert_eq!(stats.low_stock_products, 3);
        assert_eq!(stats.total_stock_value_cents, 2_733_700);
    }

    #[test]
    fn recent_movements_are_the_ledger_head() {
        let stats = dashboard_stats(&demo_store());
        assert_eq!(stats.recent_movements.len(), RECENT_MOVEMENTS);
        let reasons: Vec<_> = stats
            .recent_movements
            .iter()
            .map(|v| v.movement.reason.as_str())
            .collect();
        assert_eq!(
            reasons,
            vec![
                "Corrección de error de conteo",
                "Venta a cliente",
                "Compra urgente",
                "Venta mayorista",
                "Ajuste por inventario físico",
            ]
        );
        // Hydrated: every one carries its actor.
        assert!(stats.recent_movements.iter().all(|v| v.user.is_some()));
    }

    #[test]
    fn top_products_rank_by_movement_count_with_stable_ties() {
        let stats = dashboard_stats(&demo_store());
        let skus: Vec<_> = stats
            .top_products
            .iter()
            .map(|t| t.product.product.sku.as_str())
            .collect();
        // The monitor moved twice; the rest of the top list is the
        // once-moved products in insertion order.
        assert_eq!(
            skus,
            vec!["ELEC-001", "ELEC-002", "ELEC-003", "OFIC-001", "HERR-001"]
        );
        assert_eq!(stats.top_products[0].movement_count, 2);
        let expected = Utc.with_ymd_and_hms(2024, 11, 1, 14, 15, 0).unwrap();
        assert_eq!(stats.top_products[0].last_movement_at, Some(expected));
    }

    #[test]
    fn stock_by_category_covers_every_category() {
        let stats = dashboard_stats(&demo_store());
        let rows: Vec<_> = stats
            .stock_by_category
            .iter()
            .map(|r| {
                (
                    r.category.name.as_str(),
                    r.total_products,
                    r.total_stock,
                    r.total_value_cents,
                )
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Electrónica", 4, 208, 1_291_500),
                ("Oficina", 3, 33, 732_000),
                ("Herramientas", 2, 90, 392_000),
                ("Limpieza", 1, 7, 136_500),
                ("Seguridad", 2, 152, 181_700),
            ]
        );
    }

    #[test]
    fn an_empty_category_gets_a_zero_row() {
        let mut store = demo_store();
        let empty = Category::create(NewCategory {
            name: "Embalaje".to_string(),
            description: String::new(),
            color: "#888888".to_string(),
        })
        .unwrap();
        store.categories.insert(empty).unwrap();

        let stats = dashboard_stats(&store);
        let row = stats
            .stock_by_category
            .iter()
            .find(|r| r.category.name == "Embalaje")
            .unwrap();
        assert_eq!(row.total_products, 0);
        assert_eq!(row.total_stock, 0);
        assert_eq!(row.total_value_cents, 0);
    }

    #[test]
    fn every_ranked_product_carries_its_last_movement_date() {
        let stats = dashboard_stats(&demo_store());
        // Seven fixture products moved, so the five kept by the cut all
        // have a count and a timestamp.
        assert!(stats
            .top_products
            .iter()
            .all(|t| t.movement_count >= 1 && t.last_movement_at.is_some()));
    }
}
