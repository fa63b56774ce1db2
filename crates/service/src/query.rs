//! The read side: filtering, ordering, pagination, hydration.
//!
//! Pure functions over a store snapshot. Order of operations matters and is
//! fixed: filter the full set, count it, slice the requested page, hydrate
//! only the slice.

use stockdesk_catalog::ProductFilter;
use stockdesk_core::{Page, PageRequest};
use stockdesk_store::EntityStore;

use crate::views::{MovementView, ProductView};

/// Products matching `filter`, in insertion order, one page at a time.
pub fn list_products(
    store: &EntityStore,
    filter: &ProductFilter,
    page: PageRequest,
) -> Page<ProductView> {
    let matching: Vec<_> = store
        .products
        .iter()
        .filter(|product| filter.matches(product))
        .collect();
    Page::from_vec(matching, page).map(|product| ProductView::resolve(store, product))
}

/// Movements newest-first by timestamp, paginated and hydrated.
///
/// The ledger is already most-recent-first for runtime records; the explicit
/// stable sort pins the order to `created_at` and leaves ledger order as the
/// tie-break.
pub fn list_movements(store: &EntityStore, page: PageRequest) -> Page<MovementView> {
    let mut movements: Vec<_> = store.movements.iter().collect();
    movements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Page::from_vec(movements, page).map(|movement| MovementView::resolve(store, movement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_catalog::StockStatus;
    use stockdesk_store::seed::demo_store;

    #[test]
    fn unfiltered_listing_returns_every_product() {
        let store = demo_store();
        let page = list_products(&store, &ProductFilter::default(), PageRequest::new(1, 50));
        assert_eq!(page.total, 12);
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.items[0].product.sku, "ELEC-001");
    }

    #[test]
    fn search_hits_name_sku_and_description() {
        let store = demo_store();
        let by_name = list_products(
            &store,
            &ProductFilter {
                search: Some("monitor".to_string()),
                ..ProductFilter::default()
            },
            PageRequest::first(),
        );
        assert_eq!(by_name.total, 1);
        assert_eq!(by_name.items[0].product.sku, "ELEC-001");

        let by_sku_prefix = list_products(
            &store,
            &ProductFilter {
                search: Some("elec-".to_string()),
                ..ProductFilter::default()
            },
            PageRequest::first(),
        );
        assert_eq!(by_sku_prefix.total, 4);
    }

    #[test]
    fn low_stock_filter_finds_the_three_fixture_products() {
        let store = demo_store();
        let page = list_products(
            &store,
            &ProductFilter {
                stock_status: Some(StockStatus::Low),
                ..ProductFilter::default()
            },
            PageRequest::first(),
        );
        let skus: Vec<_> = page.items.iter().map(|v| v.product.sku.as_str()).collect();
        assert_eq!(skus, vec!["ELEC-002", "OFIC-002", "SEG-002"]);
    }

    #[test]
    fn category_filter_composes_with_search() {
        let store = demo_store();
        let office = store
            .categories
            .iter()
            .find(|c| c.name == "Oficina")
            .unwrap();
        let page = list_products(
            &store,
            &ProductFilter {
                search: Some("ajustable".to_string()),
                category_id: Some(office.id),
                ..ProductFilter::default()
            },
            PageRequest::first(),
        );
        // "Silla" mentions ajustable in its description, "Escritorio" in its name.
        assert_eq!(page.total, 2);
    }

    #[test]
    fn pagination_slices_the_filtered_set() {
        let store = demo_store();
        let filter = ProductFilter::default();
        let first = list_products(&store, &filter, PageRequest::new(1, 5));
        let third = list_products(&store, &filter, PageRequest::new(3, 5));
        let beyond = list_products(&store, &filter, PageRequest::new(4, 5));

        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(third.items.len(), 2);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 12);
        assert_eq!(beyond.total_pages, 3);
    }

    #[test]
    fn hydration_only_touches_the_requested_page() {
        let store = demo_store();
        let page = list_products(&store, &ProductFilter::default(), PageRequest::new(2, 5));
        assert_eq!(page.items.len(), 5);
        assert!(page.items.iter().all(|v| v.category.is_some()));
    }

    #[test]
    fn movements_come_newest_first() {
        let store = demo_store();
        let page = list_movements(&store, PageRequest::first());
        assert_eq!(page.total, 8);
        assert_eq!(page.items[0].movement.reason, "Corrección de error de conteo");
        let timestamps: Vec<_> = page.items.iter().map(|v| v.movement.created_at).collect();
        let mut sorted = timestamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(timestamps, sorted);
    }

    #[test]
    fn movement_pages_respect_the_envelope() {
        let store = demo_store();
        let page = list_movements(&store, PageRequest::new(2, 3));
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 8);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].movement.reason, "Venta mayorista");
    }
}
