use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockdesk_catalog::{Category, NewCategory, NewProduct, Product, ProductFilter, StockStatus};
use stockdesk_core::{PageRequest, UserId};
use stockdesk_movements::{MovementKind, NewMovement, StockMovement};
use stockdesk_service::{query, stats};
use stockdesk_store::EntityStore;

const CATEGORIES: usize = 8;

/// A store well past the demo scale: `n` products spread over a handful of
/// categories, with a movement recorded for every third product.
fn scaled_store(n: usize) -> EntityStore {
    let mut store = EntityStore::new();
    let user_id = UserId::new();

    let category_ids: Vec<_> = (0..CATEGORIES)
        .map(|i| {
            let category = Category::create(NewCategory {
                name: format!("Categoría {i}"),
                description: String::new(),
                color: "#3B82F6".to_string(),
            })
            .unwrap();
            let id = category.id;
            store.categories.insert(category).unwrap();
            id
        })
        .collect();

    for i in 0..n {
        let product = Product::create(NewProduct {
            sku: format!("SKU-{i:05}"),
            name: format!("Producto {i}"),
            description: "Artículo de carga".to_string(),
            price_cents: 10000,
            cost_cents: 6000,
            stock: (i % 120) as i64,
            min_stock: 10,
            max_stock: 100,
            category_id: category_ids[i % CATEGORIES],
            image_url: None,
        })
        .unwrap();
        let product_id = product.id;
        store.products.insert(product).unwrap();

        if i % 3 == 0 {
            store.movements.record(StockMovement::record(NewMovement {
                kind: MovementKind::Entrada,
                quantity: 10,
                product_id,
                user_id,
                reason: "Carga inicial".to_string(),
                reference: None,
            }));
        }
    }

    store
}

fn bench_list_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_products");
    for &n in &[100usize, 1_000, 5_000] {
        let store = scaled_store(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered", n), &store, |b, store| {
            let filter = ProductFilter::default();
            b.iter(|| {
                black_box(query::list_products(
                    store,
                    &filter,
                    PageRequest::new(3, 25),
                ))
            })
        });

        group.bench_with_input(
            BenchmarkId::new("search_and_status", n),
            &store,
            |b, store| {
                let filter = ProductFilter {
                    search: Some("producto 1".to_string()),
                    stock_status: Some(StockStatus::Low),
                    ..ProductFilter::default()
                };
                b.iter(|| {
                    black_box(query::list_products(
                        store,
                        &filter,
                        PageRequest::first(),
                    ))
                })
            },
        );
    }
    group.finish();
}

fn bench_dashboard_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_stats");
    for &n in &[100usize, 1_000, 5_000] {
        let store = scaled_store(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, store| {
            b.iter(|| black_box(stats::dashboard_stats(store)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_list_products, bench_dashboard_stats);
criterion_main!(benches);
