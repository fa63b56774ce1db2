//! Demo dataset: the fixture inventory the system boots with.
//!
//! Three users, five categories, twelve products, eight historical
//! movements and three suppliers. Stock values are the checkpoint the
//! ledger counts from — the seeded movements are history from *before*
//! that checkpoint and are recorded without re-applying them.

use chrono::{DateTime, TimeZone, Utc};

use stockdesk_catalog::{Category, Product};
use stockdesk_core::{CategoryId, Entity, MovementId, ProductId, SupplierId, UserId};
use stockdesk_movements::{MovementKind, StockMovement};
use stockdesk_parties::{Supplier, User, UserRole};

use crate::collection::Collection;
use crate::store::EntityStore;

/// Shared password every demo user logs in with.
pub const DEMO_PASSWORD: &str = "demo123";

/// Build a store holding the complete demo dataset.
pub fn demo_store() -> EntityStore {
    let users = demo_users();
    let categories = demo_categories();
    let products = demo_products(&categories);
    let movements = demo_movements(&products, &users);
    let suppliers = demo_suppliers();

    let mut store = EntityStore::new();
    for user in users {
        put(&mut store.users, user);
    }
    for category in categories {
        put(&mut store.categories, category);
    }
    for product in products {
        put(&mut store.products, product);
    }
    for supplier in suppliers {
        put(&mut store.suppliers, supplier);
    }
    // Recorded chronologically, so the head of the ledger is the newest.
    for movement in movements {
        store.movements.record(movement);
    }
    store
}

fn put<T: Entity>(collection: &mut Collection<T>, item: T) {
    // Fresh UUIDv7 ids cannot collide within one seed run.
    collection.insert(item).expect("seed ids are unique");
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    stamp(year, month, day, 0, 0)
}

fn stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("fixture timestamps are valid")
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(),
            email: "admin@inventario.com".to_string(),
            name: "Carlos Mendoza".to_string(),
            role: UserRole::Admin,
            avatar: Some("/admin-avatar-professional.jpg".to_string()),
            created_at: day(2024, 1, 15),
            updated_at: day(2024, 11, 1),
        },
        User {
            id: UserId::new(),
            email: "manager@inventario.com".to_string(),
            name: "María García".to_string(),
            role: UserRole::Manager,
            avatar: Some("/manager-avatar-woman.jpg".to_string()),
            created_at: day(2024, 2, 20),
            updated_at: day(2024, 10, 15),
        },
        User {
            id: UserId::new(),
            email: "empleado@inventario.com".to_string(),
            name: "Juan Pérez".to_string(),
            role: UserRole::Employee,
            avatar: Some("/employee-avatar-man.jpg".to_string()),
            created_at: day(2024, 3, 10),
            updated_at: day(2024, 9, 28),
        },
    ]
}

fn demo_categories() -> Vec<Category> {
    let rows: [(&str, &str, &str, DateTime<Utc>, DateTime<Utc>); 5] = [
        (
            "Electrónica",
            "Dispositivos electrónicos y accesorios",
            "#3B82F6",
            day(2024, 1, 1),
            day(2024, 11, 1),
        ),
        (
            "Oficina",
            "Material y mobiliario de oficina",
            "#10B981",
            day(2024, 1, 1),
            day(2024, 10, 15),
        ),
        (
            "Herramientas",
            "Herramientas manuales y eléctricas",
            "#F59E0B",
            day(2024, 1, 1),
            day(2024, 9, 20),
        ),
        (
            "Limpieza",
            "Productos y equipos de limpieza",
            "#8B5CF6",
            day(2024, 2, 1),
            day(2024, 8, 10),
        ),
        (
            "Seguridad",
            "Equipos de protección y seguridad",
            "#EF4444",
            day(2024, 2, 15),
            day(2024, 11, 5),
        ),
    ];
    rows.into_iter()
        .map(|(name, description, color, created_at, updated_at)| Category {
            id: CategoryId::new(),
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            created_at,
            updated_at,
        })
        .collect()
}

struct ProductRow {
    sku: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    cost_cents: i64,
    stock: i64,
    min_stock: i64,
    max_stock: i64,
    category: usize,
    image_url: &'static str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn demo_products(categories: &[Category]) -> Vec<Product> {
    let rows = [
        ProductRow {
            sku: "ELEC-001",
            name: "Monitor LED 24\"",
            description: "Monitor LED Full HD de 24 pulgadas con panel IPS",
            price_cents: 29999,
            cost_cents: 18000,
            stock: 45,
            min_stock: 10,
            max_stock: 100,
            category: 0,
            image_url: "/computer-monitor-led.jpg",
            created_at: day(2024, 1, 15),
            updated_at: day(2024, 11, 1),
        },
        ProductRow {
            sku: "ELEC-002",
            name: "Teclado Mecánico RGB",
            description: "Teclado mecánico con switches Cherry MX e iluminación RGB",
            price_cents: 12999,
            cost_cents: 7500,
            stock: 8,
            min_stock: 15,
            max_stock: 80,
            category: 0,
            image_url: "/mechanical-keyboard-rgb.jpg",
            created_at: day(2024, 2, 10),
            updated_at: day(2024, 10, 28),
        },
        ProductRow {
            sku: "ELEC-003",
            name: "Mouse Inalámbrico",
            description: "Mouse ergonómico inalámbrico con sensor óptico de alta precisión",
            price_cents: 4999,
            cost_cents: 2200,
            stock: 120,
            min_stock: 20,
            max_stock: 150,
            category: 0,
            image_url: "/wireless-mouse-ergonomic.jpg",
            created_at: day(2024, 1, 20),
            updated_at: day(2024, 11, 2),
        },
        ProductRow {
            sku: "OFIC-001",
            name: "Silla Ergonómica",
            description: "Silla de oficina ergonómica con soporte lumbar ajustable",
            price_cents: 45000,
            cost_cents: 28000,
            stock: 12,
            min_stock: 5,
            max_stock: 30,
            category: 1,
            image_url: "/ergonomic-office-chair.png",
            created_at: day(2024, 3, 1),
            updated_at: day(2024, 10, 15),
        },
        ProductRow {
            sku: "OFIC-002",
            name: "Escritorio Ajustable",
            description: "Escritorio con altura ajustable eléctrico standing desk",
            price_cents: 69999,
            cost_cents: 42000,
            stock: 3,
            min_stock: 5,
            max_stock: 20,
            category: 1,
            image_url: "/adjustable-standing-desk.png",
            created_at: day(2024, 2, 15),
            updated_at: day(2024, 9, 30),
        },
        ProductRow {
            sku: "HERR-001",
            name: "Taladro Percutor",
            description: "Taladro percutor inalámbrico 20V con batería incluida",
            price_cents: 18999,
            cost_cents: 11000,
            stock: 25,
            min_stock: 8,
            max_stock: 50,
            category: 2,
            image_url: "/cordless-drill-power-tool.jpg",
            created_at: day(2024, 4, 1),
            updated_at: day(2024, 11, 1),
        },
        ProductRow {
            sku: "HERR-002",
            name: "Set Destornilladores",
            description: "Set de 32 destornilladores de precisión profesional",
            price_cents: 4599,
            cost_cents: 1800,
            stock: 65,
            min_stock: 20,
            max_stock: 100,
            category: 2,
            image_url: "/screwdriver-set-professional.jpg",
            created_at: day(2024, 3, 20),
            updated_at: day(2024, 10, 10),
        },
        ProductRow {
            sku: "LIMP-001",
            name: "Aspiradora Industrial",
            description: "Aspiradora industrial de alta potencia 2000W",
            price_cents: 32000,
            cost_cents: 19500,
            stock: 7,
            min_stock: 3,
            max_stock: 15,
            category: 3,
            image_url: "/industrial-vacuum-cleaner.jpg",
            created_at: day(2024, 5, 1),
            updated_at: day(2024, 10, 25),
        },
        ProductRow {
            sku: "SEG-001",
            name: "Casco de Seguridad",
            description: "Casco de seguridad industrial certificado EN 397",
            price_cents: 3599,
            cost_cents: 1200,
            stock: 150,
            min_stock: 50,
            max_stock: 200,
            category: 4,
            image_url: "/safety-helmet-industrial.jpg",
            created_at: day(2024, 1, 10),
            updated_at: day(2024, 11, 3),
        },
        ProductRow {
            sku: "SEG-002",
            name: "Guantes de Protección",
            description: "Guantes de protección anticorte nivel 5",
            price_cents: 2499,
            cost_cents: 850,
            stock: 2,
            min_stock: 30,
            max_stock: 100,
            category: 4,
            image_url: "/cut-resistant-gloves.jpg",
            created_at: day(2024, 2, 1),
            updated_at: day(2024, 10, 20),
        },
        ProductRow {
            sku: "ELEC-004",
            name: "Webcam HD 1080p",
            description: "Webcam profesional Full HD con micrófono integrado",
            price_cents: 8999,
            cost_cents: 4500,
            stock: 35,
            min_stock: 10,
            max_stock: 60,
            category: 0,
            image_url: "/hd-webcam-professional.jpg",
            created_at: day(2024, 6, 1),
            updated_at: day(2024, 11, 1),
        },
        ProductRow {
            sku: "OFIC-003",
            name: "Archivador Metálico",
            description: "Archivador de 4 cajones con cerradura de seguridad",
            price_cents: 24999,
            cost_cents: 15000,
            stock: 18,
            min_stock: 5,
            max_stock: 25,
            category: 1,
            image_url: "/metal-filing-cabinet.jpg",
            created_at: day(2024, 4, 15),
            updated_at: day(2024, 9, 15),
        },
    ];
    rows.into_iter()
        .map(|row| Product {
            id: ProductId::new(),
            sku: row.sku.to_string(),
            name: row.name.to_string(),
            description: row.description.to_string(),
            price_cents: row.price_cents,
            cost_cents: row.cost_cents,
            stock: row.stock,
            min_stock: row.min_stock,
            max_stock: row.max_stock,
            category_id: categories[row.category].id,
            image_url: Some(row.image_url.to_string()),
            is_active: true,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
        .collect()
}

fn demo_movements(products: &[Product], users: &[User]) -> Vec<StockMovement> {
    let monitor = products[0].id;
    let keyboard = products[1].id;
    let mouse = products[2].id;
    let chair = products[3].id;
    let drill = products[5].id;
    let screwdrivers = products[6].id;
    let helmet = products[8].id;

    let admin = users[0].id;
    let manager = users[1].id;
    let employee = users[2].id;

    vec![
        StockMovement {
            id: MovementId::new(),
            kind: MovementKind::Entrada,
            quantity: 50,
            product_id: monitor,
            user_id: admin,
            reason: "Compra a proveedor".to_string(),
            reference: Some("PO-2024-001".to_string()),
            created_at: stamp(2024, 11, 1, 10, 30),
        },
        StockMovement {
            id: MovementId::new(),
            kind: MovementKind::Salida,
            quantity: 5,
            product_id: monitor,
            user_id: manager,
            reason: "Venta a cliente".to_string(),
            reference: Some("SO-2024-045".to_string()),
            created_at: stamp(2024, 11, 1, 14, 15),
        },
        StockMovement {
            id: MovementId::new(),
            kind: MovementKind::Entrada,
            quantity: 100,
            product_id: helmet,
            user_id: admin,
            reason: "Reposición de stock".to_string(),
            reference: Some("PO-2024-002".to_string()),
            created_at: stamp(2024, 11, 2, 9, 0),
        },
        StockMovement {
            id: MovementId::new(),
            kind: MovementKind::Ajuste,
            quantity: -3,
            product_id: chair,
            user_id: employee,
            reason: "Ajuste por inventario físico".to_string(),
            reference: None,
            created_at: stamp(2024, 11, 2, 16, 45),
        },
        StockMovement {
            id: MovementId::new(),
            kind: MovementKind::Salida,
            quantity: 20,
            product_id: mouse,
            user_id: manager,
            reason: "Venta mayorista".to_string(),
            reference: Some("SO-2024-046".to_string()),
            created_at: stamp(2024, 11, 3, 11, 20),
        },
        StockMovement {
            id: MovementId::new(),
            kind: MovementKind::Entrada,
            quantity: 30,
            product_id: keyboard,
            user_id: admin,
            reason: "Compra urgente".to_string(),
            reference: Some("PO-2024-003".to_string()),
            created_at: stamp(2024, 11, 3, 15, 30),
        },
        StockMovement {
            id: MovementId::new(),
            kind: MovementKind::Salida,
            quantity: 10,
            product_id: drill,
            user_id: manager,
            reason: "Venta a cliente".to_string(),
            reference: Some("SO-2024-047".to_string()),
            created_at: stamp(2024, 11, 4, 10, 0),
        },
        StockMovement {
            id: MovementId::new(),
            kind: MovementKind::Ajuste,
            quantity: 5,
            product_id: screwdrivers,
            user_id: admin,
            reason: "Corrección de error de conteo".to_string(),
            reference: None,
            created_at: stamp(2024, 11, 4, 14, 0),
        },
    ]
}

fn demo_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: SupplierId::new(),
            name: "TechDistributor S.A.".to_string(),
            email: "ventas@techdist.com".to_string(),
            phone: "+34 91 123 4567".to_string(),
            address: "Calle Industrial 123, Madrid".to_string(),
            contact_person: "Ana López".to_string(),
            is_active: true,
            created_at: day(2024, 1, 1),
            updated_at: day(2024, 10, 15),
        },
        Supplier {
            id: SupplierId::new(),
            name: "Oficinas Pro".to_string(),
            email: "contacto@oficinaspro.es".to_string(),
            phone: "+34 93 234 5678".to_string(),
            address: "Av. Diagonal 456, Barcelona".to_string(),
            contact_person: "Pedro Martín".to_string(),
            is_active: true,
            created_at: day(2024, 1, 15),
            updated_at: day(2024, 9, 20),
        },
        Supplier {
            id: SupplierId::new(),
            name: "Herramientas Express".to_string(),
            email: "pedidos@herrexpress.com".to_string(),
            phone: "+34 96 345 6789".to_string(),
            address: "Polígono Norte 78, Valencia".to_string(),
            contact_person: "Luis Fernández".to_string(),
            is_active: true,
            created_at: day(2024, 2, 1),
            updated_at: day(2024, 11, 1),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_holds_the_full_dataset() {
        let store = demo_store();
        assert_eq!(store.users.len(), 3);
        assert_eq!(store.categories.len(), 5);
        assert_eq!(store.products.len(), 12);
        assert_eq!(store.suppliers.len(), 3);
        assert_eq!(store.movements.len(), 8);
    }

    #[test]
    fn seeded_ledger_head_is_the_newest_movement() {
        let store = demo_store();
        let head = store.movements.iter().next().unwrap();
        assert_eq!(head.reason, "Corrección de error de conteo");
        assert_eq!(head.kind, MovementKind::Ajuste);
        // And the tail is the oldest.
        let tail = store.movements.iter().last().unwrap();
        assert_eq!(tail.reference.as_deref(), Some("PO-2024-001"));
    }

    #[test]
    fn fixture_stock_value_adds_up() {
        let store = demo_store();
        let total: i64 = store.products.iter().map(|p| p.stock_value_cents()).sum();
        assert_eq!(total, 2_733_700);
    }

    #[test]
    fn three_products_sit_below_their_minimum() {
        let store = demo_store();
        let low: Vec<_> = store
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .map(|p| p.sku.as_str())
            .collect();
        assert_eq!(low, vec!["ELEC-002", "OFIC-002", "SEG-002"]);
    }

    #[test]
    fn the_monitor_is_the_most_moved_product() {
        let store = demo_store();
        let monitor = store
            .products
            .iter()
            .find(|p| p.sku == "ELEC-001")
            .unwrap();
        assert_eq!(store.movements.count_for_product(monitor.id), 2);
        let latest = store.movements.latest_for_product(monitor.id).unwrap();
        assert_eq!(latest.kind, MovementKind::Salida);
    }

    #[test]
    fn derived_category_counts_match_the_products() {
        let store = demo_store();
        let counts: Vec<_> = store
            .categories
            .iter()
            .map(|c| (c.name.as_str(), store.category_product_count(c.id)))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("Electrónica", 4),
                ("Oficina", 3),
                ("Herramientas", 2),
                ("Limpieza", 1),
                ("Seguridad", 2),
            ]
        );
    }
}
