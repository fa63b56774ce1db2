//! Request DTOs and JSON response mappers.
//!
//! Requests carry ids as strings; handlers parse them so a malformed id is a
//! 400, not a deserialization failure. Responses are built with explicit
//! `json!` mappers: product payloads embed their resolved category, movement
//! payloads embed product and user, mirroring the hydrated views.

use serde::Deserialize;
use serde_json::json;

use stockdesk_catalog::{Category, Product};
use stockdesk_core::Page;
use stockdesk_parties::{Supplier, User};
use stockdesk_service::{
    CategoryStock, CategoryView, DashboardStats, MovementView, ProductView, TopProduct,
};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Query string of `GET /products`. `stock_status` accepts
/// `low|normal|high|all`; `all` (or absence) means unfiltered.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub stock_status: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub cost_cents: i64,
    pub stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub category_id: String,
    pub image_url: Option<String>,
}

/// Absent fields stay untouched. No `stock` field: stock changes go through
/// movements.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub cost_cents: Option<i64>,
    pub min_stock: Option<i64>,
    pub max_stock: Option<i64>,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordMovementRequest {
    /// `entrada`, `salida` or `ajuste`.
    pub kind: String,
    pub quantity: i64,
    pub product_id: String,
    pub user_id: String,
    pub reason: String,
    pub reference: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct UpdateSupplierRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub is_active: Option<bool>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

fn product_to_json(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id,
        "sku": product.sku,
        "name": product.name,
        "description": product.description,
        "price_cents": product.price_cents,
        "cost_cents": product.cost_cents,
        "stock": product.stock,
        "min_stock": product.min_stock,
        "max_stock": product.max_stock,
        "category_id": product.category_id,
        "image_url": product.image_url,
        "is_active": product.is_active,
        "created_at": product.created_at,
        "updated_at": product.updated_at,
    })
}

pub fn product_view_to_json(view: &ProductView) -> serde_json::Value {
    let mut value = product_to_json(&view.product);
    value["category"] = match &view.category {
        Some(category) => category_to_json(category),
        None => serde_json::Value::Null,
    };
    value
}

pub fn category_to_json(category: &Category) -> serde_json::Value {
    json!({
        "id": category.id,
        "name": category.name,
        "description": category.description,
        "color": category.color,
        "created_at": category.created_at,
        "updated_at": category.updated_at,
    })
}

pub fn category_view_to_json(view: &CategoryView) -> serde_json::Value {
    let mut value = category_to_json(&view.category);
    value["product_count"] = json!(view.product_count);
    value
}

pub fn movement_view_to_json(view: &MovementView) -> serde_json::Value {
    json!({
        "id": view.movement.id,
        "kind": view.movement.kind,
        "quantity": view.movement.quantity,
        "product_id": view.movement.product_id,
        "user_id": view.movement.user_id,
        "reason": view.movement.reason,
        "reference": view.movement.reference,
        "created_at": view.movement.created_at,
        "product": view.product.as_ref().map(product_to_json),
        "user": view.user.as_ref().map(user_to_json),
    })
}

pub fn supplier_to_json(supplier: &Supplier) -> serde_json::Value {
    json!({
        "id": supplier.id,
        "name": supplier.name,
        "email": supplier.email,
        "phone": supplier.phone,
        "address": supplier.address,
        "contact_person": supplier.contact_person,
        "is_active": supplier.is_active,
        "created_at": supplier.created_at,
        "updated_at": supplier.updated_at,
    })
}

pub fn user_to_json(user: &User) -> serde_json::Value {
    json!({
        "id": user.id,
        "email": user.email,
        "name": user.name,
        "role": user.role,
        "avatar": user.avatar,
        "created_at": user.created_at,
        "updated_at": user.updated_at,
    })
}

fn top_product_to_json(top: &TopProduct) -> serde_json::Value {
    json!({
        "product": product_view_to_json(&top.product),
        "movement_count": top.movement_count,
        "last_movement_at": top.last_movement_at,
    })
}

fn category_stock_to_json(row: &CategoryStock) -> serde_json::Value {
    json!({
        "category": category_to_json(&row.category),
        "total_products": row.total_products,
        "total_stock": row.total_stock,
        "total_value_cents": row.total_value_cents,
    })
}

pub fn stats_to_json(stats: &DashboardStats) -> serde_json::Value {
    json!({
        "total_products": stats.total_products,
        "total_categories": stats.total_categories,
        "low_stock_products": stats.low_stock_products,
        "total_stock_value_cents": stats.total_stock_value_cents,
        "recent_movements": stats.recent_movements.iter().map(movement_view_to_json).collect::<Vec<_>>(),
        "top_products": stats.top_products.iter().map(top_product_to_json).collect::<Vec<_>>(),
        "stock_by_category": stats.stock_by_category.iter().map(category_stock_to_json).collect::<Vec<_>>(),
    })
}

/// Wrap one page of results, mapping each item.
pub fn page_to_json<T>(
    page: &Page<T>,
    item: impl Fn(&T) -> serde_json::Value,
) -> serde_json::Value {
    json!({
        "items": page.items.iter().map(item).collect::<Vec<_>>(),
        "total": page.total,
        "page": page.page,
        "page_size": page.page_size,
        "total_pages": page.total_pages,
    })
}
