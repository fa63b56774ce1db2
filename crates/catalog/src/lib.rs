//! `stockdesk-catalog` — products and categories.
//!
//! The product record carries the cached `stock` value whose only legitimate
//! write path is the movement processor; everything else here is ordinary
//! catalog data: validated creation, patch-style updates, the stock-status
//! predicates, and the composable product filter the query engine applies.

pub mod category;
pub mod filter;
pub mod product;

pub use category::{Category, CategoryPatch, NewCategory};
pub use filter::ProductFilter;
pub use product::{NewProduct, Product, ProductPatch, StockStatus};
