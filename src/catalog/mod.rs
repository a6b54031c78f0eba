//! Product catalog slice.
//!
//! Holds the product list supplied by the catalog provider together with
//! fields derived from it at replace time (featured subset, category set)
//! and a user-selected sort order.
//!
//! # Architecture
//!
//! - `product.rs` - Product and review records
//! - `sort.rs` - Sort orders and their comparators
//! - `collate.rs` - Locale-aware name comparison
//! - `state.rs` - Catalog state and selectors
//! - `intent.rs` - Catalog actions
//! - `reducer.rs` - State transitions (pure, total)

pub mod collate;
mod intent;
mod product;
mod reducer;
mod sort;
mod state;

pub use intent::CatalogIntent;
pub use product::{Product, Review};
pub use reducer::CatalogReducer;
pub use sort::SortOrder;
pub use state::CatalogState;
