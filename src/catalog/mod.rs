//! Catalog subsystem.
//!
//! # Data Flow
//! ```text
//! static tables (product.rs, content.rs)
//!     → CatalogStore (read-only accessors)
//!     → page handlers (one view per request)
//! ```
//!
//! # Design Decisions
//! - All records are `'static`; there are no writes after startup
//! - Lookups scan the table linearly
//! - Handlers borrow records for a single request only

pub mod content;
pub mod product;
pub mod store;

pub use content::{Advantage, ComparisonEntry, FeatureDescriptor};
pub use product::Product;
pub use store::CatalogStore;

/// Error type for catalog lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Carries the requested id as written, which may exceed `u32`.
    #[error("product {0} not found")]
    ProductNotFound(String),
}
