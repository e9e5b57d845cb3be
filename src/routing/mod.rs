//! Page routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → router.rs (fixed GET route table)
//!     → params.rs (typed path parameters, rejected before the handler)
//!     → http::handlers (one handler per Page)
//! ```
//!
//! # Design Decisions
//! - Four terminal pages, no state between requests
//! - Path parameters that fail to parse behave like an unknown path
//! - Unmatched paths fall through to a plain 404

pub mod params;
pub mod router;

pub use params::ProductId;
pub use router::page_routes;

/// The pages served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Catalog,
    ProductDetail,
    Advantages,
}

impl Page {
    /// Route pattern, in axum path syntax.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Catalog => "/productos",
            Page::ProductDetail => "/producto/{id}",
            Page::Advantages => "/ventajas-jinja2",
        }
    }

    /// Short label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::ProductDetail => "product_detail",
            Page::Advantages => "advantages",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
