//! Page handlers.
//!
//! Each handler builds one typed view from the catalog and renders it.

use std::time::Instant;

use axum::{extract::State, response::Html};

use crate::catalog::CatalogError;
use crate::http::response::{render, PageError};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::{Page, ProductId};
use crate::views::{AdvantagesTemplate, CatalogTemplate, HomeTemplate, ProductDetailTemplate};

type PageResult = Result<Html<String>, PageError>;

/// `GET /` — featured products and template engine features.
pub async fn home(State(state): State<AppState>) -> PageResult {
    let start = Instant::now();
    let view = HomeTemplate::new(&state.catalog);
    tracing::debug!(featured = view.products.len(), "Rendering home page");
    finish(Page::Home, start, render(&view))
}

/// `GET /productos` — the full catalog.
pub async fn catalog(State(state): State<AppState>) -> PageResult {
    let start = Instant::now();
    let view = CatalogTemplate::new(&state.catalog);
    tracing::debug!(products = view.products.len(), "Rendering catalog page");
    finish(Page::Catalog, start, render(&view))
}

/// `GET /producto/{id}` — a single product, or 404.
pub async fn product_detail(State(state): State<AppState>, id: ProductId) -> PageResult {
    let start = Instant::now();
    let result = id
        .value()
        .and_then(|value| state.catalog.find_by_id(value))
        .ok_or_else(|| CatalogError::ProductNotFound(id.as_str().to_string()))
        .map_err(PageError::from)
        .and_then(|product| {
            tracing::debug!(product_id = product.id, name = product.name, "Rendering product page");
            render(&ProductDetailTemplate::new(product))
        });

    if let Err(PageError::NotFound(_)) = &result {
        tracing::warn!(product_id = %id.as_str(), "Product not found");
    }
    finish(Page::ProductDetail, start, result)
}

/// `GET /ventajas-jinja2` — static advantages and engine comparison.
pub async fn advantages(State(state): State<AppState>) -> PageResult {
    let start = Instant::now();
    let view = AdvantagesTemplate::new(&state.catalog);
    tracing::debug!("Rendering advantages page");
    finish(Page::Advantages, start, render(&view))
}

fn finish(page: Page, start: Instant, result: PageResult) -> PageResult {
    let status = match &result {
        Ok(_) => axum::http::StatusCode::OK,
        Err(e) => e.status_code(),
    };
    metrics::record_page(page, status, start);
    result
}
