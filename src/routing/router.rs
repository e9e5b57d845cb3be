//! Route table.

use axum::{routing::get, Router};

use crate::http::handlers;
use crate::http::response::route_not_found;
use crate::http::server::AppState;
use crate::routing::Page;

/// All page routes plus the 404 fallback, awaiting state.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route(Page::Home.path(), get(handlers::home))
        .route(Page::Catalog.path(), get(handlers::catalog))
        .route(Page::ProductDetail.path(), get(handlers::product_detail))
        .route(Page::Advantages.path(), get(handlers::advantages))
        .fallback(route_not_found)
}
