//! Response handling.
//!
//! # Responsibilities
//! - Render typed views into HTML bodies
//! - Map page errors to status codes and plain-text bodies
//!
//! # Design Decisions
//! - A missing product is the only client-facing error
//! - Template failures are logged and surface as 500 without details

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::catalog::CatalogError;

/// Body of the 404 returned for an unknown product id.
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

/// Body of the 404 returned for paths outside the route table.
pub const ROUTE_NOT_FOUND: &str = "Not Found";

/// Errors a page handler can produce.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    NotFound(#[from] CatalogError),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl PageError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            PageError::NotFound(_) => (status, PRODUCT_NOT_FOUND).into_response(),
            PageError::Render(e) => {
                tracing::error!(error = %e, "Failed to render page");
                (status, "Internal Server Error").into_response()
            }
        }
    }
}

/// Render a view into an HTML response body.
pub fn render<T: Template>(view: &T) -> Result<Html<String>, PageError> {
    Ok(Html(view.render()?))
}

/// Fallback for unmatched routes and rejected path parameters.
pub async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}
