//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all page handlers
//! - Wire up middleware (request ID, tracing, timeout, security headers)
//! - Bind server to listener
//! - Graceful shutdown on the lifecycle broadcast

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::catalog::CatalogStore;
use crate::config::AppConfig;
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::routing::page_routes;
use crate::security::with_security_headers;

/// Application state injected into handlers.
///
/// Read-only; cloning it per request is a copy of a slice reference.
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: CatalogStore,
}

/// HTTP server for the catalog.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server over the built-in catalog.
    pub fn new(config: AppConfig) -> Self {
        Self::with_catalog(config, CatalogStore::builtin())
    }

    /// Create a server over a specific catalog.
    pub fn with_catalog(config: AppConfig, catalog: CatalogStore) -> Self {
        let state = AppState { catalog };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let router = page_routes().with_state(state).layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id_of(request)
                    )
                }))
                .layer(propagate_request_id_layer())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(config.timeouts.request_secs),
                )),
        );

        if config.security.enable_headers {
            with_security_headers(router)
        } else {
            router
        }
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            debug = self.config.server.debug,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower::ServiceExt;

    async fn get(server: &HttpServer, request: Request<Body>) -> axum::response::Response {
        server.router().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_request_id_generated_and_echoed() {
        let server = HttpServer::new(AppConfig::default());

        let response = get(&server, Request::builder().uri("/").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers()["x-request-id"].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());

        let response = get(
            &server,
            Request::builder()
                .uri("/producto/999")
                .header("x-request-id", "client-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-request-id"], "client-42");
    }

    #[tokio::test]
    async fn test_security_headers_toggle() {
        let server = HttpServer::new(AppConfig::default());
        let response = get(&server, Request::builder().uri("/productos").body(Body::empty()).unwrap()).await;
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert_eq!(response.headers()["referrer-policy"], "no-referrer");

        let mut config = AppConfig::default();
        config.security.enable_headers = false;
        let server = HttpServer::new(config);
        let response = get(&server, Request::builder().uri("/productos").body(Body::empty()).unwrap()).await;
        assert!(response.headers().get("x-content-type-options").is_none());
    }

    #[tokio::test]
    async fn test_html_content_type() {
        let server = HttpServer::new(AppConfig::default());
        let response = get(&server, Request::builder().uri("/ventajas-jinja2").body(Body::empty()).unwrap()).await;
        assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");
    }
}
