//! AirPods case catalog: a small server-rendered storefront.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;
pub mod views;

pub use catalog::{CatalogStore, Product};
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
