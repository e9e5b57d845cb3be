//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → routing (page route table, typed params)
//!     → handlers.rs (build view from catalog)
//!     → response.rs (render HTML, map errors)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{PageError, PRODUCT_NOT_FOUND};
pub use server::{AppState, HttpServer};
