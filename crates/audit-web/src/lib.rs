//! # audit-web
//!
//! HTML viewer and search frontend for audit record stores, built on
//! the axum HTTP framework.
//!
//! This crate provides:
//!
//! - [`ViewerServer`] — HTTP server around an already-loaded
//!   [`audit_store::AuditStore`]
//! - [`ViewerConfig`] — Bind address and page chrome
//! - [`render`] — HTML assembly with a first-class escaping step
//!
//! ## Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/` | GET | Full listing of all loaded records |
//! | `/search?query=<text>` | GET | Substring-filtered listing; empty query redirects to `/` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use audit_store::load_shared;
//! use audit_web::{ViewerConfig, ViewerServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = load_shared("audit.log").unwrap();
//!     let config = ViewerConfig::default();
//!
//!     let server = ViewerServer::new(config.clone(), store);
//!     // server.serve(config.bind_addr).await.unwrap();
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use config::ViewerConfig;
pub use error::{WebError, WebResult};
pub use render::escape_html;
pub use server::ViewerServer;
pub use state::ViewerState;
