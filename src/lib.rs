//! # MyBestApp API
//!
//! A demonstration REST API built on Axum: ping, query and route echoes,
//! body repetition, file upload metadata echo, OpenAPI documentation,
//! a configurable CORS allow-list, and structured request logging.
//!
//! ## Overview
//!
//! MyBestApp can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `mybestapp-api` binary
//! 2. **As a library** - Embed the router in your own Axum application
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use mybestapp::{build_app, AppConfig, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load("mybestapp.toml")?;
//!     let state = AppState {
//!         config: Arc::new(config),
//!     };
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, build_app(state)).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `swagger-ui` | Interactive API documentation at `/swagger-ui` |
//!
//! The OpenAPI document itself is always served at `/api-docs/openapi.json`.
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`cli`] - Command-line argument parsing
//! - [`types`] - Request types and error handling
//! - [`utils`] - Configuration loading

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface parsing.
pub mod cli;
/// Core types (requests, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use api::routes::build_app;
pub use types::{AppError, EchoRequest, Result};
pub use utils::config::AppConfig;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<AppConfig>,
}
