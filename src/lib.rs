//! Bookshelf API - a personal book catalogue over REST.
//!
//! Users register, log in for a bearer token, then manage the books they
//! own and each book's text content.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities (users, books) and password handling
//! - **services**: Use cases (auth, tokens, books)
//! - **infra**: Database, migrations, repositories, unit of work
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response helpers
//! - **utils**: Lenient input coercion
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (applies pending migrations first)
//! bookshelf serve --port 3001
//!
//! # Inspect migrations
//! bookshelf migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Book, Password, User};
pub use errors::{AppError, AppResult};
