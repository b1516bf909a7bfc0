//! HTTP request handlers.

pub mod auth_handler;
pub mod book_handler;

pub use auth_handler::auth_routes;
pub use book_handler::book_routes;
