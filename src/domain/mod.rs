//! Domain layer - Core business entities and logic
//!
//! Entities and value objects independent of persistence and HTTP.

pub mod book;
pub mod password;
pub mod user;

pub use book::{Book, BookContent, BookContentSummary, BookInput};
pub use password::Password;
pub use user::{User, UserResponse};
