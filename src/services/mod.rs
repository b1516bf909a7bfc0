//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) and reach
//! repositories through the Unit of Work.

mod auth_service;
mod book_service;
pub mod container;
mod token_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, LoginResponse};
pub use book_service::{BookManager, BookService, FOREIGN_CONTENT_WRITE};
pub use token_service::{Claims, TokenError, TokenService};
