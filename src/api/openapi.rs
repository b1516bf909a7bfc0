//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, book_handler};
use crate::domain::{Book, BookContent, BookContentSummary, BookInput, UserResponse};
use crate::services::LoginResponse;

/// OpenAPI documentation for the Bookshelf API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Personal book catalogue: accounts, owner-scoped books and their content",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Book endpoints
        book_handler::list_books,
        book_handler::create_book,
        book_handler::get_book,
        book_handler::update_book,
        book_handler::delete_book,
        book_handler::get_content,
        book_handler::set_content,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            Book,
            BookInput,
            BookContent,
            BookContentSummary,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::RegisterResponse,
            LoginResponse,
            // Book handler types
            book_handler::ContentRequest,
            book_handler::BookDeleted,
            book_handler::ContentSaved,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Books", description = "Books owned by the authenticated user")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
