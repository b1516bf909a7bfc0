//! Service Container - Centralized service access.
//!
//! Wires the Unit of Work and token signer into the concrete services once,
//! then hands out trait objects so handlers never see implementations.

use std::sync::Arc;

use super::{AuthService, Authenticator, BookManager, BookService, TokenService};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get book service
    fn books(&self) -> Arc<dyn BookService>;

    /// Get token signer/verifier
    fn tokens(&self) -> Arc<TokenService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    book_service: Arc<dyn BookService>,
    tokens: Arc<TokenService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let tokens = Arc::new(TokenService::from_config(config));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), tokens.clone())),
            book_service: Arc::new(BookManager::new(uow)),
            tokens,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn books(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }

    fn tokens(&self) -> Arc<TokenService> {
        self.tokens.clone()
    }
}
