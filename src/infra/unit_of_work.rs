//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and runs multi-step operations inside a
//! single database transaction (commit on success, rollback on error).

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::entities::book::{self, ActiveModel as BookActiveModel, Entity as BookEntity};
use super::repositories::{BookRepository, BookStore, UserRepository, UserStore};
use crate::domain::{Book, BookContentSummary};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic transaction method; tests
/// provide their own implementation wrapping mocked repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get book repository
    fn books(&self) -> Arc<dyn BookRepository>;

    /// Execute a closure within a ReadCommitted transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get book repository for this transaction
    pub fn books(&self) -> TxBookRepository<'_> {
        TxBookRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    book_repo: Arc<BookStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let book_repo = Arc::new(BookStore::new(db.clone()));
        Self {
            db,
            user_repo,
            book_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn books(&self) -> Arc<dyn BookRepository> {
        self.book_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware book repository.
///
/// Unlike [`BookRepository`], lookups here are not owner-scoped: the content
/// write path needs to know who really owns a book.
pub struct TxBookRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxBookRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Resolve the owner of a book, regardless of who is asking
    pub async fn find_owner(&self, id: i32) -> AppResult<Option<Uuid>> {
        BookEntity::find_by_id(id)
            .select_only()
            .column(book::Column::UserId)
            .into_tuple::<Uuid>()
            .one(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrite the content of an owned book and refresh its timestamp
    pub async fn write_content(
        &self,
        id: i32,
        owner: Uuid,
        content: Option<String>,
    ) -> AppResult<Option<BookContentSummary>> {
        let Some(model) = BookEntity::find_by_id(id)
            .filter(book::Column::UserId.eq(owner))
            .one(self.txn)
            .await
            .map_err(AppError::from)?
        else {
            return Ok(None);
        };

        let mut active: BookActiveModel = model.into();
        active.content = Set(content);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.txn).await.map_err(AppError::from)?;

        Ok(Some(BookContentSummary::from(Book::from(model))))
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
