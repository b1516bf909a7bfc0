//! Book service - owner-scoped CRUD over a user's catalogue.
//!
//! Reads, metadata updates and deletes are ownership-opaque: a book owned by
//! someone else is reported as `NotFound`. Writing content is the one path
//! that answers `Forbidden` for a foreign book, see [`BookService::set_content`].

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Book, BookContent, BookContentSummary, BookInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Message returned when a caller writes content into a book it does not own
pub const FOREIGN_CONTENT_WRITE: &str = "You do not have permission to change this book's content";

/// Book service trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    /// List the caller's books, ordered by ID
    async fn list(&self, owner: Uuid) -> AppResult<Vec<Book>>;

    /// Add a book to the caller's catalogue
    async fn create(&self, owner: Uuid, input: BookInput) -> AppResult<Book>;

    /// Get one of the caller's books
    async fn get(&self, owner: Uuid, id: i32) -> AppResult<Book>;

    /// Replace the metadata of one of the caller's books
    async fn update(&self, owner: Uuid, id: i32, input: BookInput) -> AppResult<Book>;

    /// Delete one of the caller's books, returning the removed record
    async fn delete(&self, owner: Uuid, id: i32) -> AppResult<Book>;

    /// Read a book's content
    async fn get_content(&self, owner: Uuid, id: i32) -> AppResult<BookContent>;

    /// Overwrite a book's content.
    ///
    /// Fails with `NotFound` if the book does not exist and `Forbidden` if
    /// it belongs to another user.
    async fn set_content(
        &self,
        owner: Uuid,
        id: i32,
        content: Option<String>,
    ) -> AppResult<BookContentSummary>;
}

/// Concrete implementation of BookService using Unit of Work.
pub struct BookManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BookService for BookManager<U> {
    async fn list(&self, owner: Uuid) -> AppResult<Vec<Book>> {
        self.uow.books().list_by_owner(owner).await
    }

    async fn create(&self, owner: Uuid, input: BookInput) -> AppResult<Book> {
        input.ensure_valid()?;

        let book = self.uow.books().create(owner, input).await?;
        tracing::info!(book_id = book.id, user_id = %owner, "Book created");
        Ok(book)
    }

    async fn get(&self, owner: Uuid, id: i32) -> AppResult<Book> {
        self.uow.books().find_owned(id, owner).await?.ok_or_not_found()
    }

    async fn update(&self, owner: Uuid, id: i32, input: BookInput) -> AppResult<Book> {
        input.ensure_valid()?;

        self.uow
            .books()
            .update_owned(id, owner, input)
            .await?
            .ok_or_not_found()
    }

    async fn delete(&self, owner: Uuid, id: i32) -> AppResult<Book> {
        let book = self
            .uow
            .books()
            .delete_owned(id, owner)
            .await?
            .ok_or_not_found()?;

        tracing::info!(book_id = id, user_id = %owner, "Book deleted");
        Ok(book)
    }

    async fn get_content(&self, owner: Uuid, id: i32) -> AppResult<BookContent> {
        self.uow.books().find_content(id, owner).await?.ok_or_not_found()
    }

    async fn set_content(
        &self,
        owner: Uuid,
        id: i32,
        content: Option<String>,
    ) -> AppResult<BookContentSummary> {
        with_transaction!(self.uow, |ctx| {
            let books = ctx.books();

            match books.find_owner(id).await? {
                None => Err(AppError::NotFound),
                Some(actual) if actual != owner => {
                    tracing::warn!(book_id = id, user_id = %owner, "Content write on foreign book");
                    Err(AppError::forbidden(FOREIGN_CONTENT_WRITE))
                }
                Some(_) => books.write_content(id, owner, content).await?.ok_or_not_found(),
            }
        })
    }
}
