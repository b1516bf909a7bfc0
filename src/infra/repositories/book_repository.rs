//! Book repository - owner-scoped book persistence.
//!
//! Every query filters on `user_id`; a book owned by someone else is
//! returned as `None`, exactly like a missing one.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::book::{self, ActiveModel, Entity as BookEntity, Model};
use crate::domain::{Book, BookContent, BookInput};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entity name reported when the ISBN unique constraint rejects a write
const ISBN_CONFLICT: &str = "ISBN";

/// Book repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List books owned by `owner`, ordered by ID
    async fn list_by_owner(&self, owner: Uuid) -> AppResult<Vec<Book>>;

    /// Find a book by ID, only if owned by `owner`
    async fn find_owned(&self, id: i32, owner: Uuid) -> AppResult<Option<Book>>;

    /// Project a book's content, only if owned by `owner`
    async fn find_content(&self, id: i32, owner: Uuid) -> AppResult<Option<BookContent>>;

    /// Insert a new book for `owner`
    async fn create(&self, owner: Uuid, input: BookInput) -> AppResult<Book>;

    /// Replace the metadata of an owned book
    async fn update_owned(&self, id: i32, owner: Uuid, input: BookInput) -> AppResult<Option<Book>>;

    /// Delete an owned book, returning the removed record
    async fn delete_owned(&self, id: i32, owner: Uuid) -> AppResult<Option<Book>>;
}

/// Concrete implementation of BookRepository
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32, owner: Uuid) -> AppResult<Option<Model>> {
        BookEntity::find_by_id(id)
            .filter(book::Column::UserId.eq(owner))
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn list_by_owner(&self, owner: Uuid) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .filter(book::Column::UserId.eq(owner))
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn find_owned(&self, id: i32, owner: Uuid) -> AppResult<Option<Book>> {
        Ok(self.find_model(id, owner).await?.map(Book::from))
    }

    async fn find_content(&self, id: i32, owner: Uuid) -> AppResult<Option<BookContent>> {
        Ok(self
            .find_model(id, owner)
            .await?
            .map(|model| BookContent::from(Book::from(model))))
    }

    async fn create(&self, owner: Uuid, input: BookInput) -> AppResult<Book> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(owner),
            title: Set(input.title),
            author: Set(input.author),
            isbn: Set(input.isbn),
            published_year: Set(input.published_year),
            genre: Set(input.genre),
            content: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, ISBN_CONFLICT))?;

        Ok(Book::from(model))
    }

    async fn update_owned(&self, id: i32, owner: Uuid, input: BookInput) -> AppResult<Option<Book>> {
        let Some(model) = self.find_model(id, owner).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.title = Set(input.title);
        active.author = Set(input.author);
        active.isbn = Set(input.isbn);
        active.published_year = Set(input.published_year);
        active.genre = Set(input.genre);
        active.updated_at = Set(chrono::Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, ISBN_CONFLICT))?;

        Ok(Some(Book::from(model)))
    }

    async fn delete_owned(&self, id: i32, owner: Uuid) -> AppResult<Option<Book>> {
        let Some(model) = self.find_model(id, owner).await? else {
            return Ok(None);
        };

        let result = BookEntity::delete_many()
            .filter(book::Column::Id.eq(id))
            .filter(book::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Book::from(model)))
    }
}
