//! Book domain entity and the views derived from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};
use crate::utils::coerce::{blank_as_none, lenient_year};

/// Book domain entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Book {
    #[schema(example = 1)]
    pub id: i32,
    /// Owning user
    pub user_id: Uuid,
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = "Frank Herbert")]
    pub author: String,
    #[schema(example = "978-0441013593")]
    pub isbn: Option<String>,
    #[schema(example = 1965)]
    pub published_year: Option<i32>,
    #[schema(example = "Science Fiction")]
    pub genre: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book metadata as submitted on create and update.
///
/// Updates replace every field, so omitted optional fields are cleared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Dune")]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Frank Herbert")]
    pub author: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "978-0441013593")]
    pub isbn: Option<String>,
    /// Numbers or numeric strings; anything else is stored as null
    #[serde(default, deserialize_with = "lenient_year")]
    #[schema(value_type = Option<i32>, example = 1965)]
    pub published_year: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Science Fiction")]
    pub genre: Option<String>,
}

const REQUIRED_FIELDS: &str = "Title and author are required";

/// Title and author must contain something other than whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(REQUIRED_FIELDS.into());
        return Err(err);
    }
    Ok(())
}

impl BookInput {
    /// Same rules as the HTTP extractor, for callers that bypass it.
    pub fn ensure_valid(&self) -> AppResult<()> {
        self.validate().map_err(|_| AppError::validation(REQUIRED_FIELDS))
    }
}

/// Reading view of a book's content
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookContent {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub content: Option<String>,
    /// Owning user
    pub owner: Uuid,
}

/// Result of writing a book's content
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookContentSummary {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
}

impl From<Book> for BookContent {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            content: book.content,
            owner: book.user_id,
        }
    }
}

impl From<Book> for BookContentSummary {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            content: book.content,
        }
    }
}
