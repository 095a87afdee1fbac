//! Article repository trait defining the interface for article persistence.

use async_trait::async_trait;

use crate::domain::entities::article::{Article, NewArticle};
use crate::errors::DomainError;

/// Repository trait for Article entity persistence operations
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// All articles ordered by id
    async fn find_all(&self) -> Result<Vec<Article>, DomainError>;

    /// Find an article by id
    ///
    /// # Returns
    /// * `Ok(Some(Article))` - Article found
    /// * `Ok(None)` - No article with that id
    /// * `Err(DomainError)` - Storage error
    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, DomainError>;

    /// Persist a new article and return it with its assigned id
    async fn save(&self, article: NewArticle) -> Result<Article, DomainError>;

    /// Overwrite an existing article
    ///
    /// # Errors
    /// `DomainError::NotFound` when no article has `article.id`.
    async fn update(&self, article: Article) -> Result<Article, DomainError>;

    /// Delete an article, returning whether it existed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
