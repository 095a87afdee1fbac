//! Blog service implementation

use std::sync::Arc;

use blog_shared::validation::validators;

use crate::domain::entities::article::{Article, ArticleDraft};
use crate::domain::entities::token::Principal;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::ArticleRepository;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 255;

/// Service for managing blog articles
pub struct BlogService<A>
where
    A: ArticleRepository,
{
    article_repository: Arc<A>,
}

impl<A> BlogService<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repository: Arc<A>) -> Self {
        Self { article_repository }
    }

    /// Create an article authored by `author`
    pub async fn save(&self, draft: ArticleDraft, author: &Principal) -> DomainResult<Article> {
        validate_draft(&draft)?;

        let article = self
            .article_repository
            .save(draft.into_new_article(author.username()))
            .await?;

        tracing::info!(article_id = article.id, author = %article.author, "Article created");
        Ok(article)
    }

    /// All articles ordered by id
    pub async fn find_all(&self) -> DomainResult<Vec<Article>> {
        self.article_repository.find_all().await
    }

    /// Load one article
    ///
    /// # Errors
    ///
    /// `DomainError::NotFound` when no article has this id.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Article> {
        self.article_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Article"))
    }

    /// Replace title and content of an article owned by `principal`
    pub async fn update(
        &self,
        id: i64,
        draft: ArticleDraft,
        principal: &Principal,
    ) -> DomainResult<Article> {
        validate_draft(&draft)?;

        let mut article = self.find_by_id(id).await?;
        authorize_article_author(&article, principal)?;

        article.update(draft.title, draft.content);
        let article = self.article_repository.update(article).await?;

        tracing::info!(article_id = article.id, "Article updated");
        Ok(article)
    }

    /// Delete an article owned by `principal`
    pub async fn delete(&self, id: i64, principal: &Principal) -> DomainResult<()> {
        let article = self.find_by_id(id).await?;
        authorize_article_author(&article, principal)?;

        if !self.article_repository.delete(id).await? {
            return Err(DomainError::not_found("Article"));
        }

        tracing::info!(article_id = id, "Article deleted");
        Ok(())
    }
}

fn authorize_article_author(article: &Article, principal: &Principal) -> DomainResult<()> {
    if !article.is_authored_by(principal.username()) {
        tracing::warn!(
            article_id = article.id,
            subject = %principal.subject,
            "Rejected write to another author's article"
        );
        return Err(AuthError::InsufficientPermissions.into());
    }
    Ok(())
}

fn validate_draft(draft: &ArticleDraft) -> DomainResult<()> {
    if !validators::not_empty(&draft.title) {
        return Err(required("title"));
    }
    if !validators::length_between(&draft.title, 1, MAX_TITLE_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "title".to_string(),
            min: 1,
            max: MAX_TITLE_LENGTH,
        }
        .into());
    }
    if !validators::not_empty(&draft.content) {
        return Err(required("content"));
    }
    Ok(())
}

fn required(field: &str) -> DomainError {
    ValidationError::RequiredField {
        field: field.to_string(),
    }
    .into()
}
