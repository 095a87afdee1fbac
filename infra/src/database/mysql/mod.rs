//! MySQL repository implementations

mod article_repository_impl;
mod user_repository_impl;

pub use article_repository_impl::MySqlArticleRepository;
pub use user_repository_impl::MySqlUserRepository;

use blog_core::errors::DomainError;

/// Wrap a SQLx failure as an internal domain error
pub(crate) fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "{}", context);
    DomainError::Internal {
        message: format!("{}: {}", context, err),
    }
}

/// Whether the failure is a unique-key violation
pub(crate) fn is_duplicate_key(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
