//! MySQL implementation of the ArticleRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use blog_core::domain::entities::article::{Article, NewArticle};
use blog_core::errors::DomainError;
use blog_core::repositories::ArticleRepository;

use super::db_error;

/// MySQL implementation of ArticleRepository
pub struct MySqlArticleRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlArticleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_article(row: &MySqlRow) -> Result<Article, DomainError> {
        Ok(Article {
            id: row.try_get("id").map_err(|e| db_error("Failed to get id", e))?,
            author: row
                .try_get("author")
                .map_err(|e| db_error("Failed to get author", e))?,
            title: row
                .try_get("title")
                .map_err(|e| db_error("Failed to get title", e))?,
            content: row
                .try_get("content")
                .map_err(|e| db_error("Failed to get content", e))?,
        })
    }
}

#[async_trait]
impl ArticleRepository for MySqlArticleRepository {
    async fn find_all(&self) -> Result<Vec<Article>, DomainError> {
        let rows = sqlx::query("SELECT id, author, title, content FROM articles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list articles", e))?;

        rows.iter().map(Self::row_to_article).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, DomainError> {
        let query = r#"
            SELECT id, author, title, content
            FROM articles
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find article", e))?;

        row.as_ref().map(Self::row_to_article).transpose()
    }

    async fn save(&self, article: NewArticle) -> Result<Article, DomainError> {
        let result = sqlx::query("INSERT INTO articles (author, title, content) VALUES (?, ?, ?)")
            .bind(&article.author)
            .bind(&article.title)
            .bind(&article.content)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to save article", e))?;

        Ok(article.with_id(result.last_insert_id() as i64))
    }

    async fn update(&self, article: Article) -> Result<Article, DomainError> {
        // rows_affected is 0 for an unchanged row on MySQL, so existence is checked separately
        if self.find_by_id(article.id).await?.is_none() {
            return Err(DomainError::not_found("Article"));
        }

        sqlx::query("UPDATE articles SET title = ?, content = ? WHERE id = ?")
            .bind(&article.title)
            .bind(&article.content)
            .bind(article.id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update article", e))?;

        Ok(article)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete article", e))?;

        Ok(result.rows_affected() > 0)
    }
}
