//! In-memory implementation of ArticleRepository for testing and local runs

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::article::{Article, NewArticle};
use crate::errors::DomainError;

use super::traits::ArticleRepository;

#[derive(Default)]
struct Store {
    next_id: i64,
    articles: BTreeMap<i64, Article>,
}

/// Mock article repository backed by an ordered map
#[derive(Clone, Default)]
pub struct MockArticleRepository {
    store: Arc<RwLock<Store>>,
}

impl MockArticleRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for MockArticleRepository {
    async fn find_all(&self) -> Result<Vec<Article>, DomainError> {
        let store = self.store.read().await;
        Ok(store.articles.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, DomainError> {
        let store = self.store.read().await;
        Ok(store.articles.get(&id).cloned())
    }

    async fn save(&self, article: NewArticle) -> Result<Article, DomainError> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let article = article.with_id(store.next_id);
        store.articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn update(&self, article: Article) -> Result<Article, DomainError> {
        let mut store = self.store.write().await;

        match store.articles.get_mut(&article.id) {
            Some(existing) => {
                *existing = article.clone();
                Ok(article)
            }
            None => Err(DomainError::not_found("Article")),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;
        Ok(store.articles.remove(&id).is_some())
    }
}
