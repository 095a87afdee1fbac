use blog_core::domain::entities::article::{Article, ArticleDraft};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of article create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ArticleRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

impl From<ArticleRequest> for ArticleDraft {
    fn from(request: ArticleRequest) -> Self {
        ArticleDraft::new(request.title, request.content)
    }
}

/// Public API projection of an article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleResponse {
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            title: article.title,
            content: article.content,
        }
    }
}

/// Row of the article list page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleListViewResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleListViewResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
        }
    }
}

/// Single article page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleViewResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<Article> for ArticleViewResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            author: article.author,
        }
    }
}

/// Editor form; empty when creating a new article
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleFormView {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleFormView {
    fn from(article: Article) -> Self {
        Self {
            id: Some(article.id),
            title: article.title,
            content: article.content,
        }
    }
}

/// Query string of the editor page
#[derive(Debug, Clone, Deserialize)]
pub struct NewArticleQuery {
    pub id: Option<i64>,
}
