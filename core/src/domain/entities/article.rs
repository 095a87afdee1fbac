//! Article entity for blog posts.

use serde::{Deserialize, Serialize};

/// A published blog article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier assigned by storage
    pub id: i64,

    /// Email of the principal that created the article
    pub author: String,

    pub title: String,

    pub content: String,
}

impl Article {
    /// Replaces title and content in place
    pub fn update(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }

    /// Whether `subject` is the author of this article
    pub fn is_authored_by(&self, subject: &str) -> bool {
        self.author == subject
    }
}

/// An article that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl NewArticle {
    /// Attaches the storage-assigned id
    pub fn with_id(self, id: i64) -> Article {
        Article {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
        }
    }
}

/// Title and content supplied by a client when writing an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Turns the draft into a persistable article owned by `author`
    pub fn into_new_article(self, author: impl Into<String>) -> NewArticle {
        NewArticle {
            author: author.into(),
            title: self.title,
            content: self.content,
        }
    }
}
