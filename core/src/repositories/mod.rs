pub mod article;
pub mod user;

pub use article::{ArticleRepository, MockArticleRepository};
pub use user::{MockUserRepository, UserRepository};
