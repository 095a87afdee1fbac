mod mock;
mod traits;


pub use mock::MockArticleRepository;
pub use traits::ArticleRepository;
