//! Domain entities representing core business objects.

pub mod article;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use article::{Article, ArticleDraft, NewArticle};
pub use token::{Claims, Principal, UserIdClaim, ROLE_USER};
pub use user::{NewUser, User};
