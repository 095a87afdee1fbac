//! Business services containing domain logic and use cases.

pub mod blog;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use blog::BlogService;
pub use token::{TokenService, TokenServiceConfig};
pub use user::{UserService, UserServiceConfig};
