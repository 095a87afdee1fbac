mod mock;
mod traits;


pub use mock::MockUserRepository;
pub use traits::UserRepository;
