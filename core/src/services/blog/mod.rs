//! Blog service module
//!
//! Article create, list, get, update and delete. Writes are tied to the
//! authenticated principal; only the author may change or remove an article.

mod service;


pub use service::BlogService;
