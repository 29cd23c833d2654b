//! Entities exposed by the service

pub mod author;

pub use author::{Author, AuthorsModule};
