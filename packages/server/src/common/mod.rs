// Common types and utilities shared across the application

pub mod content;
pub mod utils;

pub use content::{ContentError, Document, MarkdownDirectory};
