//! Member domain - talent directory and profile submissions
//!
//! Members live in `<content>/members/*.md`; there is no write path in-process.

pub mod actions;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::MemberData;
pub use models::member::{MarkdownMemberRepository, Member};
