//! Success story domain - member placements shown on the homepage

pub mod actions;
pub mod data;
pub mod models;

pub use data::SuccessStoryData;
pub use models::success_story::{MarkdownSuccessStoryRepository, SuccessStory};
