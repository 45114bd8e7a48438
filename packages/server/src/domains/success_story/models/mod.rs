pub mod success_story;

pub use success_story::{MarkdownSuccessStoryRepository, SuccessStory, DEFAULT_COMPANY_LOGO_URL};
