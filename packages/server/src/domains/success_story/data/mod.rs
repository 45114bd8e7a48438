pub mod success_story;

pub use success_story::SuccessStoryData;
