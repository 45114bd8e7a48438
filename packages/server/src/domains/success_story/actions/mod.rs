mod queries;

pub use queries::{get_featured_success_stories, FALLBACK_MEMBER_NAME, FALLBACK_MEMBER_ROLE};
