pub mod member;

pub use member::{MarkdownMemberRepository, Member, DEFAULT_AVATAR_URL};
