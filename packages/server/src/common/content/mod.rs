// Markdown content store: front-matter parsing and directory access

pub mod errors;
pub mod frontmatter;
pub mod store;

pub use errors::{log_load_failure, ContentError};
pub use frontmatter::{flag, non_empty, parse_document, Document};
pub use store::MarkdownDirectory;
