//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

// Re-export mail types so domains don't depend on the client crate directly
pub use mailer::{MailAttachment, OutgoingMail};

pub use deps::{DisabledMailer, MailerAdapter, ServerDeps, EVENTS_DIR, MEMBERS_DIR, STORIES_DIR};
pub use test_dependencies::TestDependencies;
pub use traits::*;
