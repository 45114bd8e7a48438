// Club Algoritmia website - server core
//
// Server-rendered homepage, talent directory, events agenda and talent
// submission form. Content is read from markdown files with YAML
// front-matter on every request; submissions are emailed for review.
//
// Domains are organized as domains/*/{models,data,actions}.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;
pub mod views;

pub use config::*;
