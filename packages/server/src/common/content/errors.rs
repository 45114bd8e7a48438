use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a single markdown content file
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Front-matter block is not terminated")]
    UnterminatedFrontmatter,

    #[error("Invalid front-matter: {0}")]
    InvalidFrontmatter(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date `{0}`")]
    InvalidDate(String),

    #[error("Invalid content id `{0}`")]
    InvalidId(String),
}

impl ContentError {
    /// The file exists but its content is unusable
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::UnterminatedFrontmatter
                | Self::InvalidFrontmatter(_)
                | Self::MissingField(_)
                | Self::InvalidDate(_)
        )
    }

    /// Nothing to load under the requested id
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::InvalidId(_) => true,
            _ => false,
        }
    }
}

/// Log a per-file load failure at a level that matches its cause
pub fn log_load_failure(kind: &str, id: &str, error: &ContentError) {
    if error.is_malformed() {
        tracing::warn!(kind, id, error = %error, "Skipping malformed content file");
    } else if error.is_not_found() {
        tracing::debug!(kind, id, error = %error, "Content file not found");
    } else {
        tracing::error!(kind, id, error = %error, "Error reading content file");
    }
}
