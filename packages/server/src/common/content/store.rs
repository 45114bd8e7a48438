//! Filesystem access shared by the markdown repositories.
//!
//! Every call goes to disk; nothing is cached between requests.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use super::{parse_document, ContentError, Document};

pub const MARKDOWN_EXTENSION: &str = "md";

/// A directory of markdown files, one entity per file
#[derive(Debug, Clone)]
pub struct MarkdownDirectory {
    root: PathBuf,
}

impl MarkdownDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Ids of every `*.md` file in the directory, sorted by file name
    pub async fn list_ids(&self) -> Result<Vec<String>, ContentError> {
        let io_err = |source| ContentError::Io {
            path: self.root.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(io_err)?;
        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let file_name = entry.file_name();
            if let Some(id) = file_name.to_str().and_then(id_from_file_name) {
                ids.push(id.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Read and split `<root>/<id>.md`
    pub async fn read<T: DeserializeOwned>(&self, id: &str) -> Result<Document<T>, ContentError> {
        let path = self.path_for(id)?;
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ContentError::Io { path, source })?;

        parse_document(&content)
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, ContentError> {
        if !is_valid_id(id) {
            return Err(ContentError::InvalidId(id.to_string()));
        }
        Ok(self.root.join(format!("{id}.{MARKDOWN_EXTENSION}")))
    }
}

/// `jane-doe.md` → `jane-doe`; anything else is not content
pub fn id_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(".md")
        .filter(|stem| !stem.is_empty())
}

/// Ids come from URLs, so they must not escape the content directory
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_markdown_files_have_ids() {
        assert_eq!(id_from_file_name("jane-doe.md"), Some("jane-doe"));
        assert_eq!(id_from_file_name("notes.txt"), None);
        assert_eq!(id_from_file_name("README.markdown"), None);
        assert_eq!(id_from_file_name(".md"), None);
    }

    #[test]
    fn path_traversal_ids_are_rejected() {
        assert!(is_valid_id("jane-doe"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id(".."));
        assert!(!is_valid_id("../secrets"));
        assert!(!is_valid_id("a/b"));
        assert!(!is_valid_id("a\\b"));
    }

    #[tokio::test]
    async fn lists_sorted_markdown_ids() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "a.md", "notes.txt"] {
            std::fs::write(dir.path().join(name), "---\n---\n").unwrap();
        }

        let ids = MarkdownDirectory::new(dir.path()).list_ids().await.unwrap();

        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = MarkdownDirectory::new(dir.path().join("missing"));

        assert!(matches!(store.list_ids().await, Err(ContentError::Io { .. })));
    }
}
