use std::path::PathBuf;

use async_trait::async_trait;
use futures::future::join_all;
use serde::Deserialize;
use tracing::error;

use crate::common::content::{flag, log_load_failure, non_empty, ContentError, Document};
use crate::common::MarkdownDirectory;
use crate::kernel::BaseSuccessStoryRepository;

pub const DEFAULT_COMPANY_LOGO_URL: &str = "/images/companies/default-logo.svg";

/// A member's internship or job placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessStory {
    pub id: String,
    /// Weak reference to a member id; may not resolve
    pub member_id: String,
    pub company: String,
    pub company_logo_url: String,
    pub quote: String,
    pub is_featured: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuccessStoryFrontmatter {
    member_id: Option<String>,
    company: Option<String>,
    company_logo_url: Option<String>,
    quote: Option<String>,
    is_featured: Option<serde_yaml::Value>,
}

impl SuccessStory {
    fn from_document(
        id: &str,
        doc: Document<SuccessStoryFrontmatter>,
    ) -> Result<Self, ContentError> {
        let fm = doc.front_matter;

        Ok(Self {
            id: id.to_string(),
            member_id: non_empty(fm.member_id).ok_or(ContentError::MissingField("memberId"))?,
            company: non_empty(fm.company).ok_or(ContentError::MissingField("company"))?,
            company_logo_url: non_empty(fm.company_logo_url)
                .unwrap_or_else(|| DEFAULT_COMPANY_LOGO_URL.to_string()),
            quote: non_empty(fm.quote).ok_or(ContentError::MissingField("quote"))?,
            is_featured: flag(fm.is_featured),
        })
    }
}

/// Reads stories from `<content>/stories/*.md` on every call
#[derive(Debug, Clone)]
pub struct MarkdownSuccessStoryRepository {
    dir: MarkdownDirectory,
}

impl MarkdownSuccessStoryRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: MarkdownDirectory::new(dir),
        }
    }

    async fn parse_story_file(&self, id: &str) -> Option<SuccessStory> {
        let loaded = self
            .dir
            .read::<SuccessStoryFrontmatter>(id)
            .await
            .and_then(|doc| SuccessStory::from_document(id, doc));

        match loaded {
            Ok(story) => Some(story),
            Err(e) => {
                log_load_failure("story", id, &e);
                None
            }
        }
    }
}

#[async_trait]
impl BaseSuccessStoryRepository for MarkdownSuccessStoryRepository {
    async fn find_all(&self) -> Vec<SuccessStory> {
        let ids = match self.dir.list_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Error reading stories directory");
                return Vec::new();
            }
        };

        join_all(ids.iter().map(|id| self.parse_story_file(id)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }
}
