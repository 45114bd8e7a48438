use std::path::PathBuf;

use async_trait::async_trait;
use futures::future::join_all;
use serde::Deserialize;
use tracing::error;

use crate::common::content::{log_load_failure, non_empty, ContentError, Document};
use crate::common::MarkdownDirectory;
use crate::kernel::BaseMemberRepository;

pub const DEFAULT_AVATAR_URL: &str = "/images/default-avatar.png";

/// Member model - one markdown file per member
///
/// The id is the file stem (`content/members/jane-doe.md` -> `jane-doe`).
/// The markdown body is the biography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    pub profile_picture_url: String,
    pub skills: Vec<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub biography: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberFrontmatter {
    name: Option<String>,
    role: Option<String>,
    profile_picture_url: Option<String>,
    skills: Option<Vec<String>>,
    github_url: Option<String>,
    linkedin_url: Option<String>,
}

impl Member {
    fn from_document(id: &str, doc: Document<MemberFrontmatter>) -> Result<Self, ContentError> {
        let fm = doc.front_matter;

        Ok(Self {
            id: id.to_string(),
            name: non_empty(fm.name).ok_or(ContentError::MissingField("name"))?,
            role: non_empty(fm.role).ok_or(ContentError::MissingField("role"))?,
            profile_picture_url: non_empty(fm.profile_picture_url)
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            skills: fm.skills.unwrap_or_default(),
            github_url: non_empty(fm.github_url),
            linkedin_url: non_empty(fm.linkedin_url),
            biography: doc.body.trim().to_string(),
        })
    }
}

/// Reads members from `<content>/members/*.md` on every call
#[derive(Debug, Clone)]
pub struct MarkdownMemberRepository {
    dir: MarkdownDirectory,
}

impl MarkdownMemberRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: MarkdownDirectory::new(dir),
        }
    }

    async fn load(&self, id: &str) -> Result<Member, ContentError> {
        let doc = self.dir.read::<MemberFrontmatter>(id).await?;
        Member::from_document(id, doc)
    }
}

#[async_trait]
impl BaseMemberRepository for MarkdownMemberRepository {
    async fn find_all(&self) -> Vec<Member> {
        let ids = match self.dir.list_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Error reading members directory");
                return Vec::new();
            }
        };

        join_all(ids.iter().map(|id| self.find_by_id(id)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Option<Member> {
        match self.load(id).await {
            Ok(member) => Some(member),
            Err(e) => {
                log_load_failure("member", id, &e);
                None
            }
        }
    }
}
