use serde::{Deserialize, Serialize};

use crate::domains::member::models::member::Member as MemberModel;

/// Member data as the pages need it
///
/// Currently a one-to-one copy of the model; kept separate so views never
/// depend on how members are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberData {
    /// File-derived identifier (e.g. "jane-doe")
    pub id: String,

    pub name: String,

    /// Role or specialization (e.g. "Software Engineer")
    pub role: String,

    pub profile_picture_url: String,

    pub skills: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    /// Markdown biography
    pub biography: String,
}

impl MemberData {
    /// Case-insensitive match against name, role and skills
    pub fn matches(&self, query: &str) -> bool {
        let haystack =
            format!("{} {} {}", self.name, self.role, self.skills.join(" ")).to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

impl From<MemberModel> for MemberData {
    fn from(member: MemberModel) -> Self {
        Self {
            id: member.id,
            name: member.name,
            role: member.role,
            profile_picture_url: member.profile_picture_url,
            skills: member.skills,
            github_url: member.github_url,
            linkedin_url: member.linkedin_url,
            biography: member.biography,
        }
    }
}
