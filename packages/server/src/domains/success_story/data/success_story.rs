use serde::{Deserialize, Serialize};

/// A featured story enriched with the member it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessStoryData {
    pub quote: String,
    pub company: String,
    pub company_logo_url: String,
    pub member_name: String,
    pub member_photo_url: String,
    /// Role of the member at the time of the story
    pub member_role: String,
}
