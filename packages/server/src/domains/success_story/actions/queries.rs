//! Success story query actions

use futures::future::join_all;

use crate::domains::member::models::member::{Member, DEFAULT_AVATAR_URL};
use crate::domains::success_story::data::SuccessStoryData;
use crate::domains::success_story::models::success_story::SuccessStory;
use crate::kernel::{BaseMemberRepository, BaseSuccessStoryRepository};

pub const FALLBACK_MEMBER_NAME: &str = "Algoritmia Member";
pub const FALLBACK_MEMBER_ROLE: &str = "Alumni";

fn to_data(story: SuccessStory, member: Option<Member>) -> SuccessStoryData {
    let (member_name, member_photo_url, member_role) = match member {
        Some(member) => (member.name, member.profile_picture_url, member.role),
        None => (
            FALLBACK_MEMBER_NAME.to_string(),
            DEFAULT_AVATAR_URL.to_string(),
            FALLBACK_MEMBER_ROLE.to_string(),
        ),
    };

    SuccessStoryData {
        quote: story.quote,
        company: story.company,
        company_logo_url: story.company_logo_url,
        member_name,
        member_photo_url,
        member_role,
    }
}

/// Featured stories with member details; unknown members get placeholders
pub async fn get_featured_success_stories(
    stories: &dyn BaseSuccessStoryRepository,
    members: &dyn BaseMemberRepository,
) -> Vec<SuccessStoryData> {
    let featured = stories.find_featured().await;

    let lookups = featured.into_iter().map(|story| async move {
        let member = members.find_by_id(&story.member_id).await;
        to_data(story, member)
    });

    join_all(lookups).await
}
