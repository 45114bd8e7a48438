//! Member query actions
//!
//! Query actions return data directly; repositories already degrade
//! failures to empty results.

use tracing::debug;

use crate::domains::member::data::MemberData;
use crate::kernel::BaseMemberRepository;

/// Every readable member, mapped for display
pub async fn get_all_members(repo: &dyn BaseMemberRepository) -> Vec<MemberData> {
    let members = repo.find_all().await;
    debug!(count = members.len(), "Loaded members");
    members.into_iter().map(MemberData::from).collect()
}

pub async fn get_member_by_id(repo: &dyn BaseMemberRepository, id: &str) -> Option<MemberData> {
    repo.find_by_id(id).await.map(MemberData::from)
}

/// Directory search; a blank query keeps everyone
pub fn search_members(members: Vec<MemberData>, query: &str) -> Vec<MemberData> {
    let query = query.trim();
    if query.is_empty() {
        return members;
    }

    members
        .into_iter()
        .filter(|member| member.matches(query))
        .collect()
}
