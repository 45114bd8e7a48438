// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseMailer, BaseMemberRepository)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::agenda::models::agenda_event::AgendaEvent;
use crate::domains::member::models::member::Member;
use crate::domains::success_story::models::success_story::SuccessStory;
use crate::kernel::OutgoingMail;

// =============================================================================
// Content Repositories
// =============================================================================
//
// Read paths never fail: problems are logged by the implementation and
// surface as `None` or an empty list.

#[async_trait]
pub trait BaseMemberRepository: Send + Sync {
    async fn find_all(&self) -> Vec<Member>;

    async fn find_by_id(&self, id: &str) -> Option<Member>;
}

#[async_trait]
pub trait BaseAgendaEventRepository: Send + Sync {
    /// Next upcoming event (on or after today)
    async fn find_featured_event(&self) -> Option<AgendaEvent>;

    /// Past events, most recent first
    async fn find_archived_events(&self) -> Vec<AgendaEvent>;

    async fn find_by_id(&self, id: &str) -> Option<AgendaEvent>;
}

#[async_trait]
pub trait BaseSuccessStoryRepository: Send + Sync {
    async fn find_all(&self) -> Vec<SuccessStory>;

    async fn find_featured(&self) -> Vec<SuccessStory> {
        self.find_all()
            .await
            .into_iter()
            .filter(|story| story.is_featured)
            .collect()
    }
}

// =============================================================================
// Mailer Trait (Infrastructure - outgoing email)
// =============================================================================

#[async_trait]
pub trait BaseMailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<()>;
}
