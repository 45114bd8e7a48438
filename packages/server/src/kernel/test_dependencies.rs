// TestDependencies - in-memory implementations for testing
//
// Provides repositories and a recording mailer that can be injected into
// ServerDeps without touching the filesystem or the network.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    BaseAgendaEventRepository, BaseMailer, BaseMemberRepository, BaseSuccessStoryRepository,
    OutgoingMail, ServerDeps,
};
use crate::domains::agenda::models::agenda_event::{select_archived, select_featured, AgendaEvent};
use crate::domains::member::models::member::Member;
use crate::domains::success_story::models::success_story::SuccessStory;

// =============================================================================
// In-memory Member Repository
// =============================================================================

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Vec<Member>,
    lookups: Mutex<Vec<String>>,
}

impl InMemoryMemberRepository {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Ids passed to `find_by_id`, in call order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseMemberRepository for InMemoryMemberRepository {
    async fn find_all(&self) -> Vec<Member> {
        self.members.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<Member> {
        self.lookups.lock().unwrap().push(id.to_string());
        self.members.iter().find(|m| m.id == id).cloned()
    }
}

// =============================================================================
// In-memory Agenda Event Repository
// =============================================================================

pub struct InMemoryAgendaEventRepository {
    events: Vec<AgendaEvent>,
    today: NaiveDate,
}

impl InMemoryAgendaEventRepository {
    pub fn new(events: Vec<AgendaEvent>) -> Self {
        Self {
            events,
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl Default for InMemoryAgendaEventRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl BaseAgendaEventRepository for InMemoryAgendaEventRepository {
    async fn find_featured_event(&self) -> Option<AgendaEvent> {
        select_featured(self.events.clone(), self.today)
    }

    async fn find_archived_events(&self) -> Vec<AgendaEvent> {
        select_archived(self.events.clone(), self.today)
    }

    async fn find_by_id(&self, id: &str) -> Option<AgendaEvent> {
        self.events.iter().find(|e| e.id == id).cloned()
    }
}

// =============================================================================
// In-memory Success Story Repository
// =============================================================================

#[derive(Default)]
pub struct InMemorySuccessStoryRepository {
    stories: Vec<SuccessStory>,
}

impl InMemorySuccessStoryRepository {
    pub fn new(stories: Vec<SuccessStory>) -> Self {
        Self { stories }
    }
}

#[async_trait]
impl BaseSuccessStoryRepository for InMemorySuccessStoryRepository {
    async fn find_all(&self) -> Vec<SuccessStory> {
        self.stories.clone()
    }
}

// =============================================================================
// Mock Mailer
// =============================================================================

#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send returns an error
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<()> {
        if self.fail {
            return Err(anyhow!("mock SMTP failure"));
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub const TEST_RECIPIENT: &str = "review@example.org";

pub struct TestDependencies {
    pub members: Arc<InMemoryMemberRepository>,
    pub events: Arc<InMemoryAgendaEventRepository>,
    pub stories: Arc<InMemorySuccessStoryRepository>,
    pub mailer: Arc<MockMailer>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            members: Arc::new(InMemoryMemberRepository::default()),
            events: Arc::new(InMemoryAgendaEventRepository::default()),
            stories: Arc::new(InMemorySuccessStoryRepository::default()),
            mailer: Arc::new(MockMailer::new()),
        }
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = Arc::new(InMemoryMemberRepository::new(members));
        self
    }

    pub fn with_events(mut self, events: InMemoryAgendaEventRepository) -> Self {
        self.events = Arc::new(events);
        self
    }

    pub fn with_stories(mut self, stories: Vec<SuccessStory>) -> Self {
        self.stories = Arc::new(InMemorySuccessStoryRepository::new(stories));
        self
    }

    pub fn with_mailer(mut self, mailer: MockMailer) -> Self {
        self.mailer = Arc::new(mailer);
        self
    }

    /// Convert into ServerDeps; the mocks stay reachable through `self`
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.members.clone(),
            self.events.clone(),
            self.stories.clone(),
            self.mailer.clone(),
            TEST_RECIPIENT.to_string(),
            PathBuf::from("."),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
