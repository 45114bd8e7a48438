use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveDateTime};
use futures::future::join_all;
use serde::Deserialize;
use tracing::error;

use crate::common::content::{log_load_failure, non_empty, ContentError, Document};
use crate::common::utils::parse_event_date;
use crate::common::MarkdownDirectory;
use crate::kernel::BaseAgendaEventRepository;

/// Agenda event model - one markdown file per event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEvent {
    /// File stem (e.g. "nadie-sabe-como-romperla")
    pub id: String,
    pub title: String,
    /// Local wall-clock start; date-only entries start at midnight
    pub date: NaiveDateTime,
    /// Short summary from front-matter
    pub description: String,
    /// Markdown body
    pub body_content: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AgendaEventFrontmatter {
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
    image_url: Option<String>,
}

impl AgendaEvent {
    fn from_document(
        id: &str,
        doc: Document<AgendaEventFrontmatter>,
    ) -> Result<Self, ContentError> {
        let fm = doc.front_matter;

        let raw_date = non_empty(fm.date).ok_or(ContentError::MissingField("date"))?;
        let date = parse_event_date(&raw_date).ok_or(ContentError::InvalidDate(raw_date))?;

        Ok(Self {
            id: id.to_string(),
            title: non_empty(fm.title).ok_or(ContentError::MissingField("title"))?,
            date,
            description: fm.description.unwrap_or_default(),
            body_content: doc.body.trim().to_string(),
            tags: fm.tags.unwrap_or_default(),
            image_url: fm.image_url.unwrap_or_default(),
        })
    }

    /// Calendar day the event happens on
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

/// The next event: earliest one happening today or later
pub fn select_featured(events: Vec<AgendaEvent>, today: NaiveDate) -> Option<AgendaEvent> {
    events
        .into_iter()
        .filter(|event| event.day() >= today)
        .min_by_key(|event| event.date)
}

/// Past events, most recent first
pub fn select_archived(events: Vec<AgendaEvent>, today: NaiveDate) -> Vec<AgendaEvent> {
    let mut archived: Vec<AgendaEvent> = events
        .into_iter()
        .filter(|event| event.day() < today)
        .collect();
    archived.sort_by(|a, b| b.date.cmp(&a.date));
    archived
}

/// Reads events from `<content>/events/*.md` on every call
///
/// "Today" is the local calendar date unless pinned with [`Self::with_today`].
#[derive(Debug, Clone)]
pub struct MarkdownAgendaEventRepository {
    dir: MarkdownDirectory,
    today: Option<NaiveDate>,
}

impl MarkdownAgendaEventRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: MarkdownDirectory::new(dir),
            today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    async fn load(&self, id: &str) -> Result<AgendaEvent, ContentError> {
        let doc = self.dir.read::<AgendaEventFrontmatter>(id).await?;
        AgendaEvent::from_document(id, doc)
    }

    async fn get_all_events(&self) -> Vec<AgendaEvent> {
        let ids = match self.dir.list_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Could not read event files");
                return Vec::new();
            }
        };

        join_all(ids.iter().map(|id| self.find_by_id(id)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }
}

#[async_trait]
impl BaseAgendaEventRepository for MarkdownAgendaEventRepository {
    async fn find_featured_event(&self) -> Option<AgendaEvent> {
        select_featured(self.get_all_events().await, self.today())
    }

    async fn find_archived_events(&self) -> Vec<AgendaEvent> {
        select_archived(self.get_all_events().await, self.today())
    }

    async fn find_by_id(&self, id: &str) -> Option<AgendaEvent> {
        match self.load(id).await {
            Ok(event) => Some(event),
            Err(e) => {
                log_load_failure("event", id, &e);
                None
            }
        }
    }
}
