use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::common::utils::{
    format_card_date, format_english_full_date, format_full_date, format_short_date,
    render_markdown,
};
use crate::domains::agenda::models::agenda_event::AgendaEvent;

/// Compact card shown next to the featured event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCardData {
    pub title: String,
    /// e.g. "14 DE OCTUBRE DE 2023, 11:00"
    pub formatted_date: String,
    pub image_url: String,
}

/// Featured (next upcoming) event on the agenda page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedEventData {
    pub id: String,
    pub title: String,
    /// e.g. "miércoles, 10 de enero de 2024"
    pub formatted_date: String,
    pub description: String,
    /// Body rendered to HTML
    pub body_content: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub date: NaiveDateTime,
    pub card: EventCardData,
}

impl From<AgendaEvent> for FeaturedEventData {
    fn from(event: AgendaEvent) -> Self {
        Self {
            card: EventCardData {
                title: event.title.clone(),
                formatted_date: format_card_date(event.date),
                image_url: event.image_url.clone(),
            },
            id: event.id,
            title: event.title,
            formatted_date: format_full_date(event.date),
            description: event.description,
            body_content: render_markdown(&event.body_content),
            tags: event.tags,
            image_url: event.image_url,
            date: event.date,
        }
    }
}

/// Past event card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedEventData {
    pub id: String,
    pub title: String,
    /// e.g. "10 de febrero de 2024"
    pub formatted_date: String,
    pub thumbnail_url: String,
}

impl From<AgendaEvent> for ArchivedEventData {
    fn from(event: AgendaEvent) -> Self {
        Self {
            formatted_date: format_short_date(event.date),
            id: event.id,
            title: event.title,
            thumbnail_url: event.image_url,
        }
    }
}

/// Everything the agenda page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaPageData {
    pub featured_event: Option<FeaturedEventData>,
    pub archived_events: Vec<ArchivedEventData>,
}

/// Full event details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailsData {
    pub id: String,
    pub title: String,
    pub date: NaiveDateTime,
    pub formatted_date: String,
    pub description: String,
    /// Body rendered to HTML
    pub body_content: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl From<AgendaEvent> for EventDetailsData {
    fn from(event: AgendaEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.date,
            formatted_date: format_full_date(event.date),
            description: event.description,
            body_content: render_markdown(&event.body_content),
            tags: event.tags,
            image_url: event.image_url,
        }
    }
}

/// Next-event banner on the homepage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageFeaturedEvent {
    pub id: String,
    pub title: String,
    /// e.g. "Wednesday, January 10, 2024"
    pub formatted_date: String,
}

impl From<AgendaEvent> for HomepageFeaturedEvent {
    fn from(event: AgendaEvent) -> Self {
        Self {
            formatted_date: format_english_full_date(event.date),
            id: event.id,
            title: event.title,
        }
    }
}
