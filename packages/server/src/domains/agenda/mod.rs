//! Agenda domain - upcoming and past club events
//!
//! Events live in `<content>/events/*.md`. The featured event is the earliest
//! one on or after today; everything before today is archived.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{AgendaPageData, EventDetailsData, HomepageFeaturedEvent};
pub use models::agenda_event::{AgendaEvent, MarkdownAgendaEventRepository};
