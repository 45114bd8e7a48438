pub mod agenda_event;

pub use agenda_event::{select_archived, select_featured, AgendaEvent, MarkdownAgendaEventRepository};
