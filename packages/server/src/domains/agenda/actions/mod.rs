mod queries;

pub use queries::{get_agenda_page_data, get_event_by_id, get_featured_event};
