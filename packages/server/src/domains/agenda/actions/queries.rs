//! Agenda query actions

use crate::domains::agenda::data::{
    AgendaPageData, ArchivedEventData, EventDetailsData, FeaturedEventData,
    HomepageFeaturedEvent,
};
use crate::kernel::BaseAgendaEventRepository;

/// Featured event plus the archive, read concurrently
pub async fn get_agenda_page_data(repo: &dyn BaseAgendaEventRepository) -> AgendaPageData {
    let (featured, archived) = tokio::join!(repo.find_featured_event(), repo.find_archived_events());

    AgendaPageData {
        featured_event: featured.map(FeaturedEventData::from),
        archived_events: archived.into_iter().map(ArchivedEventData::from).collect(),
    }
}

pub async fn get_event_by_id(
    repo: &dyn BaseAgendaEventRepository,
    id: &str,
) -> Option<EventDetailsData> {
    repo.find_by_id(id).await.map(EventDetailsData::from)
}

/// Next-event banner for the homepage
pub async fn get_featured_event(
    repo: &dyn BaseAgendaEventRepository,
) -> Option<HomepageFeaturedEvent> {
    repo.find_featured_event()
        .await
        .map(HomepageFeaturedEvent::from)
}
