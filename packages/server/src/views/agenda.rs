//! Agenda page and event details

use dioxus::prelude::*;

use super::layout::SiteLayout;
use super::render_page;
use crate::domains::agenda::data::{ArchivedEventData, EventCardData, FeaturedEventData};
use crate::domains::agenda::{AgendaPageData, EventDetailsData};

pub fn render_agenda(data: AgendaPageData) -> String {
    render_page("Agenda", AgendaPage, AgendaPageProps { data })
}

pub fn render_event_details(event: EventDetailsData) -> String {
    let title = event.title.clone();
    render_page(&title, EventDetailsPage, EventDetailsPageProps { event })
}

#[derive(Props, Clone, PartialEq)]
struct AgendaPageProps {
    data: AgendaPageData,
}

#[component]
fn AgendaPage(props: AgendaPageProps) -> Element {
    let data = &props.data;

    rsx! {
        SiteLayout {
            div {
                class: "container agenda",
                if let Some(event) = &data.featured_event {
                    FeaturedEvent { event: event.clone() }
                } else {
                    div {
                        class: "empty-state centered",
                        h2 { "No upcoming events." }
                        p { "Check back soon for new events!" }
                    }
                }
                ArchivedEvents { events: data.archived_events.clone() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeaturedEventProps {
    event: FeaturedEventData,
}

#[component]
fn FeaturedEvent(props: FeaturedEventProps) -> Element {
    let event = &props.event;

    rsx! {
        section {
            class: "featured-event two-columns",
            div {
                h1 { "{event.title}" }
                p { class: "featured-event-date", "{event.formatted_date}" }
                p { "{event.description}" }
                div {
                    class: "chips",
                    for tag in event.tags.iter() {
                        span { class: "chip", "{tag}" }
                    }
                }
                a { href: "/agenda/{event.id}", class: "button button-primary", "Event details" }
            }
            a {
                href: "/agenda/{event.id}",
                FeaturedEventCard { card: event.card.clone() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeaturedEventCardProps {
    card: EventCardData,
}

#[component]
fn FeaturedEventCard(props: FeaturedEventCardProps) -> Element {
    let card = &props.card;

    rsx! {
        div {
            class: "event-card",
            if !card.image_url.is_empty() {
                img { src: "{card.image_url}", alt: "Image for {card.title}" }
            }
            p { class: "event-card-date", "{card.formatted_date}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ArchivedEventsProps {
    events: Vec<ArchivedEventData>,
}

#[component]
fn ArchivedEvents(props: ArchivedEventsProps) -> Element {
    rsx! {
        section {
            class: "archived-events",
            h2 { "Past events" }
            if props.events.is_empty() {
                p { class: "muted", "No hay eventos pasados." }
            } else {
                div {
                    class: "archived-grid",
                    for event in props.events.iter() {
                        ArchivedEventCard { key: "{event.id}", event: event.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ArchivedEventCardProps {
    event: ArchivedEventData,
}

#[component]
fn ArchivedEventCard(props: ArchivedEventCardProps) -> Element {
    let event = &props.event;

    rsx! {
        a {
            class: "archived-card",
            href: "/agenda/{event.id}",
            if !event.thumbnail_url.is_empty() {
                img { class: "thumbnail", src: "{event.thumbnail_url}", alt: "Thumbnail for {event.title}" }
            }
            div {
                h3 { "{event.title}" }
                p { class: "muted", "{event.formatted_date}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct EventDetailsPageProps {
    event: EventDetailsData,
}

#[component]
fn EventDetailsPage(props: EventDetailsPageProps) -> Element {
    let event = &props.event;

    rsx! {
        SiteLayout {
            article {
                class: "container event-details",
                a { href: "/agenda", class: "back-link", "\u{2190} Back to Agenda" }
                if !event.image_url.is_empty() {
                    img { class: "event-image", src: "{event.image_url}", alt: "Image for {event.title}" }
                }
                h1 { "{event.title}" }
                p { class: "capitalize muted", "{event.formatted_date}" }
                if !event.description.is_empty() {
                    p { class: "lead", "{event.description}" }
                }
                div {
                    class: "chips",
                    for tag in event.tags.iter() {
                        span { class: "chip", "{tag}" }
                    }
                }
                div { class: "prose", dangerous_inner_html: "{event.body_content}" }
            }
        }
    }
}
