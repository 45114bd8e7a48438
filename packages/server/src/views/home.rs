//! Homepage

use dioxus::prelude::*;

use super::layout::SiteLayout;
use super::render_page;
use crate::domains::agenda::HomepageFeaturedEvent;
use crate::domains::success_story::SuccessStoryData;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomePageData {
    pub featured_event: Option<HomepageFeaturedEvent>,
    pub success_stories: Vec<SuccessStoryData>,
}

pub fn render_home(data: HomePageData) -> String {
    render_page("", HomePage, HomePageProps { data })
}

#[derive(Props, Clone, PartialEq)]
struct HomePageProps {
    data: HomePageData,
}

#[component]
fn HomePage(props: HomePageProps) -> Element {
    let data = &props.data;

    rsx! {
        SiteLayout {
            HeroSection {}
            MissionVisionSection {}
            if let Some(event) = &data.featured_event {
                FeaturedEventBanner { event: event.clone() }
            }
            if !data.success_stories.is_empty() {
                SuccessStoriesMarquee { stories: data.success_stories.clone() }
            }
        }
    }
}

#[component]
fn HeroSection() -> Element {
    rsx! {
        section {
            id: "hero-section",
            class: "hero",
            div {
                class: "container hero-inner",
                h1 { class: "hero-title", "Club Algoritmia" }
                p { class: "hero-subtitle", "Showcasing the next generation of tech talent." }
                div {
                    class: "hero-actions",
                    a { href: "/talent", class: "button button-primary", "View Our Talent" }
                    a { href: "/agenda", class: "button button-secondary", "Learn More" }
                }
            }
        }
    }
}

#[component]
fn MissionVisionSection() -> Element {
    rsx! {
        section {
            class: "mission-vision",
            div {
                class: "container two-columns",
                div {
                    h2 { "Our Mission" }
                    p {
                        "To bridge the gap between academic theory and real-world industry demands \
                         by providing members with hands-on project experience, mentorship, and the \
                         collaborative skills needed to excel in tech careers."
                    }
                }
                div {
                    h2 { "Our Vision" }
                    p {
                        "To be the university's most respected and effective launchpad for aspiring \
                         tech professionals, recognized by top employers as a premier source of \
                         industry-ready talent."
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeaturedEventBannerProps {
    event: HomepageFeaturedEvent,
}

/// Next-event teaser; hidden entirely when there is no upcoming event
#[component]
fn FeaturedEventBanner(props: FeaturedEventBannerProps) -> Element {
    let event = &props.event;

    rsx! {
        section {
            class: "featured-event-banner",
            div {
                class: "container centered",
                p { class: "eyebrow", "Upcoming Event" }
                h2 { "{event.title}" }
                p { class: "capitalize", "{event.formatted_date}" }
                a {
                    href: "/agenda/{event.id}",
                    class: "button button-primary",
                    "Learn More & RSVP"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SuccessStoriesMarqueeProps {
    stories: Vec<SuccessStoryData>,
}

/// Stories are listed twice so the CSS scroll animation loops seamlessly
#[component]
fn SuccessStoriesMarquee(props: SuccessStoriesMarqueeProps) -> Element {
    let looped = props.stories.iter().chain(props.stories.iter());

    rsx! {
        section {
            class: "success-stories",
            div {
                class: "container",
                h2 { class: "centered", "Success Stories" }
                div {
                    class: "marquee",
                    div {
                        class: "marquee-track",
                        for story in looped {
                            div {
                                class: "marquee-item",
                                SuccessStoryCard { story: story.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SuccessStoryCardProps {
    story: SuccessStoryData,
}

#[component]
fn SuccessStoryCard(props: SuccessStoryCardProps) -> Element {
    let story = &props.story;

    rsx! {
        div {
            class: "story-card",
            blockquote {
                p { "\"{story.quote}\"" }
            }
            div {
                class: "story-footer",
                img {
                    class: "avatar avatar-small",
                    src: "{story.member_photo_url}",
                    alt: "Photo of {story.member_name}",
                }
                div {
                    class: "story-member",
                    h3 { "{story.member_name}" }
                    p { "{story.member_role} \u{b7} Landed a job at {story.company}" }
                }
                img {
                    class: "company-logo",
                    src: "{story.company_logo_url}",
                    alt: "{story.company} logo",
                }
            }
        }
    }
}
