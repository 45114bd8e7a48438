//! Talent directory and member profiles

use dioxus::prelude::*;

use super::layout::SiteLayout;
use super::render_page;
use crate::common::utils::render_markdown;
use crate::domains::member::MemberData;

/// Skills shown on a directory card; the profile shows all of them
const CARD_SKILL_LIMIT: usize = 4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TalentPageData {
    /// Members left after applying `query`
    pub members: Vec<MemberData>,
    pub query: String,
}

pub fn render_talent(data: TalentPageData) -> String {
    render_page("Talent", TalentPage, TalentPageProps { data })
}

pub fn render_member_profile(member: MemberData) -> String {
    let title = member.name.clone();
    render_page(&title, MemberProfilePage, MemberProfilePageProps { member })
}

#[derive(Props, Clone, PartialEq)]
struct TalentPageProps {
    data: TalentPageData,
}

#[component]
fn TalentPage(props: TalentPageProps) -> Element {
    let data = &props.data;

    rsx! {
        SiteLayout {
            div {
                class: "container",
                section {
                    class: "page-header",
                    h1 { "Our Talent" }
                    p {
                        "Meet the brilliant minds of Algoritmia. A curated directory of our \
                         skilled members ready to take on new challenges."
                    }
                    a { href: "/submit", class: "button button-primary", "Share your career" }
                }

                form {
                    class: "search-form",
                    method: "get",
                    action: "/talent",
                    input {
                        r#type: "search",
                        name: "q",
                        value: "{data.query}",
                        placeholder: "Search by name, role or skill",
                    }
                    button { r#type: "submit", class: "button button-secondary", "Search" }
                }

                if data.members.is_empty() {
                    p {
                        class: "empty-state",
                        if data.query.trim().is_empty() {
                            "No members have been published yet."
                        } else {
                            "No members match \u{201c}{data.query}\u{201d}."
                        }
                    }
                } else {
                    div {
                        class: "talent-grid",
                        for member in data.members.iter() {
                            TalentCard { key: "{member.id}", member: member.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TalentCardProps {
    member: MemberData,
}

#[component]
fn TalentCard(props: TalentCardProps) -> Element {
    let member = &props.member;

    rsx! {
        a {
            class: "talent-card",
            href: "/talent/{member.id}",
            img {
                class: "avatar",
                src: "{member.profile_picture_url}",
                alt: "Profile picture of {member.name}",
            }
            h2 { "{member.name}" }
            p { class: "muted", "{member.role}" }
            div {
                class: "chips",
                for skill in member.skills.iter().take(CARD_SKILL_LIMIT) {
                    span { class: "chip", "{skill}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MemberProfilePageProps {
    member: MemberData,
}

#[component]
fn MemberProfilePage(props: MemberProfilePageProps) -> Element {
    let member = &props.member;
    let biography = render_markdown(&member.biography);

    rsx! {
        SiteLayout {
            div {
                class: "container profile",
                a { href: "/talent", class: "back-link", "\u{2190} Back to Talent" }
                div {
                    class: "profile-inner",
                    div {
                        class: "profile-summary",
                        img {
                            class: "avatar avatar-large",
                            src: "{member.profile_picture_url}",
                            alt: "Profile picture of {member.name}",
                        }
                        h1 { "{member.name}" }
                        p { class: "muted", "{member.role}" }
                        div {
                            class: "profile-links",
                            if let Some(url) = &member.github_url {
                                a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "GitHub" }
                            }
                            if let Some(url) = &member.linkedin_url {
                                a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "LinkedIn" }
                            }
                        }
                    }
                    div {
                        class: "profile-details",
                        h2 { "Biography" }
                        div { class: "prose", dangerous_inner_html: "{biography}" }
                        h2 { "Skills" }
                        div {
                            class: "chips",
                            for skill in member.skills.iter() {
                                span { class: "chip chip-accent", "{skill}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, skills: &[&str]) -> MemberData {
        MemberData {
            id: id.to_string(),
            name: "Jane Doe".to_string(),
            role: "Software Engineer".to_string(),
            profile_picture_url: "/images/default-avatar.png".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            github_url: Some("https://github.com/janedoe".to_string()),
            linkedin_url: None,
            biography: "Builds **compilers**.".to_string(),
        }
    }

    #[test]
    fn cards_link_to_profiles_and_cap_skills() {
        let html = render_talent(TalentPageData {
            members: vec![member("jane-doe", &["A1", "B2", "C3", "D4", "E5"])],
            query: String::new(),
        });

        assert!(html.contains("href=\"/talent/jane-doe\""));
        assert!(html.contains("D4"));
        assert!(!html.contains("E5"));
    }

    #[test]
    fn empty_search_result_mentions_query() {
        let html = render_talent(TalentPageData {
            members: vec![],
            query: "cobol".to_string(),
        });

        assert!(html.contains("No members match"));
        assert!(html.contains("cobol"));
    }

    #[test]
    fn profile_renders_markdown_biography_and_links() {
        let html = render_member_profile(member("jane-doe", &["Rust"]));

        assert!(html.contains("<title>Jane Doe | Club Algoritmia</title>"));
        assert!(html.contains("<strong>compilers</strong>"));
        assert!(html.contains("https://github.com/janedoe"));
        assert!(!html.contains("LinkedIn"));
    }
}
