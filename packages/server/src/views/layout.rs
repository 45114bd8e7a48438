//! Shared page chrome: navbar and footer

use chrono::{Datelike, Local};
use dioxus::prelude::*;

/// Props for SiteLayout
#[derive(Props, Clone, PartialEq)]
pub struct SiteLayoutProps {
    pub children: Element,
}

/// Navbar, page body and footer
#[component]
pub fn SiteLayout(props: SiteLayoutProps) -> Element {
    rsx! {
        div {
            class: "site",
            Navbar {}
            main {
                class: "site-main",
                {props.children}
            }
            Footer {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "container navbar-inner",
                a {
                    href: "/",
                    class: "navbar-brand",
                    img {
                        src: "/assets/logo.svg",
                        alt: "Algoritmia Club Logo",
                        width: "40",
                        height: "40",
                    }
                }
                nav {
                    ul {
                        class: "navbar-links",
                        NavLink { href: "/", label: "Home" }
                        NavLink { href: "/talent", label: "Talent" }
                        NavLink { href: "/agenda", label: "Agenda" }
                        NavLink { href: "/submit", label: "Join" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    href: &'static str,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    rsx! {
        li {
            a {
                href: props.href,
                class: "navbar-link",
                "{props.label}"
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let year = Local::now().year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "container footer-inner",
                div {
                    class: "footer-brand",
                    a {
                        href: "/",
                        aria_label: "Homepage",
                        img {
                            src: "/assets/logo.svg",
                            alt: "Algoritmia Logo",
                            width: "28",
                            height: "28",
                        }
                    }
                    span { "Copyright \u{a9} {year}" }
                }
                div {
                    class: "footer-tagline",
                    "\u{b7} Connect \u{b7} the \u{b7} dots"
                }
            }
        }
    }
}
