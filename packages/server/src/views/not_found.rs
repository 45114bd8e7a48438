use dioxus::prelude::*;

use super::layout::SiteLayout;
use super::render_page;

pub fn render_not_found() -> String {
    render_page("Not Found", NotFoundPage, ())
}

#[allow(non_snake_case)]
fn NotFoundPage(_: ()) -> Element {
    rsx! {
        SiteLayout {
            div {
                class: "container centered empty-state",
                h1 { "404" }
                p { "The page you are looking for does not exist." }
                a { href: "/", class: "button button-primary", "Back to Home" }
            }
        }
    }
}
