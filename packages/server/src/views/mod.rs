//! Server-rendered pages
//!
//! Every page is a Dioxus component rendered once to a string with
//! `dioxus-ssr`. Rendering is synchronous; handlers gather their data first
//! and only then build the page.

mod agenda;
mod home;
mod layout;
mod not_found;
mod submit;
mod talent;

use dioxus::prelude::*;

use crate::common::utils::escape_html;

pub use agenda::{render_agenda, render_event_details};
pub use home::{render_home, HomePageData};
pub use not_found::render_not_found;
pub use submit::{render_submit, FieldError, SubmitFormValues, SubmitPageData, SubmitStatus};
pub use talent::{render_member_profile, render_talent, TalentPageData};

pub const SITE_NAME: &str = "Club Algoritmia";

/// Render `root` and wrap the markup in the document shell
fn render_page<P: Properties + 'static>(
    title: &str,
    root: fn(P) -> Element,
    props: P,
) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();

    document(title, &dioxus_ssr::render(&dom))
}

fn document(title: &str, body: &str) -> String {
    let title = if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", escape_html(title), SITE_NAME)
    };

    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title>\
         <link rel=\"icon\" href=\"/assets/logo.svg\">\
         <link rel=\"stylesheet\" href=\"/assets/site.css\">\
         </head>\
         <body>{body}</body>\
         </html>"
    )
}
