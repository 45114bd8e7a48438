//! Talent submission form

use dioxus::prelude::*;
use serde::Deserialize;

use super::layout::SiteLayout;
use super::render_page;
use crate::domains::member::actions::{TalentSubmissionInput, ValidationIssue};

/// Form fields as posted by the browser; skills are comma-separated
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitFormValues {
    pub name: String,
    pub role: String,
    pub profile_picture_url: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub skills: String,
    pub biography: String,
}

impl SubmitFormValues {
    /// Split skills on commas, dropping blanks
    pub fn to_input(&self) -> TalentSubmissionInput {
        TalentSubmissionInput {
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            linkedin_url: self.linkedin_url.trim().to_string(),
            github_url: self.github_url.trim().to_string(),
            profile_picture_url: self.profile_picture_url.trim().to_string(),
            skills: self
                .skills
                .split(',')
                .map(str::trim)
                .filter(|skill| !skill.is_empty())
                .map(str::to_string)
                .collect(),
            biography: self.biography.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<ValidationIssue> for FieldError {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            field: issue.field_name().unwrap_or_default().to_string(),
            message: issue.message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitPageData {
    pub values: SubmitFormValues,
    pub errors: Vec<FieldError>,
    pub status: SubmitStatus,
}

pub fn render_submit(data: SubmitPageData) -> String {
    render_page("Share your career", SubmitPage, SubmitPageProps { data })
}

#[derive(Props, Clone, PartialEq)]
struct SubmitPageProps {
    data: SubmitPageData,
}

#[component]
fn SubmitPage(props: SubmitPageProps) -> Element {
    let data = &props.data;

    rsx! {
        SiteLayout {
            div {
                class: "container narrow",
                section {
                    class: "page-header",
                    h1 { "Share your career" }
                    p {
                        "Send your profile to the Algoritmia team. Once reviewed it will be \
                         published in the talent directory."
                    }
                }
                if data.status == SubmitStatus::Success {
                    div {
                        class: "notice notice-success",
                        h3 { "Thank You!" }
                        p {
                            "Your profile has been submitted for review. The Algoritmia team \
                             will get back to you shortly."
                        }
                        a { href: "/talent", class: "button button-secondary", "Back to Talent" }
                    }
                } else {
                    SubmissionForm { data: data.clone() }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SubmissionFormProps {
    data: SubmitPageData,
}

#[component]
fn SubmissionForm(props: SubmissionFormProps) -> Element {
    let values = &props.data.values;
    let errors = &props.data.errors;

    rsx! {
        form {
            class: "submission-form",
            method: "post",
            action: "/submit",

            if props.data.status == SubmitStatus::Failed {
                div {
                    class: "notice notice-error",
                    "Something went wrong. Please try again."
                }
            }

            TextField {
                name: "name",
                label: "Full Name",
                input_type: "text",
                value: values.name.clone(),
                placeholder: "",
                hint: "",
                errors: messages_for(errors, "name"),
            }
            TextField {
                name: "role",
                label: "Current Role (e.g., \"Software Engineer\")",
                input_type: "text",
                value: values.role.clone(),
                placeholder: "",
                hint: "",
                errors: messages_for(errors, "role"),
            }
            TextField {
                name: "profilePictureUrl",
                label: "Profile Picture URL",
                input_type: "url",
                value: values.profile_picture_url.clone(),
                placeholder: "https://linkedin.com/in/your-name/profile.jpg",
                hint: "Please provide a direct URL to an image. You can often get this from your LinkedIn profile.",
                errors: messages_for(errors, "profilePictureUrl"),
            }
            TextField {
                name: "linkedinUrl",
                label: "LinkedIn Profile URL",
                input_type: "url",
                value: values.linkedin_url.clone(),
                placeholder: "",
                hint: "",
                errors: messages_for(errors, "linkedinUrl"),
            }
            TextField {
                name: "githubUrl",
                label: "GitHub Profile URL",
                input_type: "url",
                value: values.github_url.clone(),
                placeholder: "",
                hint: "",
                errors: messages_for(errors, "githubUrl"),
            }
            TextField {
                name: "skills",
                label: "Skills",
                input_type: "text",
                value: values.skills.clone(),
                placeholder: "TypeScript, React, Next.js, Node.js",
                hint: "Enter a comma-separated list of your top skills.",
                errors: messages_for(errors, "skills"),
            }

            div {
                class: "field",
                label { r#for: "biography", "Short Biography" }
                textarea {
                    id: "biography",
                    name: "biography",
                    rows: "5",
                    required: true,
                    "{values.biography}"
                }
                p {
                    class: "hint",
                    "A brief professional bio. This will be displayed on your profile detail view."
                }
                FieldErrors { messages: messages_for(errors, "biography") }
            }

            button {
                r#type: "submit",
                class: "button button-primary button-block",
                "Send to Algoritmia for Review"
            }
        }
    }
}

fn messages_for(errors: &[FieldError], field: &str) -> Vec<String> {
    errors
        .iter()
        .filter(|error| error.field == field)
        .map(|error| error.message.clone())
        .collect()
}

#[derive(Props, Clone, PartialEq)]
struct TextFieldProps {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    placeholder: &'static str,
    hint: &'static str,
    errors: Vec<String>,
}

#[component]
fn TextField(props: TextFieldProps) -> Element {
    rsx! {
        div {
            class: "field",
            label { r#for: props.name, "{props.label}" }
            input {
                id: props.name,
                name: props.name,
                r#type: props.input_type,
                value: "{props.value}",
                placeholder: props.placeholder,
                required: true,
            }
            if !props.hint.is_empty() {
                p { class: "hint", "{props.hint}" }
            }
            FieldErrors { messages: props.errors.clone() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FieldErrorsProps {
    messages: Vec<String>,
}

#[component]
fn FieldErrors(props: FieldErrorsProps) -> Element {
    rsx! {
        for message in props.messages.iter() {
            p { class: "field-error", "{message}" }
        }
    }
}
