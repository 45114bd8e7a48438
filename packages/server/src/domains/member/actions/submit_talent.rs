//! Talent submission - validate a profile, turn it into a member markdown
//! file and email it to the reviewers.
//!
//! Nothing is written to the content directory; a reviewer commits the
//! attached file by hand.

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use crate::common::utils::{escape_html, slugify};
use crate::kernel::{BaseMailer, MailAttachment, OutgoingMail};

pub const MIN_BIOGRAPHY_CHARS: usize = 20;

/// Raw submission as posted by the form; missing fields default to empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentSubmissionInput {
    pub name: String,
    pub role: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub profile_picture_url: String,
    pub skills: Vec<String>,
    pub biography: String,
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalentSubmission {
    pub name: String,
    pub role: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub profile_picture_url: String,
    pub skills: Vec<String>,
    pub biography: String,
}

/// One step of the path to the offending input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl ValidationIssue {
    pub fn field(field: &str, message: &str) -> Self {
        Self {
            path: vec![PathSegment::Field(field.to_string())],
            message: message.to_string(),
        }
    }

    fn item(field: &str, index: usize, message: &str) -> Self {
        Self {
            path: vec![PathSegment::Field(field.to_string()), PathSegment::Index(index)],
            message: message.to_string(),
        }
    }

    /// Top-level field the issue belongs to
    pub fn field_name(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Field(name)) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission failed validation ({} issues)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    #[error("Failed to deliver submission: {0}")]
    Delivery(#[source] anyhow::Error),
}

/// The member file produced from a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProfile {
    pub slug: String,
    pub content: String,
}

impl GeneratedProfile {
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }
}

/// Check every field and report all problems at once
pub fn validate_submission(
    input: TalentSubmissionInput,
) -> Result<TalentSubmission, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if input.name.is_empty() {
        issues.push(ValidationIssue::field("name", "Name is required."));
    }
    if input.role.is_empty() {
        issues.push(ValidationIssue::field("role", "Role is required."));
    }
    if !is_absolute_url(&input.linkedin_url) {
        issues.push(ValidationIssue::field("linkedinUrl", "Invalid LinkedIn URL."));
    }
    if !is_absolute_url(&input.github_url) {
        issues.push(ValidationIssue::field("githubUrl", "Invalid GitHub URL."));
    }
    if !is_absolute_url(&input.profile_picture_url) {
        issues.push(ValidationIssue::field(
            "profilePictureUrl",
            "Invalid Profile Picture URL.",
        ));
    }
    if input.skills.is_empty() {
        issues.push(ValidationIssue::field(
            "skills",
            "At least one skill is required.",
        ));
    }
    for (index, skill) in input.skills.iter().enumerate() {
        if skill.is_empty() {
            issues.push(ValidationIssue::item("skills", index, "Skill cannot be empty."));
        }
    }
    if input.biography.chars().count() < MIN_BIOGRAPHY_CHARS {
        issues.push(ValidationIssue::field(
            "biography",
            "Biography must be at least 20 characters.",
        ));
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(TalentSubmission {
        name: input.name,
        role: input.role,
        linkedin_url: input.linkedin_url,
        github_url: input.github_url,
        profile_picture_url: input.profile_picture_url,
        skills: input.skills,
        biography: input.biography,
    })
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

fn yaml_quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{escaped}\"")
}

/// Render the submission as a member markdown file
pub fn generate_markdown(submission: &TalentSubmission) -> GeneratedProfile {
    let skills = submission
        .skills
        .iter()
        .map(|skill| format!("  - {}", yaml_quote(skill)))
        .collect::<Vec<_>>()
        .join("\n");

    let front_matter = format!(
        "---\nname: {}\nrole: {}\nprofilePictureUrl: {}\nskills:\n{}\ngithubUrl: {}\nlinkedinUrl: {}\n---\n",
        yaml_quote(&submission.name),
        yaml_quote(&submission.role),
        yaml_quote(&submission.profile_picture_url),
        skills,
        yaml_quote(&submission.github_url),
        yaml_quote(&submission.linkedin_url),
    );

    GeneratedProfile {
        slug: slugify(&submission.name),
        content: format!("{front_matter}\n\n{}", submission.biography),
    }
}

fn review_email(recipient: &str, submission: &TalentSubmission, profile: &GeneratedProfile) -> OutgoingMail {
    let name = escape_html(&submission.name);
    let file_name = escape_html(&profile.file_name());

    OutgoingMail {
        to: recipient.to_string(),
        subject: format!("New Talent Submission: {}", submission.name),
        html: format!(
            "<h1>New Talent Profile Submission</h1>\
             <p>A new profile has been submitted by <strong>{name}</strong>.</p>\
             <p>The generated Markdown file (<strong>{file_name}</strong>) is attached for your review.</p>"
        ),
        attachments: vec![MailAttachment {
            filename: profile.file_name(),
            content: profile.content.clone(),
            content_type: "text/markdown".to_string(),
        }],
    }
}

/// Validate, generate and send a talent submission to `recipient`
pub async fn submit_talent(
    input: TalentSubmissionInput,
    mailer: &dyn BaseMailer,
    recipient: &str,
) -> Result<GeneratedProfile, SubmissionError> {
    let submission = validate_submission(input).map_err(SubmissionError::Invalid)?;
    let profile = generate_markdown(&submission);

    mailer
        .send(review_email(recipient, &submission, &profile))
        .await
        .map_err(|e| {
            error!(error = %e, slug = %profile.slug, "Failed to email talent submission");
            SubmissionError::Delivery(e)
        })?;

    info!(slug = %profile.slug, "Talent submission sent for review");
    Ok(profile)
}
