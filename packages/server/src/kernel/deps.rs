//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container handed to route
//! handlers. All content access and outgoing mail go through trait objects.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use mailer::{MailerOptions, MailerService};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::domains::agenda::MarkdownAgendaEventRepository;
use crate::domains::member::MarkdownMemberRepository;
use crate::domains::success_story::MarkdownSuccessStoryRepository;
use crate::kernel::{
    BaseAgendaEventRepository, BaseMailer, BaseMemberRepository, BaseSuccessStoryRepository,
    OutgoingMail,
};

pub const MEMBERS_DIR: &str = "members";
pub const EVENTS_DIR: &str = "events";
pub const STORIES_DIR: &str = "stories";

// =============================================================================
// MailerService Adapter (implements BaseMailer trait)
// =============================================================================

/// Wrapper around MailerService that implements BaseMailer trait
pub struct MailerAdapter(pub Arc<MailerService>);

impl MailerAdapter {
    pub fn new(service: Arc<MailerService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMailer for MailerAdapter {
    async fn send(&self, mail: OutgoingMail) -> Result<()> {
        self.0.send(&mail).await.map_err(Into::into)
    }
}

/// Used when SMTP is not configured; every send fails
pub struct DisabledMailer;

#[async_trait]
impl BaseMailer for DisabledMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<()> {
        Err(anyhow!(
            "SMTP is not configured; dropping mail `{}`",
            mail.subject
        ))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to route handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub members: Arc<dyn BaseMemberRepository>,
    pub events: Arc<dyn BaseAgendaEventRepository>,
    pub stories: Arc<dyn BaseSuccessStoryRepository>,
    pub mailer: Arc<dyn BaseMailer>,
    /// Address talent submissions are sent to
    pub submission_recipient: String,
    /// Content root, reported by the health check
    pub content_dir: PathBuf,
}

impl ServerDeps {
    pub fn new(
        members: Arc<dyn BaseMemberRepository>,
        events: Arc<dyn BaseAgendaEventRepository>,
        stories: Arc<dyn BaseSuccessStoryRepository>,
        mailer: Arc<dyn BaseMailer>,
        submission_recipient: String,
        content_dir: PathBuf,
    ) -> Self {
        Self {
            members,
            events,
            stories,
            mailer,
            submission_recipient,
            content_dir,
        }
    }

    /// Markdown repositories under `config.content_dir` plus SMTP if configured
    pub fn from_config(config: &Config) -> Self {
        let root = &config.content_dir;

        let (mailer, submission_recipient): (Arc<dyn BaseMailer>, String) = match &config.smtp {
            Some(smtp) => {
                let service = MailerService::new(MailerOptions {
                    host: smtp.host.clone(),
                    port: smtp.port,
                    username: smtp.username.clone(),
                    password: smtp.password.clone(),
                });
                (
                    Arc::new(MailerAdapter::new(Arc::new(service))),
                    smtp.email_to.clone(),
                )
            }
            None => {
                tracing::warn!("SMTP_HOST not set; talent submissions will be rejected");
                (Arc::new(DisabledMailer), String::new())
            }
        };

        Self::new(
            Arc::new(MarkdownMemberRepository::new(root.join(MEMBERS_DIR))),
            Arc::new(MarkdownAgendaEventRepository::new(root.join(EVENTS_DIR))),
            Arc::new(MarkdownSuccessStoryRepository::new(root.join(STORIES_DIR))),
            mailer,
            submission_recipient,
            root.clone(),
        )
    }
}
