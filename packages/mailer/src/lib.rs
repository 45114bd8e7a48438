// Minimal SMTP client for transactional notifications.

pub mod models;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

pub use crate::models::{MailAttachment, OutgoingMail};

/// Port that expects TLS from the first byte instead of STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("invalid content type `{0}`")]
    ContentType(String),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

#[derive(Debug, Clone)]
pub struct MailerOptions {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct MailerService {
    options: MailerOptions,
}

impl MailerService {
    pub fn new(options: MailerOptions) -> Self {
        Self { options }
    }

    pub fn build_message(&self, mail: &OutgoingMail) -> Result<Message, MailerError> {
        let from: Mailbox = self.options.username.parse()?;
        let to: Mailbox = mail.to.parse()?;

        let mut body = MultiPart::mixed().singlepart(SinglePart::html(mail.html.clone()));
        for attachment in &mail.attachments {
            let content_type = ContentType::parse(&attachment.content_type)
                .map_err(|_| MailerError::ContentType(attachment.content_type.clone()))?;
            body = body.singlepart(
                Attachment::new(attachment.filename.clone())
                    .body(attachment.content.clone(), content_type),
            );
        }

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.clone())
            .multipart(body)?;

        Ok(message)
    }

    pub async fn send(&self, mail: &OutgoingMail) -> Result<(), MailerError> {
        let message = self.build_message(mail)?;

        let builder = if self.options.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.options.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.options.host)?
        };

        let transport = builder
            .port(self.options.port)
            .credentials(Credentials::new(
                self.options.username.clone(),
                self.options.password.clone(),
            ))
            .build();

        let response = transport.send(message).await?;
        tracing::debug!(
            to = %mail.to,
            code = %response.code(),
            "SMTP relay accepted message"
        );

        Ok(())
    }
}
