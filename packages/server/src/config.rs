use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// SMTP settings for talent submission emails
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Reviewer address that receives submissions
    pub email_to: String,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Root holding `members/`, `events/` and `stories/`
    pub content_dir: PathBuf,
    /// `None` when `SMTP_HOST` is unset; submissions then fail with a 500
    pub smtp: Option<SmtpConfig>,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let smtp = match lookup("SMTP_HOST").filter(|host| !host.is_empty()) {
            Some(host) => Some(SmtpConfig {
                host,
                port: lookup("SMTP_PORT")
                    .unwrap_or_else(|| "587".to_string())
                    .parse()
                    .context("SMTP_PORT must be a valid number")?,
                username: lookup("SMTP_USER")
                    .context("SMTP_USER must be set when SMTP_HOST is set")?,
                password: lookup("SMTP_PASS")
                    .context("SMTP_PASS must be set when SMTP_HOST is set")?,
                email_to: lookup("EMAIL_TO")
                    .context("EMAIL_TO must be set when SMTP_HOST is set")?,
            }),
            None => None,
        };

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            content_dir: lookup("CONTENT_DIR")
                .unwrap_or_else(|| "content".to_string())
                .into(),
            smtp,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}
