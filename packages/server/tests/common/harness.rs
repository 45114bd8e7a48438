//! Test harness backed by a temporary content directory.
//!
//! Each harness owns its own directory tree, so tests can run in parallel.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use site_core::domains::agenda::MarkdownAgendaEventRepository;
use site_core::domains::member::MarkdownMemberRepository;
use site_core::domains::success_story::MarkdownSuccessStoryRepository;
use site_core::kernel::test_dependencies::{MockMailer, TEST_RECIPIENT};
use site_core::kernel::{ServerDeps, EVENTS_DIR, MEMBERS_DIR, STORIES_DIR};
use site_core::server::build_app;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestHarness {
    dir: TempDir,
    pub today: NaiveDate,
    pub mailer: Arc<MockMailer>,
}

impl TestHarness {
    /// Empty content tree with `members/`, `events/` and `stories/`
    pub fn new() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let dir = tempfile::tempdir().context("Failed to create content directory")?;
        for sub in [MEMBERS_DIR, EVENTS_DIR, STORIES_DIR] {
            std::fs::create_dir_all(dir.path().join(sub))?;
        }

        Ok(Self {
            dir,
            today: NaiveDate::from_ymd_opt(2024, 6, 15).context("valid date")?,
            mailer: Arc::new(MockMailer::new()),
        })
    }

    pub fn with_mailer(mut self, mailer: MockMailer) -> Self {
        self.mailer = Arc::new(mailer);
        self
    }

    pub fn content_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn members_dir(&self) -> PathBuf {
        self.dir.path().join(MEMBERS_DIR)
    }

    pub fn events_dir(&self) -> PathBuf {
        self.dir.path().join(EVENTS_DIR)
    }

    pub fn stories_dir(&self) -> PathBuf {
        self.dir.path().join(STORIES_DIR)
    }

    pub fn write_member(&self, file_name: &str, content: &str) -> Result<()> {
        std::fs::write(self.members_dir().join(file_name), content)?;
        Ok(())
    }

    pub fn write_event(&self, file_name: &str, content: &str) -> Result<()> {
        std::fs::write(self.events_dir().join(file_name), content)?;
        Ok(())
    }

    pub fn write_story(&self, file_name: &str, content: &str) -> Result<()> {
        std::fs::write(self.stories_dir().join(file_name), content)?;
        Ok(())
    }

    pub fn member_repository(&self) -> MarkdownMemberRepository {
        MarkdownMemberRepository::new(self.members_dir())
    }

    pub fn event_repository(&self) -> MarkdownAgendaEventRepository {
        MarkdownAgendaEventRepository::new(self.events_dir()).with_today(self.today)
    }

    pub fn story_repository(&self) -> MarkdownSuccessStoryRepository {
        MarkdownSuccessStoryRepository::new(self.stories_dir())
    }

    /// Markdown repositories over this tree plus the mock mailer
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            Arc::new(self.member_repository()),
            Arc::new(self.event_repository()),
            Arc::new(self.story_repository()),
            self.mailer.clone(),
            TEST_RECIPIENT.to_string(),
            self.content_dir().to_path_buf(),
        )
    }

    pub fn router(&self) -> Router {
        build_app(self.server_deps(), &[])
    }
}

/// Response status and body as text
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    TestResponse {
        status,
        content_type,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(router, request).await
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(router, request).await
}

pub async fn post_form(router: &Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(router, request).await
}
