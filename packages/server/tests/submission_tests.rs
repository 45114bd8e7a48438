//! Talent submission flow with a recording mailer.

mod common;

use common::*;
use site_core::domains::member::actions::{submit_talent, SubmissionError};
use site_core::kernel::test_dependencies::{MockMailer, TEST_RECIPIENT};
use site_core::kernel::BaseMemberRepository;

#[tokio::test]
async fn valid_submission_is_emailed_with_markdown_attachment() {
    let mailer = MockMailer::new();

    let profile = submit_talent(valid_submission(), &mailer, TEST_RECIPIENT)
        .await
        .unwrap();

    assert_eq!(profile.slug, "jane-doe");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, TEST_RECIPIENT);
    assert_eq!(sent[0].subject, "New Talent Submission: Jane Doe");
    assert!(sent[0].html.contains("<strong>Jane Doe</strong>"));
    assert_eq!(sent[0].attachments[0].filename, "jane-doe.md");
    assert_eq!(sent[0].attachments[0].content, profile.content);
}

#[tokio::test]
async fn invalid_submission_sends_nothing() {
    let mailer = MockMailer::new();
    let mut input = valid_submission();
    input.skills.clear();
    input.biography = "Too short".to_string();

    let err = submit_talent(input, &mailer, TEST_RECIPIENT)
        .await
        .unwrap_err();

    match err {
        SubmissionError::Invalid(issues) => {
            let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
            assert_eq!(
                messages,
                vec![
                    "At least one skill is required.",
                    "Biography must be at least 20 characters."
                ]
            );
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn mail_failure_is_a_delivery_error() {
    let mailer = MockMailer::failing();

    let err = submit_talent(valid_submission(), &mailer, TEST_RECIPIENT)
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::Delivery(_)));
}

#[tokio::test]
async fn generated_file_reads_back_as_the_same_member() {
    let harness = TestHarness::new().unwrap();
    let mailer = MockMailer::new();
    let mut input = valid_submission();
    input.name = "Jane \"JD\" Doe".to_string();

    let profile = submit_talent(input, &mailer, TEST_RECIPIENT).await.unwrap();
    harness
        .write_member(&profile.file_name(), &profile.content)
        .unwrap();

    let member = harness
        .member_repository()
        .find_by_id(&profile.slug)
        .await
        .expect("generated file parses");

    assert_eq!(member.id, "jane-jd-doe");
    assert_eq!(member.name, "Jane \"JD\" Doe");
    assert_eq!(member.role, "Software Engineer");
    assert_eq!(member.skills, vec!["TypeScript", "Rust"]);
    assert_eq!(member.profile_picture_url, "https://example.org/jane.jpg");
    assert_eq!(member.linkedin_url.as_deref(), Some("https://linkedin.com/in/janedoe"));
    assert_eq!(member.biography, "Jane builds compilers and web services.");
}
