//! Success stories joined with their members.

mod common;

use common::*;
use site_core::domains::member::models::DEFAULT_AVATAR_URL;
use site_core::domains::success_story::actions::{
    get_featured_success_stories, FALLBACK_MEMBER_NAME, FALLBACK_MEMBER_ROLE,
};
use site_core::domains::success_story::models::DEFAULT_COMPANY_LOGO_URL;
use site_core::kernel::BaseSuccessStoryRepository;

#[tokio::test]
async fn reads_stories_with_defaults() {
    let harness = TestHarness::new().unwrap();
    harness
        .write_story("acme.md", &story_markdown("jane-doe", "Acme", true))
        .unwrap();
    harness
        .write_story(
            "plain.md",
            "---\nmemberId: john\ncompany: Globex\nquote: Great club.\n---\n",
        )
        .unwrap();

    let stories = harness.story_repository().find_all().await;

    assert_eq!(stories.len(), 2);
    let acme = stories.iter().find(|s| s.id == "acme").unwrap();
    assert!(acme.is_featured);
    assert_eq!(acme.company_logo_url, DEFAULT_COMPANY_LOGO_URL);

    let plain = stories.iter().find(|s| s.id == "plain").unwrap();
    assert!(!plain.is_featured);
}

#[tokio::test]
async fn stories_missing_required_fields_are_skipped() {
    let harness = TestHarness::new().unwrap();
    harness
        .write_story("no-quote.md", "---\nmemberId: jane\ncompany: Acme\n---\n")
        .unwrap();
    harness
        .write_story("ok.md", &story_markdown("jane", "Acme", false))
        .unwrap();

    let stories = harness.story_repository().find_all().await;

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].id, "ok");
}

#[tokio::test]
async fn only_featured_stories_are_listed() {
    let harness = TestHarness::new().unwrap();
    harness
        .write_story("a.md", &story_markdown("jane", "Acme", true))
        .unwrap();
    harness
        .write_story("b.md", &story_markdown("jane", "Globex", false))
        .unwrap();

    let featured = harness.story_repository().find_featured().await;

    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].company, "Acme");
}

#[tokio::test]
async fn featured_stories_are_enriched_with_members() {
    let harness = TestHarness::new().unwrap();
    harness
        .write_member("jane-doe.md", &member_markdown("Jane Doe", "Software Engineer", &[]))
        .unwrap();
    harness
        .write_story("acme.md", &story_markdown("jane-doe", "Acme", true))
        .unwrap();
    harness
        .write_story("ghost.md", &story_markdown("former-member", "Globex", true))
        .unwrap();

    let stories =
        get_featured_success_stories(&harness.story_repository(), &harness.member_repository())
            .await;

    assert_eq!(stories.len(), 2);

    let acme = stories.iter().find(|s| s.company == "Acme").unwrap();
    assert_eq!(acme.member_name, "Jane Doe");
    assert_eq!(acme.member_role, "Software Engineer");
    assert_eq!(acme.member_photo_url, "https://example.org/janedoe.jpg");
    assert_eq!(acme.quote, "Algoritmia helped me join Acme.");

    let ghost = stories.iter().find(|s| s.company == "Globex").unwrap();
    assert_eq!(ghost.member_name, FALLBACK_MEMBER_NAME);
    assert_eq!(ghost.member_role, FALLBACK_MEMBER_ROLE);
    assert_eq!(ghost.member_photo_url, DEFAULT_AVATAR_URL);
}

#[tokio::test]
async fn quoted_featured_flag_still_counts() {
    let harness = TestHarness::new().unwrap();
    harness
        .write_story(
            "quoted.md",
            "---\nmemberId: jane\ncompany: Acme\nquote: Hired.\nisFeatured: \"true\"\n---\n",
        )
        .unwrap();
    harness
        .write_story(
            "odd.md",
            "---\nmemberId: john\ncompany: Globex\nquote: Hired.\nisFeatured: sometimes\n---\n",
        )
        .unwrap();

    let repo = harness.story_repository();

    assert_eq!(repo.find_all().await.len(), 2);
    let featured = repo.find_featured().await;
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, "quoted");
}
