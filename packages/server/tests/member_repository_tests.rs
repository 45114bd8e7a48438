//! Markdown member repository against a real directory tree.

mod common;

use common::*;
use site_core::domains::member::models::DEFAULT_AVATAR_URL;
use site_core::kernel::BaseMemberRepository;

#[tokio::test]
async fn reads_a_complete_member() {
    let harness = TestHarness::new().unwrap();
    harness
        .write_member(
            "jane-doe.md",
            &member_markdown("Jane Doe", "Software Engineer", &["TypeScript", "Next.js"]),
        )
        .unwrap();

    let member = harness
        .member_repository()
        .find_by_id("jane-doe")
        .await
        .expect("member exists");

    assert_eq!(member.id, "jane-doe");
    assert_eq!(member.name, "Jane Doe");
    assert_eq!(member.role, "Software Engineer");
    assert_eq!(member.skills, vec!["TypeScript", "Next.js"]);
    assert_eq!(member.profile_picture_url, "https://example.org/janedoe.jpg");
    assert_eq!(member.github_url.as_deref(), Some("https://github.com/janedoe"));
    assert_eq!(member.biography, "Jane Doe is a member of the club.");
}

#[tokio::test]
async fn missing_optional_fields_get_defaults() {
    let harness = TestHarness::new().unwrap();
    harness
        .write_member("john.md", "---\nname: John Smith\nrole: Backend Developer\n---\n")
        .unwrap();

    let member = harness
        .member_repository()
        .find_by_id("john")
        .await
        .unwrap();

    assert_eq!(member.profile_picture_url, DEFAULT_AVATAR_URL);
    assert!(member.skills.is_empty());
    assert!(member.github_url.is_none());
    assert!(member.linkedin_url.is_none());
    assert_eq!(member.biography, "");
}

#[tokio::test]
async fn unknown_id_is_none() {
    let harness = TestHarness::new().unwrap();

    assert!(harness
        .member_repository()
        .find_by_id("nobody")
        .await
        .is_none());
}

#[tokio::test]
async fn path_traversal_ids_are_rejected() {
    let harness = TestHarness::new().unwrap();
    std::fs::write(
        harness.content_dir().join("secret.md"),
        member_markdown("Secret", "Hidden", &[]),
    )
    .unwrap();

    assert!(harness
        .member_repository()
        .find_by_id("../secret")
        .await
        .is_none());
}

#[tokio::test]
async fn find_all_skips_invalid_files_and_other_extensions() {
    let harness = TestHarness::new().unwrap();
    harness
        .write_member("jane-doe.md", &member_markdown("Jane Doe", "Engineer", &["Rust"]))
        .unwrap();
    harness
        .write_member("anna.md", &member_markdown("Anna Lee", "Designer", &[]))
        .unwrap();
    // Missing role
    harness
        .write_member("no-role.md", "---\nname: Nameless\n---\nbio")
        .unwrap();
    // Broken YAML
    harness
        .write_member("broken.md", "---\nname: [unclosed\n---\n")
        .unwrap();
    harness.write_member("notes.txt", "not a member").unwrap();

    let members = harness.member_repository().find_all().await;
    let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();

    assert_eq!(ids, vec!["anna", "jane-doe"]);
}

#[tokio::test]
async fn missing_directory_is_an_empty_list() {
    let harness = TestHarness::new().unwrap();
    std::fs::remove_dir_all(harness.members_dir()).unwrap();

    assert!(harness.member_repository().find_all().await.is_empty());
}
