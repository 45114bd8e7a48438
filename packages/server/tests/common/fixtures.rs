//! Test fixtures: markdown documents and submission payloads.

use site_core::domains::member::actions::TalentSubmissionInput;

/// Member file with every front-matter field set
pub fn member_markdown(name: &str, role: &str, skills: &[&str]) -> String {
    let skills = skills
        .iter()
        .map(|skill| format!("  - {skill}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "---\n\
         name: {name}\n\
         role: {role}\n\
         profilePictureUrl: https://example.org/{slug}.jpg\n\
         skills:\n{skills}\n\
         githubUrl: https://github.com/{slug}\n\
         linkedinUrl: https://linkedin.com/in/{slug}\n\
         ---\n\
         \n\
         {name} is a member of the club.\n",
        slug = name.to_lowercase().replace(' ', ""),
    )
}

/// Event file dated `date` (any accepted date format)
pub fn event_markdown(title: &str, date: &str) -> String {
    format!(
        "---\n\
         title: {title}\n\
         date: {date}\n\
         description: About {title}\n\
         tags:\n  - workshop\n\
         imageUrl: /images/{title}.png\n\
         ---\n\
         \n\
         Details for **{title}**.\n"
    )
}

pub fn story_markdown(member_id: &str, company: &str, featured: bool) -> String {
    format!(
        "---\n\
         memberId: {member_id}\n\
         company: {company}\n\
         quote: Algoritmia helped me join {company}.\n\
         isFeatured: {featured}\n\
         ---\n"
    )
}

pub fn valid_submission() -> TalentSubmissionInput {
    TalentSubmissionInput {
        name: "Jane Doe".to_string(),
        role: "Software Engineer".to_string(),
        linkedin_url: "https://linkedin.com/in/janedoe".to_string(),
        github_url: "https://github.com/janedoe".to_string(),
        profile_picture_url: "https://example.org/jane.jpg".to_string(),
        skills: vec!["TypeScript".to_string(), "Rust".to_string()],
        biography: "Jane builds compilers and web services.".to_string(),
    }
}
