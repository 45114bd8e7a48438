//! Member domain actions
//!
//! Queries read through the member repository; `submit_talent` turns a
//! directory application into a reviewable member file.

mod queries;
mod submit_talent;

pub use queries::{get_all_members, get_member_by_id, search_members};
pub use submit_talent::{
    generate_markdown, submit_talent, validate_submission, GeneratedProfile, PathSegment,
    SubmissionError, TalentSubmission, TalentSubmissionInput, ValidationIssue,
    MIN_BIOGRAPHY_CHARS,
};
