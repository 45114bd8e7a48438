// Business domains
pub mod agenda;
pub mod member;
pub mod success_story;
