//! YAML front-matter extraction for markdown files.
//!
//! A document may open with a block delimited by `---` lines. The block is
//! deserialized into `T`; everything after the closing delimiter is the body.
//! Documents without a block deserialize `T` from an empty mapping.

use serde::de::DeserializeOwned;

use super::ContentError;

const DELIMITER: &str = "---";

/// A parsed markdown document
#[derive(Debug, Clone, PartialEq)]
pub struct Document<T> {
    pub front_matter: T,
    pub body: String,
}

/// Split a markdown document into its front-matter and body
pub fn parse_document<T: DeserializeOwned>(content: &str) -> Result<Document<T>, ContentError> {
    let content = content.trim_start_matches('\u{feff}');
    let (yaml, body) = split_front_matter(content)?;

    let yaml = if yaml.trim().is_empty() { "{}" } else { yaml };
    let front_matter = serde_yaml::from_str(yaml)?;

    Ok(Document {
        front_matter,
        body: body.to_string(),
    })
}

/// Treat blank strings like missing values
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Boolean flag that tolerates quoted values; anything unrecognized is `false`
pub fn flag(value: Option<serde_yaml::Value>) -> bool {
    match value {
        Some(serde_yaml::Value::Bool(b)) => b,
        Some(serde_yaml::Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn split_front_matter(content: &str) -> Result<(&str, &str), ContentError> {
    let mut lines = content.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => {}
        _ => return Ok(("", content)),
    }

    let yaml_start = DELIMITER.len() + line_ending_len(&content[DELIMITER.len()..]);
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }

    Err(ContentError::UnterminatedFrontmatter)
}

fn line_ending_len(rest: &str) -> usize {
    let trimmed = rest.trim_start_matches([' ', '\t']);
    let spaces = rest.len() - trimmed.len();
    if trimmed.starts_with("\r\n") {
        spaces + 2
    } else if trimmed.starts_with('\n') {
        spaces + 1
    } else {
        rest.len()
    }
}
