//! Inline classification annotations embedded in solution source.
//!
//! An annotation is `marker: payload;` anywhere in the text, usually inside a
//! comment. Two markers are recognised:
//!
//! - `lct` carries a comma-separated tag list, e.g. `// lct: array, hashmap;`
//! - `lcd` carries a difficulty label, e.g. `# lcd: Medium;`
//!
//! Whitespace is allowed before and after the colon. The payload runs up to the
//! first `;` and may span lines. Only the first occurrence of each marker counts.

use regex::Regex;
use std::sync::OnceLock;

pub const TAGS_MARKER: &str = "lct";
pub const DIFFICULTY_MARKER: &str = "lcd";

static TAGS_PATTERN: OnceLock<Regex> = OnceLock::new();
static DIFFICULTY_PATTERN: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationMetadata {
    pub tags: Vec<String>,
    pub difficulty: Option<String>,
}

impl ClassificationMetadata {
    /// A matched tag annotation always yields at least one piece.
    pub fn has_tag_annotation(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn difficulty_label(&self) -> Option<&str> {
        self.difficulty.as_deref().filter(|d| !d.is_empty())
    }
}

fn annotation_pattern(marker: &str) -> Regex {
    Regex::new(&format!(r"{}\s*:\s*([^;]+);", regex::escape(marker)))
        .expect("annotation pattern is a valid regex")
}

fn first_payload<'a>(pattern: &Regex, source: &'a str) -> Option<&'a str> {
    pattern
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn extract_tags(source: &str) -> Vec<String> {
    let pattern = TAGS_PATTERN.get_or_init(|| annotation_pattern(TAGS_MARKER));
    first_payload(pattern, source)
        .map(|payload| {
            payload
                .split(',')
                .map(|tag| tag.trim().to_string())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
}

pub fn extract_difficulty(source: &str) -> Option<String> {
    let pattern = DIFFICULTY_PATTERN.get_or_init(|| annotation_pattern(DIFFICULTY_MARKER));
    first_payload(pattern, source).map(|payload| payload.trim().to_string())
}

pub fn extract(source: &str) -> ClassificationMetadata {
    ClassificationMetadata {
        tags: extract_tags(source),
        difficulty: extract_difficulty(source),
    }
}
