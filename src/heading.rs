//! Document headings, the renderer's input.
//!
//! Hosts usually already hold a heading outline (an editor's metadata cache,
//! a parsed document). [`extract_headings`] covers hosts that only have the
//! raw markdown text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A document outline entry.
///
/// Accepts the host's `heading` key as an alias of `text`, so outline
/// entries can be deserialized as they come.
///
/// # Examples
///
/// ```rust
/// use tocdown::Heading;
///
/// let heading: Heading = serde_json::from_str(r#"{"heading": "Intro", "level": 2}"#).unwrap();
/// assert_eq!(heading, Heading::new(2, "Intro"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Heading {
    #[serde(alias = "heading")]
    pub text: String,
    pub level: usize,
}

impl Heading {
    #[must_use]
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Heading {
            text: text.into(),
            level,
        }
    }
}

fn atx_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?[ \t]*$").expect("valid heading regex"))
}

fn closing_sequence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|[ \t]+)#+$").expect("valid closing sequence regex"))
}

/// Collects ATX headings (`# Title` to `###### Title`) from markdown text.
///
/// Lines inside fenced code blocks are skipped and optional closing `#`
/// sequences are trimmed. Setext headings are not recognized.
///
/// # Examples
///
/// ```rust
/// use tocdown::{extract_headings, Heading};
///
/// let markdown = "# Top\n\ntext\n\n```sh\n# not a heading\n```\n\n## Sub ##";
/// assert_eq!(
///     extract_headings(markdown),
///     vec![Heading::new(1, "Top"), Heading::new(2, "Sub")]
/// );
/// ```
#[must_use]
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut fence: Option<&str> = None;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
            continue;
        }
        if trimmed.starts_with("```") {
            fence = Some("```");
            continue;
        }
        if trimmed.starts_with("~~~") {
            fence = Some("~~~");
            continue;
        }

        let Some(caps) = atx_heading_regex().captures(line) else {
            continue;
        };
        let level = caps[1].len();
        let text = caps.get(2).map_or("", |m| m.as_str());
        let text = closing_sequence_regex().replace(text, "");
        headings.push(Heading::new(level, text.trim()));
    }

    headings
}
