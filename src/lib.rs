//! # tocdown
//!
//! Table of contents generation for markdown documents, driven by a small
//! directive block embedded in the document itself.
//!
//! ## What does it do?
//!
//! Given a document's heading outline and the body of a `table-of-contents`
//! code block, tocdown produces a markdown fragment: a nested list, an
//! ordered list, a hierarchically numbered list, or a flat inline list of
//! first-level headings. Entries link to their heading with wiki-style
//! anchors (`[[#Heading|Heading]]`).
//!
//! ## Key Features
//!
//! - **Declarative**: `key: value` directives, with `# comments`
//! - **Layered defaults**: host-persisted [`TocDefaults`] beneath per-block overrides
//! - **Filtering**: level window, include/exclude patterns that hide whole sections
//! - **Link sanitization**: markdown, HTML and wiki-links reduced for display
//! - **Pure**: no I/O, no global mutable state
//!
//! ## Quick Start
//!
//! ```rust
//! use tocdown::{headings, parse_options, render};
//!
//! let outline = headings![
//!     1 => "Title 1 level 1",
//!     2 => "Title 1 level 2",
//!     1 => "Title 2 level 1",
//! ];
//!
//! let options = parse_options("style: nestedDetailedOrderedList\nincludeLinks: false").unwrap();
//! let markdown = render(&outline, &options);
//! assert_eq!(markdown, "1. Title 1 level 1\n\t1.1. Title 1 level 2\n2. Title 2 level 1");
//! ```
//!
//! ### Host Integration
//!
//! ```rust
//! use tocdown::codeblock::render_codeblock;
//! use tocdown::{extract_headings, TocDefaults};
//!
//! let document = "# Intro\n## Scope\n# Usage";
//! let defaults = TocDefaults { default_title: "**Contents**".to_string(), ..Default::default() };
//!
//! let markdown = render_codeblock("maxLevel: 1", &extract_headings(document), Some(&defaults));
//! assert_eq!(markdown, "**Contents**\n- [[#Intro|Intro]]\n- [[#Usage|Usage]]");
//! ```
//!
//! ## Logging
//!
//! tocdown logs through the [`log`] facade and never installs a logger.
//! `debugInConsole: true` in a directive dumps the resolved options, the
//! headings and the output at debug level.

pub mod codeblock;
pub mod error;
pub mod heading;
pub mod macros;
pub mod markdown;
pub mod options;
pub mod parse;
pub mod render;
pub mod schema;

pub use error::{Error, Result};
pub use heading::{extract_headings, Heading};
pub use markdown::{format_heading_label, is_heading_allowed, HtmlConverter};
pub use options::{Style, TocDefaults, TocOptions};
pub use parse::{parse_options, parse_options_with_defaults};
pub use render::{Renderer, EMPTY_NOTICE};
pub use schema::options_docs;

/// Render a table of contents for `headings`.
///
/// HTML in heading text is stripped from displayed labels; use
/// [`render_with_converter`] to plug in another conversion.
///
/// # Examples
///
/// ```rust
/// use tocdown::{render, TocOptions};
///
/// let options = TocOptions::new().with_hide_when_empty(true);
/// assert_eq!(render(&[], &options), "");
///
/// let options = TocOptions::new();
/// assert_eq!(render(&[], &options), "_Table of contents: no headings found_");
/// ```
#[must_use]
pub fn render(headings: &[Heading], options: &TocOptions) -> String {
    Renderer::new(options).render(headings)
}

/// Render a table of contents with a custom HTML converter for labels.
///
/// # Examples
///
/// ```rust
/// use tocdown::markdown::KeepHtml;
/// use tocdown::{headings, render_with_converter, TocOptions};
///
/// let outline = headings![1 => "<b>Bold</b>"];
/// let options = TocOptions::new();
/// assert_eq!(
///     render_with_converter(&outline, &options, KeepHtml),
///     "- [[#<b>Bold</b>|<b>Bold</b>]]"
/// );
/// ```
#[must_use]
pub fn render_with_converter<C>(headings: &[Heading], options: &TocOptions, converter: C) -> String
where
    C: HtmlConverter,
{
    Renderer::with_converter(options, converter).render(headings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headings;

    #[test]
    fn test_parse_then_render() {
        let outline = headings![1 => "A", 2 => "B"];
        let options = parse_options("title: ## TOC").unwrap();
        assert_eq!(render(&outline, &options), "## TOC\n- [[#A|A]]\n\t- [[#B|B]]");
    }

    #[test]
    fn test_docs_parse_to_defaults() {
        let options = parse_options(&options_docs()).unwrap();
        let defaults = TocOptions::default();
        assert_eq!(options.title, defaults.title);
        assert_eq!(options.style, defaults.style);
        assert_eq!(options.min_level, defaults.min_level);
        assert_eq!(options.max_level, defaults.max_level);
        assert!(options.include.is_none());
        assert!(options.exclude.is_none());
        assert_eq!(options.include_links, defaults.include_links);
        assert_eq!(options.hide_when_empty, defaults.hide_when_empty);
        assert_eq!(options.debug_in_console, defaults.debug_in_console);
        assert_eq!(options.start_at, defaults.start_at);
    }

    #[test]
    fn test_invalid_directive_surfaces_error() {
        let err = parse_options("includeLinks: no").unwrap_err();
        assert_eq!(err, Error::invalid_value("includeLinks"));
    }
}
