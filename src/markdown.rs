//! Heading text sanitization.
//!
//! Entries are rendered as wiki-style anchor links, `[[#<link>|<display>]]`.
//! The two halves need different treatment:
//!
//! - **display**: what the reader sees. Markdown emphasis, HTML, markdown
//!   links and wiki-links are reduced to plain text since none of them render
//!   inside a wiki-link label.
//! - **link**: must match the heading anchor, so markdown and HTML stay, but
//!   wiki-link brackets, pipes and `#` characters are removed.
//!
//! ```rust
//! use tocdown::{format_heading_label, TocOptions};
//!
//! let options = TocOptions::new();
//! let label = format_heading_label("Some [[file.md|heading]]", &options);
//! assert_eq!(label, "[[#Some file.md heading|Some heading]]");
//! ```

use crate::TocOptions;
use regex::Regex;
use std::sync::OnceLock;

/// Converts inline HTML found in a heading to markdown or plain text.
///
/// Hosts with a real HTML renderer can plug it in here; closures of type
/// `Fn(&str) -> String` implement this trait.
pub trait HtmlConverter {
    fn html_to_markdown(&self, html: &str) -> String;
}

/// Removes HTML tags, keeping their text content, and decodes basic entities.
#[derive(Clone, Copy, Debug, Default)]
pub struct StripHtml;

impl HtmlConverter for StripHtml {
    fn html_to_markdown(&self, html: &str) -> String {
        if !html.contains('<') && !html.contains('&') {
            return html.to_string();
        }
        let text = tag_regex().replace_all(html, "");
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }
}

/// Leaves HTML untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepHtml;

impl HtmlConverter for KeepHtml {
    fn html_to_markdown(&self, html: &str) -> String {
        html.to_string()
    }
}

impl<F> HtmlConverter for F
where
    F: Fn(&str) -> String,
{
    fn html_to_markdown(&self, html: &str) -> String {
        self(html)
    }
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("valid tag regex"))
}

fn italic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII word boundaries: `_` next to any non-ASCII letter still opens or closes emphasis
    RE.get_or_init(|| {
        Regex::new(r"([^0-9A-Za-z_]|^)_+(\S)(.*?\S)?_+([^0-9A-Za-z_]|$)").expect("valid italic regex")
    })
}

fn markdown_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link regex"))
}

fn aliased_wikilink_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[([^\]]+)\|([^\]]+)\]\]").expect("valid wikilink regex"))
}

fn wikilink_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid wikilink regex"))
}

/// Whether a heading passes the include/exclude filters.
///
/// `include` takes precedence: when it is set, `exclude` is not consulted.
///
/// # Examples
///
/// ```rust
/// use regex::Regex;
/// use tocdown::{is_heading_allowed, TocOptions};
///
/// let options = TocOptions::new().with_exclude(Regex::new("(?i)skip").unwrap());
/// assert!(!is_heading_allowed("Skip this", &options));
/// assert!(is_heading_allowed("Keep this", &options));
/// ```
#[must_use]
pub fn is_heading_allowed(label: &str, options: &TocOptions) -> bool {
    if let Some(include) = &options.include {
        return include.is_match(label);
    }
    if let Some(exclude) = &options.exclude {
        return !exclude.is_match(label);
    }
    true
}

/// Formats a heading for the list: the raw text, or a wiki-style anchor link
/// when `include_links` is set. HTML is reduced with [`StripHtml`].
#[must_use]
pub fn format_heading_label(label: &str, options: &TocOptions) -> String {
    format_heading_label_with(label, options, &StripHtml)
}

/// Same as [`format_heading_label`] with a caller-provided HTML converter.
///
/// # Examples
///
/// ```rust
/// use tocdown::markdown::{format_heading_label_with, KeepHtml};
/// use tocdown::TocOptions;
///
/// let options = TocOptions::new();
/// let label = format_heading_label_with("A <em>b</em>", &options, &KeepHtml);
/// assert_eq!(label, "[[#A <em>b</em>|A <em>b</em>]]");
/// ```
#[must_use]
pub fn format_heading_label_with<C>(label: &str, options: &TocOptions, converter: &C) -> String
where
    C: HtmlConverter + ?Sized,
{
    if !options.include_links {
        return label.to_string();
    }
    let text = strip_wikilinks(&strip_html(&strip_markdown(label), converter), false);
    let link = strip_tags(&strip_wikilinks(label, true));
    format!("[[#{}|{}]]", link, text)
}

/// Removes emphasis, code, highlight and strikethrough markers, and collapses
/// `[label](url)` links to their label.
#[must_use]
pub fn strip_markdown(text: &str) -> String {
    let text = text.replace('*', "");
    let text = italic_regex().replace_all(&text, "${1}${2}${3}${4}");
    let text = text.replace('`', "").replace("==", "").replace("~~", "");
    markdown_link_regex().replace_all(&text, "${1}").into_owned()
}

fn strip_html<C>(text: &str, converter: &C) -> String
where
    C: HtmlConverter + ?Sized,
{
    strip_markdown(&converter.html_to_markdown(text))
}

/// Collapses wiki-links and neutralizes stray link syntax.
///
/// For the display half `[[target|alias]]` becomes `alias`; for the link half
/// both parts are kept, space-joined, since the anchor is built from the
/// rendered heading text.
#[must_use]
pub fn strip_wikilinks(text: &str, is_for_link: bool) -> String {
    let aliased = if is_for_link { "${1} ${2}" } else { "${2}" };
    let text = aliased_wikilink_regex().replace_all(text, aliased);
    let text = wikilink_regex().replace_all(&text, "${1}");
    let text = text.replace("[[", "");
    if is_for_link {
        text.replace("| ", "").replace('|', " ")
    } else {
        text.replace("| ", "- ").replace('|', "-")
    }
}

/// Replaces `#` with a space; a raw `#` inside the link target breaks anchor matching.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    text.replace('#', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked() -> TocOptions {
        TocOptions::new()
    }

    #[test]
    fn test_plain_label_without_links() {
        let options = TocOptions::new().with_include_links(false);
        assert_eq!(format_heading_label("**Bold** `code`", &options), "**Bold** `code`");
        assert_eq!(format_heading_label("[[link]]", &options), "[[link]]");
    }

    #[test]
    fn test_simple_link() {
        assert_eq!(
            format_heading_label("My heading", &linked()),
            "[[#My heading|My heading]]"
        );
    }

    #[test]
    fn test_empty_heading() {
        assert_eq!(format_heading_label("", &linked()), "[[#|]]");
    }

    #[test]
    fn test_only_markers_strip_to_empty_display() {
        assert_eq!(format_heading_label("****", &linked()), "[[#****|]]");
    }

    #[test]
    fn test_strip_markdown_markers() {
        assert_eq!(
            strip_markdown("**Bold** `code` ==highlight== ~~strike~~"),
            "Bold code highlight strike"
        );
        assert_eq!(strip_markdown("_italic text_"), "italic text");
        assert_eq!(strip_markdown("snake_case_name"), "snake_case_name");
        assert_eq!(strip_markdown("é_x_"), "éx");
        assert_eq!(strip_markdown("[Link text](https://url.com)"), "Link text");
    }

    #[test]
    fn test_strip_wikilinks_halves() {
        assert_eq!(strip_wikilinks("Link to [[other|file]]", false), "Link to file");
        assert_eq!(strip_wikilinks("Link to [[other|file]]", true), "Link to other file");
        assert_eq!(strip_wikilinks("Text with [[brackets]]", false), "Text with brackets");
        assert_eq!(strip_wikilinks("a [[b|c | d", false), "a b-c - d");
        assert_eq!(strip_wikilinks("a [[b|c | d", true), "a b c d");
    }

    #[test]
    fn test_tags_become_spaces_in_link() {
        let label = format_heading_label("Heading #with-tag", &linked());
        assert_eq!(label, "[[#Heading  with-tag|Heading #with-tag]]");
    }

    #[test]
    fn test_strip_html_keeps_text_content() {
        let html = StripHtml.html_to_markdown("Some <em style=\"color: red\">heading</em> &amp; more");
        assert_eq!(html, "Some heading & more");
        assert_eq!(StripHtml.html_to_markdown("a < b"), "a < b");
    }

    #[test]
    fn test_closure_converter() {
        let upper = |html: &str| html.to_uppercase();
        let label = format_heading_label_with("abc", &linked(), &upper);
        assert_eq!(label, "[[#abc|ABC]]");
    }

    #[test]
    fn test_include_wins_over_exclude() {
        let options = TocOptions::new()
            .with_include(Regex::new("keep").unwrap())
            .with_exclude(Regex::new("keep").unwrap());
        assert!(is_heading_allowed("keep this", &options));
        assert!(!is_heading_allowed("drop this", &options));
    }

    #[test]
    fn test_no_filters_allows_everything() {
        assert!(is_heading_allowed("", &TocOptions::new()));
        assert!(is_heading_allowed("Anything", &TocOptions::new()));
    }
}
