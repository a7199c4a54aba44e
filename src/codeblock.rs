//! Glue for hosts that embed the TOC as a fenced code block.
//!
//! A TOC is declared in a document as:
//!
//! ````text
//! ```table-of-contents
//! style: nestedOrderedList
//! maxLevel: 3
//! ```
//! ````
//!
//! The host hands the block body and the document outline to
//! [`render_codeblock`] on every change and displays the returned markdown.

use crate::{parse_options, parse_options_with_defaults, render, Heading, TocDefaults};

/// Code block language tag.
pub const CODEBLOCK_ID: &str = "table-of-contents";

/// Short alias of [`CODEBLOCK_ID`].
pub const CODEBLOCK_ID_SHORT: &str = "toc";

/// Whether a fenced code block language tag declares a TOC.
///
/// # Examples
///
/// ```rust
/// use tocdown::codeblock::is_toc_codeblock;
///
/// assert!(is_toc_codeblock("toc"));
/// assert!(is_toc_codeblock(" table-of-contents "));
/// assert!(!is_toc_codeblock("rust"));
/// ```
#[must_use]
pub fn is_toc_codeblock(lang: &str) -> bool {
    matches!(lang.trim(), CODEBLOCK_ID | CODEBLOCK_ID_SHORT)
}

/// An empty TOC block, ready to insert at the cursor.
#[must_use]
pub fn codeblock_template() -> String {
    format!("```{}\n```", CODEBLOCK_ID)
}

/// A TOC block listing every option at its default value.
///
/// # Examples
///
/// ```rust
/// use tocdown::codeblock::codeblock_template_with_docs;
///
/// let block = codeblock_template_with_docs();
/// assert!(block.starts_with("```table-of-contents\ntitle: \n"));
/// assert!(block.ends_with("\n```"));
/// ```
#[must_use]
pub fn codeblock_template_with_docs() -> String {
    format!("```{}\n{}\n```", CODEBLOCK_ID, crate::options_docs())
}

/// Renders a TOC block body against the document outline.
///
/// Never fails: an invalid directive yields a readable message in place of
/// the TOC. With `debugInConsole: true` the resolved options, the headings
/// and the output are logged at debug level.
///
/// # Examples
///
/// ```rust
/// use tocdown::codeblock::render_codeblock;
/// use tocdown::headings;
///
/// let outline = headings![1 => "Intro"];
/// assert_eq!(render_codeblock("", &outline, None), "- [[#Intro|Intro]]");
/// assert_eq!(
///     render_codeblock("maxLevel: -1", &outline, None),
///     "_💥 Could not render table of contents (Invalid value for `maxLevel`)_"
/// );
/// ```
#[must_use]
pub fn render_codeblock(source: &str, headings: &[Heading], defaults: Option<&TocDefaults>) -> String {
    let parsed = match defaults {
        Some(defaults) => parse_options_with_defaults(source, defaults),
        None => parse_options(source),
    };
    let options = match parsed {
        Ok(options) => options,
        Err(err) => {
            log::warn!("could not render table of contents: {}", err);
            return format!("_💥 Could not render table of contents ({})_", err);
        }
    };

    if options.debug_in_console {
        log::debug!("Options: {:?}", options);
        log::debug!("Headings: {:?}", headings);
    }
    let markdown = render(headings, &options);
    if options.debug_in_console {
        log::debug!("Markdown: {:?}", markdown);
    }
    markdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{headings, Style};

    #[test]
    fn test_template_is_empty_block() {
        assert_eq!(codeblock_template(), "```table-of-contents\n```");
    }

    #[test]
    fn test_defaults_are_layered_beneath_directive() {
        let outline = headings![1 => "A", 2 => "B"];
        let defaults = TocDefaults {
            default_style: Style::InlineFirstLevel,
            default_include_links: false,
            ..Default::default()
        };
        assert_eq!(render_codeblock("", &outline, Some(&defaults)), "A");
        assert_eq!(
            render_codeblock("style: nestedList", &outline, Some(&defaults)),
            "- A\n\t- B"
        );
    }

    #[test]
    fn test_debug_flag_does_not_change_output() {
        let outline = headings![1 => "A"];
        assert_eq!(
            render_codeblock("debugInConsole: true", &outline, None),
            render_codeblock("", &outline, None)
        );
    }

    #[test]
    fn test_not_a_toc_block() {
        assert!(!is_toc_codeblock("table"));
        assert!(!is_toc_codeblock(""));
    }
}
