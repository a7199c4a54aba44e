//! Table of contents rendering.
//!
//! This module provides the [`Renderer`] that turns resolved options and a
//! heading outline into markdown.
//!
//! ## Overview
//!
//! Every style shares the same filtering pass, in document order:
//!
//! - **Reference level**: `min_level` when set, else the shallowest heading
//!   present. Indentation is measured from it.
//! - **Section suppression**: a heading rejected by the include/exclude
//!   filters hides every deeper heading that follows it, until a heading at
//!   the same level or shallower appears.
//! - **Level window**: headings shallower than the reference level, deeper
//!   than `max_level`, or with empty text are skipped.
//! - **Offset**: `start_at` drops that many leading entries.
//!
//! ## Usage
//!
//! ```rust
//! use tocdown::{headings, render, TocOptions};
//!
//! let outline = headings![1 => "Intro", 2 => "Scope", 1 => "Usage"];
//! let options = TocOptions::new().with_include_links(false);
//! assert_eq!(render(&outline, &options), "- Intro\n\t- Scope\n- Usage");
//! ```
//!
//! ## Direct Renderer Usage
//!
//! A renderer can carry its own [`HtmlConverter`]:
//!
//! ```rust
//! use tocdown::markdown::KeepHtml;
//! use tocdown::{headings, Renderer, TocOptions};
//!
//! let outline = headings![1 => "A <em>b</em>"];
//! let options = TocOptions::new();
//! let markdown = Renderer::with_converter(&options, KeepHtml).render(&outline);
//! assert_eq!(markdown, "- [[#A <em>b</em>|A <em>b</em>]]");
//! ```

use crate::markdown::{format_heading_label_with, is_heading_allowed, HtmlConverter, StripHtml};
use crate::{Heading, Style, TocOptions};
use std::collections::BTreeMap;

/// Notice rendered when no heading survives filtering and `hide_when_empty` is off.
pub const EMPTY_NOTICE: &str = "_Table of contents: no headings found_";

/// One indentation unit.
const INDENT: &str = "\t";

const INLINE_SEPARATOR: &str = " | ";

/// One entry of the rendered list, before it is joined into the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLine {
    pub depth: usize,
    /// List marker: `-`, `1.`, `1.2.`, or empty for inline entries.
    pub marker: String,
    pub label: String,
}

/// The table of contents renderer.
///
/// Created via [`Renderer::new`] (HTML stripped from labels) or
/// [`Renderer::with_converter`].
pub struct Renderer<'o, C = StripHtml> {
    output: String,
    options: &'o TocOptions,
    converter: C,
}

impl<'o> Renderer<'o, StripHtml> {
    pub fn new(options: &'o TocOptions) -> Self {
        Self::with_converter(options, StripHtml)
    }
}

impl<'o, C> Renderer<'o, C>
where
    C: HtmlConverter,
{
    pub fn with_converter(options: &'o TocOptions, converter: C) -> Self {
        Renderer {
            output: String::with_capacity(256),
            options,
            converter,
        }
    }

    /// Renders the outline: title, then body, or the empty-state output.
    #[must_use]
    pub fn render(mut self, headings: &[Heading]) -> String {
        let lines = self.lines(headings);
        if lines.is_empty() {
            if self.options.hide_when_empty {
                return String::new();
            }
            self.write_title();
            self.output.push_str(EMPTY_NOTICE);
            return self.output;
        }

        self.write_title();
        match self.options.style {
            Style::InlineFirstLevel => self.write_inline(&lines),
            _ => self.write_list(&lines),
        }
        self.output
    }

    /// Computes the list entries without joining them.
    #[must_use]
    pub fn lines(&self, headings: &[Heading]) -> Vec<RenderedLine> {
        let Some(min_level) = self
            .options
            .effective_min_level(headings.iter().map(|heading| heading.level))
        else {
            return Vec::new();
        };
        let visible = visible_headings(headings, self.options, min_level);

        match self.options.style {
            Style::NestedList => self.list_lines(&visible, min_level, "-"),
            Style::NestedOrderedList => self.list_lines(&visible, min_level, "1."),
            Style::NestedDetailedOrderedList => self.detailed_lines(&visible, min_level),
            Style::InlineFirstLevel => self.inline_lines(&visible, min_level),
        }
    }

    fn label(&self, heading: &Heading) -> String {
        format_heading_label_with(&heading.text, self.options, &self.converter)
    }

    fn list_lines(&self, visible: &[&Heading], min_level: usize, marker: &str) -> Vec<RenderedLine> {
        visible
            .iter()
            .skip(self.options.start_at)
            .map(|heading| RenderedLine {
                depth: heading.level - min_level,
                marker: marker.to_string(),
                label: self.label(heading),
            })
            .collect()
    }

    /// Numbers entries hierarchically (`1.`, `1.1.`, `2.`), restarting a
    /// level's count whenever a shallower or equal heading appears.
    fn detailed_lines(&self, visible: &[&Heading], min_level: usize) -> Vec<RenderedLine> {
        let mut counters: BTreeMap<usize, usize> = BTreeMap::new();
        let mut lines = Vec::with_capacity(visible.len());

        for heading in visible.iter().skip(self.options.start_at) {
            counters.retain(|&level, _| level <= heading.level);
            *counters.entry(heading.level).or_insert(0) += 1;
            let number = counters
                .range(min_level..=heading.level)
                .map(|(_, count)| count.to_string())
                .collect::<Vec<_>>()
                .join(".");
            lines.push(RenderedLine {
                depth: heading.level - min_level,
                marker: format!("{}.", number),
                label: self.label(heading),
            });
        }

        lines
    }

    fn inline_lines(&self, visible: &[&Heading], min_level: usize) -> Vec<RenderedLine> {
        visible
            .iter()
            .filter(|heading| heading.level == min_level)
            .skip(self.options.start_at)
            .map(|heading| RenderedLine {
                depth: 0,
                marker: String::new(),
                label: self.label(heading),
            })
            .collect()
    }

    fn write_title(&mut self) {
        if !self.options.title.is_empty() {
            self.output.push_str(&self.options.title);
            self.output.push_str(self.options.style.title_separator());
        }
    }

    fn write_list(&mut self, lines: &[RenderedLine]) {
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                self.output.push('\n');
            }
            for _ in 0..line.depth {
                self.output.push_str(INDENT);
            }
            self.output.push_str(&line.marker);
            self.output.push(' ');
            self.output.push_str(&line.label);
        }
    }

    fn write_inline(&mut self, lines: &[RenderedLine]) {
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                self.output.push_str(INLINE_SEPARATOR);
            }
            self.output.push_str(&line.label);
        }
    }
}

/// Applies suppression, filters and the level window, in document order.
///
/// `start_at` is left to the caller since the inline style applies it after
/// its own level restriction.
fn visible_headings<'h>(
    headings: &'h [Heading],
    options: &TocOptions,
    min_level: usize,
) -> Vec<&'h Heading> {
    let mut visible = Vec::with_capacity(headings.len());
    // 0 when no section is suppressed
    let mut suppressed_level = 0;

    for heading in headings {
        if suppressed_level > 0 && heading.level > suppressed_level {
            continue;
        }
        if heading.level <= suppressed_level {
            suppressed_level = 0;
        }
        if !is_heading_allowed(&heading.text, options) {
            log::trace!("suppressing section under `{}`", heading.text);
            suppressed_level = heading.level;
            continue;
        }
        if heading.level < min_level {
            continue;
        }
        if options.max_level > 0 && heading.level > options.max_level {
            continue;
        }
        if heading.text.is_empty() {
            continue;
        }
        visible.push(heading);
    }

    visible
}
