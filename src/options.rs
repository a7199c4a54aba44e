//! Resolved configuration for table of contents rendering.
//!
//! This module provides the types the renderer consumes:
//!
//! - [`TocOptions`]: Fully resolved options, one value per recognized directive
//! - [`Style`]: The four output layouts
//! - [`TocDefaults`]: Host-persisted defaults layered beneath directive overrides
//!
//! ## Examples
//!
//! ```rust
//! use tocdown::{Style, TocOptions};
//!
//! // Defaults: nested list with links, no title
//! let options = TocOptions::new();
//! assert_eq!(options.style, Style::NestedList);
//! assert!(options.include_links);
//!
//! // Builder-style overrides
//! let options = TocOptions::new()
//!     .with_style(Style::InlineFirstLevel)
//!     .with_title("Contents:")
//!     .with_include_links(false);
//! assert_eq!(options.title, "Contents:");
//! ```

use crate::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output layout of the table of contents.
///
/// Serialized with the same camelCase names used in directive text.
///
/// # Examples
///
/// ```rust
/// use tocdown::Style;
///
/// assert_eq!(Style::NestedList.as_str(), "nestedList");
/// assert_eq!("inlineFirstLevel".parse::<Style>().unwrap(), Style::InlineFirstLevel);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    #[default]
    NestedList,
    NestedOrderedList,
    NestedDetailedOrderedList,
    InlineFirstLevel,
}

impl Style {
    /// Every style, in the order they are documented.
    pub const ALL: [Style; 4] = [
        Style::NestedList,
        Style::NestedOrderedList,
        Style::NestedDetailedOrderedList,
        Style::InlineFirstLevel,
    ];

    /// Returns the directive name of this style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Style::NestedList => "nestedList",
            Style::NestedOrderedList => "nestedOrderedList",
            Style::NestedDetailedOrderedList => "nestedDetailedOrderedList",
            Style::InlineFirstLevel => "inlineFirstLevel",
        }
    }

    /// Separator placed between the title and the body.
    #[must_use]
    pub const fn title_separator(&self) -> &'static str {
        match self {
            Style::InlineFirstLevel => " ",
            _ => "\n",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| Error::custom(format!("unknown TOC style `{}`", s)))
    }
}

/// Fully resolved options for one render.
///
/// Every field always carries a value; unspecified options hold their
/// defaults. Built by [`crate::parse_options`] or directly through the
/// `with_*` builders.
#[derive(Clone, Debug)]
pub struct TocOptions {
    /// Markdown placed before the list. Empty for no title.
    pub title: String,
    pub style: Style,
    /// Shallowest level to include. 0 uses the shallowest heading present.
    pub min_level: usize,
    /// Deepest level to include. 0 means no cap.
    pub max_level: usize,
    /// Only headings matching this pattern are listed. Takes precedence over `exclude`.
    pub include: Option<Regex>,
    /// Headings matching this pattern are hidden together with their subsections.
    pub exclude: Option<Regex>,
    /// Render each entry as a wiki-style anchor link.
    pub include_links: bool,
    /// Render nothing instead of a notice when no heading survives filtering.
    pub hide_when_empty: bool,
    /// Dump options, headings and output through the `log` facade.
    pub debug_in_console: bool,
    /// Number of leading entries to drop after filtering.
    pub start_at: usize,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions {
            title: String::new(),
            style: Style::default(),
            min_level: 0,
            max_level: 0,
            include: None,
            exclude: None,
            include_links: true,
            hide_when_empty: false,
            debug_in_console: false,
            start_at: 0,
        }
    }
}

impl TocOptions {
    /// Creates options holding every default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tocdown::TocOptions;
    ///
    /// let options = TocOptions::new();
    /// assert_eq!(options.min_level, 0);
    /// assert!(options.include.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options seeded from host defaults.
    ///
    /// Only the fields [`TocDefaults`] covers are taken from it; `include`,
    /// `exclude`, `debug_in_console` and `start_at` keep their defaults.
    #[must_use]
    pub fn from_defaults(defaults: &TocDefaults) -> Self {
        TocOptions {
            title: defaults.default_title.clone(),
            style: defaults.default_style,
            min_level: defaults.default_min_level,
            max_level: defaults.default_max_level,
            include_links: defaults.default_include_links,
            hide_when_empty: defaults.default_hide_when_empty,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: usize) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_max_level(mut self, level: usize) -> Self {
        self.max_level = level;
        self
    }

    /// Sets the include pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use regex::Regex;
    /// use tocdown::TocOptions;
    ///
    /// let options = TocOptions::new().with_include(Regex::new("(?i)chapter").unwrap());
    /// assert!(options.include.is_some());
    /// ```
    #[must_use]
    pub fn with_include(mut self, pattern: Regex) -> Self {
        self.include = Some(pattern);
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, pattern: Regex) -> Self {
        self.exclude = Some(pattern);
        self
    }

    #[must_use]
    pub fn with_include_links(mut self, include_links: bool) -> Self {
        self.include_links = include_links;
        self
    }

    #[must_use]
    pub fn with_hide_when_empty(mut self, hide: bool) -> Self {
        self.hide_when_empty = hide;
        self
    }

    #[must_use]
    pub fn with_debug_in_console(mut self, debug: bool) -> Self {
        self.debug_in_console = debug;
        self
    }

    #[must_use]
    pub fn with_start_at(mut self, start_at: usize) -> Self {
        self.start_at = start_at;
        self
    }

    /// The level indentation is measured from.
    ///
    /// An explicit `min_level` wins; otherwise the shallowest level present.
    /// Returns `None` only when `min_level` is unset and there are no headings.
    #[must_use]
    pub fn effective_min_level<I>(&self, levels: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        if self.min_level > 0 {
            Some(self.min_level)
        } else {
            levels.into_iter().min()
        }
    }
}

/// Defaults persisted by the host, applied beneath directive overrides.
///
/// Keys use the host's camelCase names (`defaultTitle`, `defaultStyle`, ...).
/// Missing keys fall back to the built-in defaults so older settings load.
///
/// # Examples
///
/// ```rust
/// use tocdown::{Style, TocDefaults};
///
/// let defaults = TocDefaults::default();
/// assert_eq!(defaults.default_style, Style::NestedList);
/// assert!(defaults.default_include_links);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocDefaults {
    pub default_title: String,
    pub default_style: Style,
    pub default_min_level: usize,
    pub default_max_level: usize,
    pub default_include_links: bool,
    pub default_hide_when_empty: bool,
}

impl Default for TocDefaults {
    fn default() -> Self {
        let options = TocOptions::default();
        TocDefaults {
            default_title: options.title,
            default_style: options.style,
            default_min_level: options.min_level,
            default_max_level: options.max_level,
            default_include_links: options.include_links,
            default_hide_when_empty: options.hide_when_empty,
        }
    }
}
