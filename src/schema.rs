//! The table of recognized directive options.
//!
//! Each option has a name, a value kind, a textual default and a short
//! comment. The table drives both parsing (name lookup, kind dispatch) and
//! the documentation template inserted by the host's "with options" command.
//!
//! ```rust
//! use tocdown::schema::{self, OptionKind};
//!
//! let style = schema::lookup("style").unwrap();
//! assert!(matches!(style.kind, OptionKind::Value(_)));
//! assert!(schema::lookup("colour").is_none());
//! ```

use crate::Style;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// Kind of value an option accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// Free text, stored verbatim. `#` is not treated as a comment.
    String,
    /// One of a fixed set of names.
    Value(&'static [&'static str]),
    /// Non-negative integer.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `/body/flags`. `#` is not treated as a comment.
    Regexp,
}

impl OptionKind {
    /// Whether a trailing `# comment` is stripped from values of this kind.
    #[must_use]
    pub const fn strips_comments(&self) -> bool {
        !matches!(self, OptionKind::String | OptionKind::Regexp)
    }
}

/// One entry of the option table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: &'static str,
    pub kind: OptionKind,
    /// Default as written in the documentation template.
    pub default: &'static str,
    pub comment: &'static str,
}

impl OptionDefinition {
    /// Renders the `name: default # comment` documentation line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tocdown::schema;
    ///
    /// let line = schema::lookup("maxLevel").unwrap().docs_line();
    /// assert_eq!(line, "maxLevel: 0 # Include headings up to the specified level");
    ///
    /// let line = schema::lookup("title").unwrap().docs_line();
    /// assert_eq!(line, "title: ");
    /// ```
    #[must_use]
    pub fn docs_line(&self) -> String {
        if self.comment.is_empty() {
            format!("{}: {}", self.name, self.default)
        } else {
            format!("{}: {} # {}", self.name, self.default, self.comment)
        }
    }
}

const STYLE_NAMES: [&str; 4] = [
    Style::NestedList.as_str(),
    Style::NestedOrderedList.as_str(),
    Style::NestedDetailedOrderedList.as_str(),
    Style::InlineFirstLevel.as_str(),
];

const DEFINITIONS: [OptionDefinition; 10] = [
    OptionDefinition {
        name: "title",
        kind: OptionKind::String,
        default: "",
        comment: "",
    },
    OptionDefinition {
        name: "style",
        kind: OptionKind::Value(&STYLE_NAMES),
        default: "nestedList",
        comment: "TOC style (nestedList|nestedOrderedList|nestedDetailedOrderedList|inlineFirstLevel)",
    },
    OptionDefinition {
        name: "minLevel",
        kind: OptionKind::Number,
        default: "0",
        comment: "Include headings from the specified level",
    },
    OptionDefinition {
        name: "maxLevel",
        kind: OptionKind::Number,
        default: "0",
        comment: "Include headings up to the specified level",
    },
    OptionDefinition {
        name: "include",
        kind: OptionKind::Regexp,
        default: "",
        comment: "",
    },
    OptionDefinition {
        name: "exclude",
        kind: OptionKind::Regexp,
        default: "",
        comment: "",
    },
    OptionDefinition {
        name: "includeLinks",
        kind: OptionKind::Boolean,
        default: "true",
        comment: "Make headings clickable",
    },
    OptionDefinition {
        name: "hideWhenEmpty",
        kind: OptionKind::Boolean,
        default: "false",
        comment: "Hide TOC if no headings are found",
    },
    OptionDefinition {
        name: "debugInConsole",
        kind: OptionKind::Boolean,
        default: "false",
        comment: "Print debug info in the host log",
    },
    OptionDefinition {
        name: "startAt",
        kind: OptionKind::Number,
        default: "0",
        comment: "Skip the first N listed headings",
    },
];

fn table() -> &'static IndexMap<&'static str, OptionDefinition> {
    static TABLE: OnceLock<IndexMap<&'static str, OptionDefinition>> = OnceLock::new();
    TABLE.get_or_init(|| DEFINITIONS.iter().map(|def| (def.name, *def)).collect())
}

/// Finds the definition of an option by its directive name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static OptionDefinition> {
    table().get(name)
}

/// Iterates over every definition in declaration order.
pub fn definitions() -> impl Iterator<Item = &'static OptionDefinition> {
    table().values()
}

/// Documentation template listing every option at its default value.
///
/// Parsing this text yields the default options.
///
/// # Examples
///
/// ```rust
/// let docs = tocdown::options_docs();
/// assert!(docs.starts_with("title: \nstyle: nestedList # TOC style"));
/// ```
#[must_use]
pub fn options_docs() -> String {
    definitions()
        .map(OptionDefinition::docs_line)
        .collect::<Vec<_>>()
        .join("\n")
}
