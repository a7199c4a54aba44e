//! Directive text parsing.
//!
//! A directive block holds one `name: value` pair per line:
//!
//! ```text
//! title: ## Contents
//! style: nestedOrderedList  # numbered
//! maxLevel: 3
//! exclude: /^draft/i
//! ```
//!
//! **Rules**:
//! - Lines starting with `#` are comments.
//! - A line must match `^([a-zA-Z0-9._ ]+):(.*)$`; other lines are ignored.
//! - Unknown option names are ignored.
//! - A trailing `# comment` is stripped, except for text and pattern options
//!   which may legitimately contain `#`.
//! - Later lines override earlier lines and host defaults.
//! - The first invalid value aborts parsing with [`Error::InvalidOptionValue`].

use crate::schema::{self, OptionDefinition, OptionKind};
use crate::{Error, Result, Style, TocDefaults, TocOptions};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([a-zA-Z0-9._ ]+):(.*)$").expect("valid directive line regex"))
}

fn trailing_comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#[^#]*$").expect("valid comment regex"))
}

fn pattern_literal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/(.*)/([a-z]*)").expect("valid pattern literal regex"))
}

/// A typed value parsed from one directive line.
#[derive(Clone, Debug)]
pub enum OptionValue {
    Text(String),
    Style(Style),
    Number(usize),
    Flag(bool),
    Pattern(Regex),
}

/// An option assignment parsed from one directive line.
#[derive(Clone, Debug)]
pub struct ParsedOption {
    pub name: &'static str,
    pub value: OptionValue,
}

impl TocOptions {
    /// Assigns a parsed value to the field named by `name`.
    ///
    /// Mismatched name/value pairs are ignored; the parser never produces them.
    pub fn apply(&mut self, option: ParsedOption) {
        match (option.name, option.value) {
            ("title", OptionValue::Text(title)) => self.title = title,
            ("style", OptionValue::Style(style)) => self.style = style,
            ("minLevel", OptionValue::Number(level)) => self.min_level = level,
            ("maxLevel", OptionValue::Number(level)) => self.max_level = level,
            ("startAt", OptionValue::Number(count)) => self.start_at = count,
            ("include", OptionValue::Pattern(pattern)) => self.include = Some(pattern),
            ("exclude", OptionValue::Pattern(pattern)) => self.exclude = Some(pattern),
            ("includeLinks", OptionValue::Flag(flag)) => self.include_links = flag,
            ("hideWhenEmpty", OptionValue::Flag(flag)) => self.hide_when_empty = flag,
            ("debugInConsole", OptionValue::Flag(flag)) => self.debug_in_console = flag,
            (name, value) => log::warn!("ignoring mismatched option {}: {:?}", name, value),
        }
    }
}

/// Parses directive text into options, starting from the built-in defaults.
///
/// # Examples
///
/// ```rust
/// use tocdown::{parse_options, Style};
///
/// let options = parse_options("style: nestedOrderedList\nmaxLevel: 2 # shallow").unwrap();
/// assert_eq!(options.style, Style::NestedOrderedList);
/// assert_eq!(options.max_level, 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOptionValue`] naming the first option whose value
/// does not fit its kind.
pub fn parse_options(source: &str) -> Result<TocOptions> {
    parse_onto(source, TocOptions::default())
}

/// Parses directive text on top of host-persisted defaults.
///
/// # Examples
///
/// ```rust
/// use tocdown::{parse_options_with_defaults, TocDefaults};
///
/// let defaults = TocDefaults {
///     default_title: "## Contents".to_string(),
///     ..Default::default()
/// };
/// let options = parse_options_with_defaults("title: null", &defaults).unwrap();
/// assert_eq!(options.title, "");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOptionValue`] naming the first invalid option.
pub fn parse_options_with_defaults(source: &str, defaults: &TocDefaults) -> Result<TocOptions> {
    parse_onto(source, TocOptions::from_defaults(defaults))
}

fn parse_onto(source: &str, mut options: TocOptions) -> Result<TocOptions> {
    for line in source.split('\n') {
        if let Some(option) = parse_option_line(line)? {
            options.apply(option);
        }
    }
    Ok(options)
}

/// Parses a single directive line.
///
/// Returns `Ok(None)` for comments, non-matching lines, unknown names and
/// pattern options explicitly left empty.
///
/// # Errors
///
/// Returns [`Error::InvalidOptionValue`] when a known option has an invalid value.
pub fn parse_option_line(line: &str) -> Result<Option<ParsedOption>> {
    if line.starts_with('#') {
        return Ok(None);
    }
    let Some(caps) = line_regex().captures(line) else {
        return Ok(None);
    };
    let name = caps[1].trim();
    let Some(definition) = schema::lookup(name) else {
        log::trace!("ignoring unknown option `{}`", name);
        return Ok(None);
    };

    let mut value = caps[2].trim();
    if definition.kind.strips_comments() {
        value = match trailing_comment_regex().find(value) {
            Some(comment) => value[..comment.start()].trim(),
            None => value,
        };
    }

    let parsed = match definition.kind {
        OptionKind::Number => OptionValue::Number(parse_number(definition, value)?),
        OptionKind::Boolean => OptionValue::Flag(parse_flag(definition, value)?),
        OptionKind::Value(allowed) => {
            if !allowed.contains(&value) {
                return Err(Error::invalid_value(definition.name));
            }
            let style = value
                .parse::<Style>()
                .map_err(|_| Error::invalid_value(definition.name))?;
            OptionValue::Style(style)
        }
        OptionKind::String => OptionValue::Text(parse_text(value)),
        OptionKind::Regexp => match parse_pattern(definition, value)? {
            Some(pattern) => OptionValue::Pattern(pattern),
            None => return Ok(None),
        },
    };

    Ok(Some(ParsedOption {
        name: definition.name,
        value: parsed,
    }))
}

/// Reads an optional sign and the leading digits, ignoring anything after them.
///
/// A value without leading digits resolves to 0 and an oversized one
/// saturates; only a negative number is invalid.
fn parse_number(definition: &OptionDefinition, value: &str) -> Result<usize> {
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return Ok(0);
    }
    let number = digits.parse::<usize>().unwrap_or(usize::MAX);
    if negative && number > 0 {
        return Err(Error::invalid_value(definition.name));
    }
    Ok(number)
}

fn parse_flag(definition: &OptionDefinition, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::invalid_value(definition.name)),
    }
}

fn parse_text(value: &str) -> String {
    match value {
        "null" | "\"\"" | "''" => String::new(),
        _ => value.to_string(),
    }
}

fn parse_pattern(definition: &OptionDefinition, value: &str) -> Result<Option<Regex>> {
    if value.is_empty() || value == "null" {
        return Ok(None);
    }
    let invalid = || Error::invalid_value(definition.name);
    let caps = pattern_literal_regex()
        .captures(value)
        .ok_or_else(invalid)?;
    build_pattern(&caps[1], &caps[2])
        .map(Some)
        .map_err(|_| invalid())
}

/// Compiles a `/body/flags` literal.
///
/// `i`, `m` and `s` map onto the matching regex switches; `g`, `y`, `d`, `u`
/// and `v` have no effect on a single match test and are accepted as no-ops.
fn build_pattern(body: &str, flags: &str) -> Result<Regex> {
    let mut builder = RegexBuilder::new(body);
    let mut seen = String::with_capacity(flags.len());
    for flag in flags.chars() {
        if seen.contains(flag) {
            return Err(Error::custom(format!("duplicate pattern flag `{}`", flag)));
        }
        seen.push(flag);
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'g' | 'y' | 'd' | 'u' | 'v' => {}
            other => return Err(Error::custom(format!("unknown pattern flag `{}`", other))),
        }
    }
    builder.build().map_err(Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: &str) -> Result<usize> {
        parse_number(schema::lookup("maxLevel").unwrap(), value)
    }

    #[test]
    fn test_parse_number_leading_digits() {
        assert_eq!(number("3").unwrap(), 3);
        assert_eq!(number("12abc").unwrap(), 12);
        assert_eq!(number("+4").unwrap(), 4);
        assert_eq!(number("-0").unwrap(), 0);
    }

    #[test]
    fn test_parse_number_rejects_negative() {
        assert_eq!(number("-1"), Err(Error::invalid_value("maxLevel")));
        assert_eq!(number("-99999999999999999999999"), Err(Error::invalid_value("maxLevel")));
    }

    #[test]
    fn test_parse_number_without_digits_is_zero() {
        assert_eq!(number(""), Ok(0));
        assert_eq!(number("abc"), Ok(0));
        assert_eq!(number("-"), Ok(0));
        assert_eq!(number("-abc"), Ok(0));
    }

    #[test]
    fn test_parse_number_saturates() {
        assert_eq!(number("99999999999999999999999"), Ok(usize::MAX));
    }

    #[test]
    fn test_parse_text_sentinels() {
        assert_eq!(parse_text("null"), "");
        assert_eq!(parse_text("\"\""), "");
        assert_eq!(parse_text("''"), "");
        assert_eq!(parse_text("'x'"), "'x'");
    }

    #[test]
    fn test_build_pattern_flags() {
        let pattern = build_pattern("title", "gi").unwrap();
        assert!(pattern.is_match("TITLE"));

        let pattern = build_pattern("^b", "m").unwrap();
        assert!(pattern.is_match("a\nb"));

        assert!(build_pattern("x", "ii").is_err());
        assert!(build_pattern("x", "q").is_err());
        assert!(build_pattern("[", "").is_err());
    }

    #[test]
    fn test_comment_line_is_skipped() {
        assert!(parse_option_line("# maxLevel: -1").unwrap().is_none());
    }

    #[test]
    fn test_line_without_colon_is_skipped() {
        assert!(parse_option_line("just some words").unwrap().is_none());
        assert!(parse_option_line("").unwrap().is_none());
    }

    #[test]
    fn test_apply_ignores_mismatched_value() {
        let mut options = TocOptions::new();
        options.apply(ParsedOption {
            name: "maxLevel",
            value: OptionValue::Flag(true),
        });
        assert_eq!(options.max_level, 0);
    }
}
