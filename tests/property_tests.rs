//! Property-based tests over generated outlines and directive text.

use proptest::prelude::*;
use regex::Regex;
use tocdown::{parse_options, render, Heading, Renderer, Style, TocOptions};

fn outline() -> impl Strategy<Value = Vec<Heading>> {
    prop::collection::vec((1usize..=6, "[a-z]{1,8}"), 0..24)
        .prop_map(|pairs| pairs.into_iter().map(|(level, text)| Heading::new(level, text)).collect())
}

fn style() -> impl Strategy<Value = Style> {
    prop::sample::select(Style::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_text_without_directives_keeps_defaults(source in "[^:\n]{0,80}") {
        let options = parse_options(&source).unwrap();
        let defaults = TocOptions::default();
        prop_assert_eq!(options.style, defaults.style);
        prop_assert_eq!(options.title, defaults.title);
        prop_assert_eq!(options.max_level, defaults.max_level);
        prop_assert!(options.include_links);
    }

    #[test]
    fn prop_parse_never_panics(source in any::<String>()) {
        let _ = parse_options(&source);
    }

    #[test]
    fn prop_render_never_panics(
        headings in outline(),
        style in style(),
        min_level in 0usize..8,
        max_level in 0usize..8,
        start_at in 0usize..5,
    ) {
        let options = TocOptions::new()
            .with_style(style)
            .with_min_level(min_level)
            .with_max_level(max_level)
            .with_start_at(start_at);
        let _ = render(&headings, &options);
    }

    #[test]
    fn prop_shallowest_heading_is_not_indented(headings in outline()) {
        let options = TocOptions::new().with_include_links(false);
        let lines = Renderer::new(&options).lines(&headings);
        prop_assert_eq!(lines.len(), headings.len());
        if let Some(shallowest) = lines.iter().map(|line| line.depth).min() {
            prop_assert_eq!(shallowest, 0);
        }
    }

    #[test]
    fn prop_level_window_is_respected(
        headings in outline(),
        min_level in 1usize..=6,
        max_level in 1usize..=6,
    ) {
        let options = TocOptions::new()
            .with_include_links(false)
            .with_min_level(min_level)
            .with_max_level(max_level);
        let lines = Renderer::new(&options).lines(&headings);
        let expected = headings
            .iter()
            .filter(|heading| heading.level >= min_level && heading.level <= max_level)
            .count();
        prop_assert_eq!(lines.len(), expected);
        for line in &lines {
            prop_assert!(line.depth <= max_level.saturating_sub(min_level));
        }
    }

    #[test]
    fn prop_excluded_sections_are_hidden(headings in outline()) {
        let options = TocOptions::new()
            .with_include_links(false)
            .with_exclude(Regex::new("^a").unwrap());
        let lines = Renderer::new(&options).lines(&headings);

        prop_assert!(lines.iter().all(|line| !line.label.starts_with('a')));

        // Every surviving heading has no excluded ancestor.
        let mut hidden_below: Option<usize> = None;
        let mut expected = Vec::new();
        for heading in &headings {
            if let Some(level) = hidden_below {
                if heading.level > level {
                    continue;
                }
                hidden_below = None;
            }
            if heading.text.starts_with('a') {
                hidden_below = Some(heading.level);
                continue;
            }
            expected.push(heading.text.clone());
        }
        let labels: Vec<_> = lines.into_iter().map(|line| line.label).collect();
        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn prop_detailed_numbers_are_consecutive(headings in outline()) {
        let options = TocOptions::new()
            .with_include_links(false)
            .with_style(Style::NestedDetailedOrderedList);
        let lines = Renderer::new(&options).lines(&headings);

        let mut next_top = 1;
        for line in &lines {
            prop_assert!(line.marker.ends_with('.'));
            let numbers: Vec<usize> = line
                .marker
                .trim_end_matches('.')
                .split('.')
                .map(|part| part.parse().unwrap())
                .collect();
            prop_assert!(numbers.iter().all(|&n| n >= 1));
            prop_assert!(numbers.len() <= line.depth + 1);
            if line.depth == 0 {
                prop_assert_eq!(numbers.clone(), vec![next_top]);
                next_top += 1;
            }
        }
    }

    #[test]
    fn prop_hide_when_empty_never_shows_notice(headings in outline(), style in style()) {
        let options = TocOptions::new()
            .with_style(style)
            .with_hide_when_empty(true)
            .with_min_level(7);
        prop_assert_eq!(render(&headings, &options), "");
    }
}
