//! Rendering a table of contents for a markdown document in every style.
//!
//! Run with: cargo run --example render

use std::error::Error;
use tocdown::codeblock::render_codeblock;
use tocdown::{extract_headings, parse_options, render, Style, TocDefaults};

const DOCUMENT: &str = "\
# Getting started

Some introduction.

## Installation

```sh
# not a heading
cargo install tocdown
```

## First steps [[guide|Guide]]

# Reference

## Options #config

### Draft notes

# FAQ
";

fn main() -> Result<(), Box<dyn Error>> {
    let headings = extract_headings(DOCUMENT);

    for style in Style::ALL {
        println!("{}:", style);
        let options = parse_options(&format!("style: {}\nexclude: /draft/i", style))?;
        println!("{}\n", render(&headings, &options));
    }

    // Host-level defaults, then a per-block override
    let defaults = TocDefaults {
        default_title: "**Contents**".to_string(),
        default_max_level: 2,
        ..Default::default()
    };
    println!("With defaults:");
    println!("{}\n", render_codeblock("includeLinks: false", &headings, Some(&defaults)));

    // Invalid directives render as a message instead of failing
    println!("Invalid directive:");
    println!("{}", render_codeblock("maxLevel: -1", &headings, None));

    Ok(())
}
