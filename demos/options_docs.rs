//! Printing the option reference and the code block templates.
//!
//! Run with: cargo run --example options_docs

use tocdown::codeblock::{codeblock_template, codeblock_template_with_docs};
use tocdown::schema::definitions;

fn main() {
    println!("Empty block:");
    println!("{}\n", codeblock_template());

    println!("Block with every option:");
    println!("{}\n", codeblock_template_with_docs());

    println!("Options:");
    for definition in definitions() {
        println!("  {:<16} default `{}`", definition.name, definition.default);
    }
}
