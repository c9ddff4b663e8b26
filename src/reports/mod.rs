//! Console rendering of scan results.
//!
//! Three renderers, each behind a `generate` function writing into any
//! [`core::fmt::Write`] sink so output is equally easy to print or to assert
//! on in tests:
//!
//! - **structure**: the full field-by-field report for one app
//! - **comparison**: the two-column difference report for a pair of apps
//! - **listing**: the categorized directory listing
//!
//! The text itself is Markdown-flavored, matching what downstream tooling
//! already consumes; `use_colors` only adds terminal bolding to headings.

mod comparison;
mod listing;
mod structure;

pub use comparison::generate as generate_comparison;
pub use listing::generate as generate_listing;
pub use structure::generate as generate_structure;

use core::fmt::Write;
use owo_colors::OwoColorize;

/// Writes a `#`/`##` heading, bolded when colors are on.
fn write_heading<W: Write>(writer: &mut W, heading: &str, use_colors: bool) -> core::fmt::Result {
    if use_colors {
        writeln!(writer, "{}", heading.bold())
    } else {
        writeln!(writer, "{heading}")
    }
}

/// Renders a collection as `- item` bullets, or `None` when empty.
fn write_bullets<'a, W: Write>(writer: &mut W, items: impl IntoIterator<Item = &'a String>) -> core::fmt::Result {
    let mut any = false;
    for item in items {
        any = true;
        writeln!(writer, "- {item}")?;
    }
    if !any {
        writeln!(writer, "None")?;
    }
    Ok(())
}

/// Comma-joined set contents, or `None` when empty.
fn join_or_none<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let mut joined = items.into_iter().fold(String::new(), |mut acc, item| {
        acc.push_str(item);
        acc.push_str(", ");
        acc
    });
    if joined.is_empty() {
        "None".to_owned()
    } else {
        joined.truncate(joined.len() - 2);
        joined
    }
}
