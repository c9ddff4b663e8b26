use super::{join_or_none, write_heading};
use crate::Result;
use crate::diff::{Comparison, SetDiff};
use core::fmt::Write;

/// Renders the two-column difference report for a compared pair of apps.
pub fn generate<W: Write>(diff: &Comparison, use_colors: bool, writer: &mut W) -> Result<()> {
    let left = diff.left_app.as_str();
    let right = diff.right_app.as_str();

    write_heading(writer, &format!("# Comparison: {left} vs {right}"), use_colors)?;
    writeln!(writer)?;

    write_heading(writer, "## Basic Info", use_colors)?;
    writeln!(writer, "| Property | {left} | {right} |")?;
    writeln!(writer, "|----------|-------------|-------------|")?;
    write_scalar_row(writer, "Name", &diff.name)?;
    write_scalar_row(writer, "Category", &diff.analysis_category)?;
    write_scalar_row(writer, "Process Mode", &diff.process_mode)?;
    write_scalar_row(writer, "ezRun App", &diff.ezrun_app)?;
    writeln!(writer)?;

    write_collection_section(
        writer,
        "## Required Columns",
        &diff.required_columns,
        "Both apps have identical required columns",
        diff,
        use_colors,
    )?;
    write_collection_section(
        writer,
        "## Required Parameters",
        &diff.required_params,
        "Both apps have identical required parameters",
        diff,
        use_colors,
    )?;
    write_collection_section(writer, "## Modules", &diff.modules, "Both apps use identical modules", diff, use_colors)?;
    write_collection_section(
        writer,
        "## Inherited Columns",
        &diff.inherit_columns,
        "Both apps inherit identical columns",
        diff,
        use_colors,
    )?;
    write_collection_section(
        writer,
        "## Inherited Tags",
        &diff.inherit_tags,
        "Both apps inherit identical tags",
        diff,
        use_colors,
    )?;

    // Parameters are compared by key only, and the identical case doesn't
    // enumerate them since the list can be long.
    write_heading(writer, "## Parameters", use_colors)?;
    if diff.params.is_identical() {
        writeln!(writer, "Both apps have the same parameter keys.")?;
    } else {
        writeln!(writer, "- **Common**: {} parameters", diff.params.common.len())?;
        writeln!(writer, "- **Only in {left}**: {}", join_or_none(&diff.params.only_in_left))?;
        writeln!(writer, "- **Only in {right}**: {}", join_or_none(&diff.params.only_in_right))?;
    }
    writeln!(writer)?;

    write_heading(writer, "## Methods", use_colors)?;
    if diff.methods.is_identical() {
        writeln!(writer, "Both apps define the same methods: {}", join_or_none(&diff.methods.common))?;
    } else {
        writeln!(writer, "- **Common**: {}", join_or_none(&diff.methods.common))?;
        writeln!(writer, "- **Only in {left}**: {}", join_or_none(&diff.methods.only_in_left))?;
        writeln!(writer, "- **Only in {right}**: {}", join_or_none(&diff.methods.only_in_right))?;
    }

    Ok(())
}

fn write_scalar_row<W: Write>(writer: &mut W, property: &str, pair: &(Option<String>, Option<String>)) -> Result<()> {
    writeln!(
        writer,
        "| {property} | {} | {} |",
        pair.0.as_deref().unwrap_or("N/A"),
        pair.1.as_deref().unwrap_or("N/A")
    )?;
    Ok(())
}

fn write_collection_section<W: Write>(
    writer: &mut W,
    heading: &str,
    set_diff: &SetDiff,
    identical_label: &str,
    diff: &Comparison,
    use_colors: bool,
) -> Result<()> {
    write_heading(writer, heading, use_colors)?;
    if set_diff.is_identical() {
        writeln!(writer, "{identical_label}: {}", join_or_none(&set_diff.common))?;
    } else {
        writeln!(writer, "- **Common**: {}", join_or_none(&set_diff.common))?;
        writeln!(writer, "- **Only in {}**: {}", diff.left_app, join_or_none(&set_diff.only_in_left))?;
        writeln!(writer, "- **Only in {}**: {}", diff.right_app, join_or_none(&set_diff.only_in_right))?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare;
    use crate::scan::AppMetadata;
    use camino::Utf8Path;

    fn record(class_name: &str) -> AppMetadata {
        AppMetadata::new(class_name, Utf8Path::new("/lib").join(format!("{class_name}.rb")))
    }

    #[test]
    fn test_report_groups_differences() {
        let mut left = record("FastqcApp");
        let mut right = record("Fastqc2App");
        left.required_columns = vec!["Name".to_owned(), "Read1".to_owned()];
        right.required_columns = vec!["Name".to_owned(), "Read2".to_owned()];
        left.modules = vec!["Dev/R".to_owned()];
        right.modules = vec!["Dev/R".to_owned()];

        let mut out = String::new();
        generate(&compare(&left, &right), false, &mut out).unwrap();

        assert!(out.starts_with("# Comparison: FastqcApp vs Fastqc2App"));
        assert!(out.contains("- **Common**: Name"));
        assert!(out.contains("- **Only in FastqcApp**: Read1"));
        assert!(out.contains("- **Only in Fastqc2App**: Read2"));
        assert!(out.contains("Both apps use identical modules: Dev/R"));
    }

    #[test]
    fn test_report_shows_na_for_absent_scalars() {
        let mut left = record("AApp");
        let right = record("BApp");
        left.analysis_category = Some("QC".to_owned());

        let mut out = String::new();
        generate(&compare(&left, &right), false, &mut out).unwrap();

        assert!(out.contains("| Category | QC | N/A |"));
    }

    #[test]
    fn test_identical_params_render_one_line() {
        let mut left = record("AApp");
        let mut right = record("BApp");
        let _ = left.params.insert("cores".to_owned(), "'8'".to_owned());
        let _ = right.params.insert("cores".to_owned(), "'16'".to_owned());

        let mut out = String::new();
        generate(&compare(&left, &right), false, &mut out).unwrap();

        // Key sets match even though the values differ.
        assert!(out.contains("Both apps have the same parameter keys."));
    }
}
