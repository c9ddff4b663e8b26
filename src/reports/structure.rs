use super::{write_bullets, write_heading};
use crate::Result;
use crate::scan::AppMetadata;
use core::fmt::Write;

/// Renders the field-by-field structure report for one app.
pub fn generate<W: Write>(meta: &AppMetadata, use_colors: bool, writer: &mut W) -> Result<()> {
    write_heading(writer, &format!("# {} Structure Analysis", meta.class_name), use_colors)?;
    writeln!(writer)?;

    write_heading(writer, "## Basic Info", use_colors)?;
    writeln!(writer, "- **Name**: {}", meta.name.as_deref().unwrap_or("N/A"))?;
    writeln!(writer, "- **Category**: {}", meta.analysis_category.as_deref().unwrap_or("N/A"))?;
    writeln!(writer, "- **Process Mode**: {}", meta.process_mode.as_deref().unwrap_or("N/A"))?;
    writeln!(writer, "- **ezRun App**: {}", meta.ezrun_app.as_deref().unwrap_or("N/A"))?;
    writeln!(writer, "- **File**: {}", meta.file_path)?;
    writeln!(writer)?;

    write_heading(writer, "## Description", use_colors)?;
    writeln!(writer, "{}", meta.description.as_deref().unwrap_or("No description"))?;
    writeln!(writer)?;

    write_heading(writer, "## Required Columns", use_colors)?;
    write_bullets(writer, &meta.required_columns)?;
    writeln!(writer)?;

    write_heading(writer, "## Required Parameters", use_colors)?;
    write_bullets(writer, &meta.required_params)?;
    writeln!(writer)?;

    write_heading(writer, "## Parameters", use_colors)?;
    if meta.params.is_empty() {
        writeln!(writer, "No parameters defined")?;
    } else {
        for (key, value) in &meta.params {
            writeln!(writer, "- **{key}**: {value}")?;
        }
    }
    writeln!(writer)?;

    write_heading(writer, "## Modules", use_colors)?;
    write_bullets(writer, &meta.modules)?;
    writeln!(writer)?;

    write_heading(writer, "## Inherited Columns", use_colors)?;
    write_bullets(writer, &meta.inherit_columns)?;
    writeln!(writer)?;

    write_heading(writer, "## Inherited Tags", use_colors)?;
    write_bullets(writer, &meta.inherit_tags)?;
    writeln!(writer)?;

    write_heading(writer, "## Methods", use_colors)?;
    write_bullets(writer, &meta.methods)?;

    Ok(())
}
