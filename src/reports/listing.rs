use super::write_heading;
use crate::Result;
use crate::scan::Category;
use core::fmt::Write;

/// Renders the categorized app listing.
pub fn generate<W: Write>(groups: &[(Category, Vec<String>)], use_colors: bool, writer: &mut W) -> Result<()> {
    let total: usize = groups.iter().map(|(_, apps)| apps.len()).sum();
    writeln!(writer, "Found {total} SUSHI Apps:")?;
    writeln!(writer)?;

    for (category, apps) in groups {
        write_heading(writer, &format!("## {category} ({})", apps.len()), use_colors)?;
        for app in apps {
            writeln!(writer, "  - {app}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::categorize;

    #[test]
    fn test_listing_groups_and_counts() {
        let groups = categorize(["FastqcApp", "STARApp", "BWAApp"]);
        let mut out = String::new();
        generate(&groups, false, &mut out).unwrap();

        assert!(out.starts_with("Found 3 SUSHI Apps:"));
        assert!(out.contains("## QC (1)\n  - FastqcApp"));
        assert!(out.contains("## Alignment (2)\n  - STARApp\n  - BWAApp"));
        assert!(!out.contains("## Other"));
    }
}
