use regex::Regex;
use std::sync::LazyLock;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Presentation-only grouping of app names for the `list` command.
///
/// Classification never affects extraction; it only drives how the listing is
/// grouped on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Category {
    #[strum(serialize = "Single Cell")]
    SingleCell,

    #[strum(serialize = "QC")]
    Qc,

    Alignment,

    #[strum(serialize = "Variant Calling")]
    VariantCalling,

    #[strum(serialize = "Differential Expression")]
    DifferentialExpression,

    Assembly,

    Other,
}

// Ordered dispatch table: the first matching rule wins, so rule order is part
// of the classification contract.
static RULES: LazyLock<Vec<(Regex, Category)>> = LazyLock::new(|| {
    [
        (r"(?i)^(Sc|SingleCell|CellRanger|Seurat|Velocyto|Space|Xenium|Visium)", Category::SingleCell),
        (r"(?i)(Qc|Fastqc|Stats|Bias)App$", Category::Qc),
        (r"(?i)^(STAR|BWA|Bowtie|Minimap|Pbmm)", Category::Alignment),
        (r"(?i)(Gatk|Mutect|Delly|Haplotype|Vcf)", Category::VariantCalling),
        (r"(?i)^(DESeq|EdgeR|Limma|Diff)", Category::DifferentialExpression),
        (r"(?i)^(Canu|Spades|Hifiasm|Quast|Prokka)", Category::Assembly),
    ]
    .into_iter()
    .map(|(pattern, category)| (Regex::new(pattern).expect("invalid regex"), category))
    .collect()
});

/// Classifies an app name, falling back to [`Category::Other`] when no rule
/// matches.
#[must_use]
pub fn classify(app_name: &str) -> Category {
    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(app_name))
        .map_or(Category::Other, |&(_, category)| category)
}

/// Groups app names by category, preserving the incoming order within each
/// group and dropping empty categories.
#[must_use]
pub fn categorize<I, S>(apps: I) -> Vec<(Category, Vec<String>)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut groups: Vec<(Category, Vec<String>)> = Category::iter().map(|category| (category, Vec::new())).collect();

    for app in apps {
        let app = app.into();
        let category = classify(&app);
        if let Some((_, members)) = groups.iter_mut().find(|(c, _)| *c == category) {
            members.push(app);
        }
    }

    groups.retain(|(_, members)| !members.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_rules() {
        assert_eq!(classify("CellRangerCountApp"), Category::SingleCell);
        assert_eq!(classify("FastqcApp"), Category::Qc);
        assert_eq!(classify("STARApp"), Category::Alignment);
        assert_eq!(classify("GatkHaplotypeApp"), Category::VariantCalling);
        assert_eq!(classify("DESeq2App"), Category::DifferentialExpression);
        assert_eq!(classify("SpadesApp"), Category::Assembly);
        assert_eq!(classify("MergeRunDataApp"), Category::Other);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Matches both the Single Cell prefix rule and the QC suffix rule;
        // the earlier rule takes it.
        assert_eq!(classify("ScFastqcApp"), Category::SingleCell);
    }

    #[test]
    fn test_rules_are_case_insensitive() {
        assert_eq!(classify("fastqcApp"), Category::Qc);
        assert_eq!(classify("starApp"), Category::Alignment);
    }

    #[test]
    fn test_categorize_drops_empty_groups() {
        let groups = categorize(["FastqcApp", "FastqcReportApp"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Category::Qc);
        assert_eq!(groups[0].1, ["FastqcApp"]);
        assert_eq!(groups[1].0, Category::Other);
        assert_eq!(groups[1].1, ["FastqcReportApp"]);
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::SingleCell.to_string(), "Single Cell");
        assert_eq!(Category::Qc.to_string(), "QC");
        assert_eq!(Category::VariantCalling.to_string(), "Variant Calling");
        assert_eq!(Category::Other.to_string(), "Other");
    }
}
