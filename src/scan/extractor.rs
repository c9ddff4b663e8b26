//! The field rules that recover [`AppMetadata`] from raw file text.
//!
//! Every rule scans the full text independently and none depends on another
//! rule's success. A rule that finds nothing leaves its field at the default,
//! so [`extract`] never fails, no matter how malformed the input is.

use crate::scan::AppMetadata;
use camino::Utf8Path;
use regex::Regex;
use std::sync::LazyLock;

// Scalar attribute assignments, single or double quoted. First match wins.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"@name\s*=\s*['"]([^'"]+)['"]"#).expect("invalid regex"));
static ANALYSIS_CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@analysis_category\s*=\s*['"]([^'"]+)['"]"#).expect("invalid regex"));
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@description\s*=\s*['"]([^'"]+)['"]"#).expect("invalid regex"));
static PROCESS_MODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@process_mode\s*=\s*['"]([^'"]+)['"]"#).expect("invalid regex"));

// Legacy alias: @params['process_mode'] promoted to the top-level field.
static PROCESS_MODE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@params\s*\[\s*['"]process_mode['"]\s*\]\s*=\s*['"]([^'"]+)['"]"#).expect("invalid regex"));

// Heredoc opener for @description; the terminator is located by hand since
// the regex crate has no backreferences.
static DESCRIPTION_HEREDOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@description\s*=\s*<<[-~]?(\w+)").expect("invalid regex"));

// Bracketed list assignments. `[^\]]` deliberately matches newlines so a
// list split across lines is still captured as one span.
static REQUIRED_COLUMNS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@required_columns\s*=\s*\[([^\]]+)\]").expect("invalid regex"));
static REQUIRED_PARAMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@required_params\s*=\s*\[([^\]]+)\]").expect("invalid regex"));
static MODULES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@modules\s*=\s*\[([^\]]+)\]").expect("invalid regex"));
static INHERIT_COLUMNS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@inherit_columns\s*=\s*\[([^\]]+)\]").expect("invalid regex"));
static INHERIT_TAGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@inherit_tags\s*=\s*\[([^\]]+)\]").expect("invalid regex"));

// Quoted literals inside a list span, left to right.
static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).expect("invalid regex"));

// Single-bare-key parameter assignments; the value is the rest of the line.
// Context entries like @params['ram', 'description'] have a comma before the
// closing bracket and never match this shape.
static PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)@params\s*\[\s*['"](\w+)['"]\s*\]\s*=\s*(.+)$"#).expect("invalid regex"));

static EZRUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"run_RApp\s*\(\s*['"]([^'"]+)['"]"#).expect("invalid regex"));

static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*def\s+(\w+)").expect("invalid regex"));

/// Recovers an [`AppMetadata`] record from the raw text of a definition file.
///
/// Pure and idempotent: identical input always yields an identical record.
/// Unmatched fields stay at their defaults; there is no failure mode.
#[must_use]
pub fn extract(text: &str, class_name: &str, file_path: &Utf8Path) -> AppMetadata {
    let mut meta = AppMetadata::new(class_name, file_path);

    meta.name = first_capture(&NAME_RE, text);
    meta.analysis_category = first_capture(&ANALYSIS_CATEGORY_RE, text);

    // Heredoc blocks must be tried before the quoted-literal fallback: the
    // fallback could otherwise match an unrelated literal inside the block.
    meta.description = heredoc_description(text).or_else(|| first_capture(&DESCRIPTION_RE, text));

    meta.process_mode = first_capture(&PROCESS_MODE_RE, text).or_else(|| first_capture(&PROCESS_MODE_PARAM_RE, text));

    meta.required_columns = list_items(&REQUIRED_COLUMNS_RE, text);
    meta.required_params = list_items(&REQUIRED_PARAMS_RE, text);
    meta.modules = list_items(&MODULES_RE, text);
    meta.inherit_columns = list_items(&INHERIT_COLUMNS_RE, text);
    meta.inherit_tags = list_items(&INHERIT_TAGS_RE, text);

    // Sequential upsert: a key assigned twice keeps the later value.
    for caps in PARAM_RE.captures_iter(text) {
        let _ = meta.params.insert(caps[1].to_owned(), caps[2].trim().to_owned());
    }

    meta.ezrun_app = first_capture(&EZRUN_RE, text);

    meta.methods = METHOD_RE.captures_iter(text).map(|caps| caps[1].to_owned()).collect();

    meta
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].to_owned())
}

fn list_items(re: &Regex, text: &str) -> Vec<String> {
    re.captures(text)
        .map(|caps| {
            QUOTED_RE
                .captures_iter(caps.get(1).map_or("", |span| span.as_str()))
                .map(|item| item[1].to_owned())
                .collect()
        })
        .unwrap_or_default()
}

/// Extracts a heredoc-style `@description` block: the opener names a delimiter
/// token and the block runs until the first line whose content, leading
/// whitespace aside, restates that token. The interior is returned trimmed.
fn heredoc_description(text: &str) -> Option<String> {
    let caps = DESCRIPTION_HEREDOC_RE.captures(text)?;
    let delimiter = caps.get(1)?.as_str();
    let after_opener = &text[caps.get(0)?.end()..];

    // The block body starts on the line after the opener.
    let (_, body) = after_opener.split_once('\n')?;

    let mut interior_len = 0;
    let mut terminated = false;
    for line in body.split_inclusive('\n') {
        if line.trim_start().starts_with(delimiter) {
            terminated = true;
            break;
        }
        interior_len += line.len();
    }

    terminated.then(|| body[..interior_len].trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;

    fn extract_text(text: &str) -> AppMetadata {
        extract(text, "TestApp", Utf8Path::new("/lib/TestApp.rb"))
    }

    const FASTQC_SNIPPET: &str = r"
class FastqcApp < SushiFabric::SushiApp
  def initialize
    super
    @name = 'FASTQC'
    @analysis_category = 'QC'
    @description = <<-EOS
A quality control tool for NGS reads.<br/>
<a href='https://example.org/fastqc'>FastQC</a>
EOS
    @required_columns = ['Name', 'Read1']
    @required_params = ['name', 'paired']
    @params['process_mode'] = 'DATASET'
    @params['cores'] = '8'
    @params['ram'] = '30'
    @params['ram', 'description'] = 'GB'
    @modules = ['Dev/R', 'QC/FastQC']
    @inherit_columns = ['Order Id']
    @inherit_tags = ['Factor', 'B-Fabric']
  end

  def next_dataset
  end

  def commands
    run_RApp('EzAppFastqc')
  end
end
";

    #[test]
    fn test_scalar_fields() {
        let meta = extract_text(FASTQC_SNIPPET);
        assert_eq!(meta.name.as_deref(), Some("FASTQC"));
        assert_eq!(meta.analysis_category.as_deref(), Some("QC"));
        assert_eq!(meta.process_mode.as_deref(), Some("DATASET"));
        assert_eq!(meta.ezrun_app.as_deref(), Some("EzAppFastqc"));
    }

    #[test]
    fn test_class_name_and_path_are_pass_through() {
        let meta = extract_text("");
        assert_eq!(meta.class_name, "TestApp");
        assert_eq!(meta.file_path, Utf8Path::new("/lib/TestApp.rb"));
    }

    #[test]
    fn test_absent_fields_are_none_not_empty() {
        let meta = extract_text("class EmptyApp\nend\n");
        assert_eq!(meta.analysis_category, None);
        assert_ne!(meta.analysis_category.as_deref(), Some(""));
        assert_eq!(meta.name, None);
        assert_eq!(meta.description, None);
        assert_eq!(meta.process_mode, None);
        assert_eq!(meta.ezrun_app, None);
    }

    #[test]
    fn test_absent_collections_are_empty() {
        let meta = extract_text("");
        assert!(meta.required_columns.is_empty());
        assert!(meta.required_params.is_empty());
        assert!(meta.modules.is_empty());
        assert!(meta.inherit_columns.is_empty());
        assert!(meta.inherit_tags.is_empty());
        assert!(meta.params.is_empty());
        assert!(meta.methods.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_text(FASTQC_SNIPPET);
        let second = extract_text(FASTQC_SNIPPET);
        assert_eq!(first, second);
    }

    #[test]
    fn test_double_quoted_scalars() {
        let meta = extract_text("@name = \"STAR\"\n@analysis_category = \"Alignment\"\n");
        assert_eq!(meta.name.as_deref(), Some("STAR"));
        assert_eq!(meta.analysis_category.as_deref(), Some("Alignment"));
    }

    #[test]
    fn test_first_scalar_assignment_wins() {
        let meta = extract_text("@name = 'First'\n@name = 'Second'\n");
        assert_eq!(meta.name.as_deref(), Some("First"));
    }

    #[test]
    fn test_list_order_preserved() {
        let meta = extract_text("@required_columns = ['Name', 'Read1', 'Read2']\n");
        assert_eq!(meta.required_columns, ["Name", "Read1", "Read2"]);
    }

    #[test]
    fn test_list_spanning_multiple_lines() {
        let meta = extract_text("@modules = ['Dev/R',\n            'Aligner/STAR',\n            'Tools/samtools']\n");
        assert_eq!(meta.modules, ["Dev/R", "Aligner/STAR", "Tools/samtools"]);
    }

    #[test]
    fn test_list_duplicates_preserved() {
        let meta = extract_text("@required_columns = ['Name', 'Name']\n");
        assert_eq!(meta.required_columns, ["Name", "Name"]);
    }

    #[test]
    fn test_heredoc_description_multiline_trimmed() {
        let meta = extract_text(FASTQC_SNIPPET);
        assert_eq!(
            meta.description.as_deref(),
            Some("A quality control tool for NGS reads.<br/>\n<a href='https://example.org/fastqc'>FastQC</a>")
        );
    }

    #[test]
    fn test_heredoc_with_blank_edge_lines() {
        let meta = extract_text("@description = <<-EOS\n\nLine one.\nLine two.\n\nEOS\n");
        assert_eq!(meta.description.as_deref(), Some("Line one.\nLine two."));
    }

    #[test]
    fn test_heredoc_squiggly_and_indented_terminator() {
        let meta = extract_text("@description = <<~DESC\nIndented heredoc body.\n    DESC\n");
        assert_eq!(meta.description.as_deref(), Some("Indented heredoc body."));
    }

    #[test]
    fn test_unterminated_heredoc_leaves_description_absent() {
        let meta = extract_text("@description = <<-EOS\nnever closed\nother_line\n");
        // No terminator line and no quoted assignment either, so the field
        // degrades to absent rather than erroring.
        assert_eq!(meta.description, None);
    }

    #[test]
    fn test_single_line_quoted_description() {
        let meta = extract_text("@description = 'Counts reads per gene.'\n");
        assert_eq!(meta.description.as_deref(), Some("Counts reads per gene."));
    }

    #[test]
    fn test_params_map_captures_rest_of_line() {
        let meta = extract_text(FASTQC_SNIPPET);
        assert_eq!(meta.params.get("cores").map(String::as_str), Some("'8'"));
        assert_eq!(meta.params.get("ram").map(String::as_str), Some("'30'"));
    }

    #[test]
    fn test_params_last_occurrence_wins() {
        let meta = extract_text("@params['cores'] = '4'\n@params['cores'] = '16'\n");
        assert_eq!(meta.params.get("cores").map(String::as_str), Some("'16'"));
    }

    #[test]
    fn test_params_context_entries_skipped() {
        let meta = extract_text("@params['ram'] = '30'\n@params['ram', 'description'] = 'GB'\n@params['ram', 'context'] = 'slurm'\n");
        assert_eq!(meta.params.len(), 1);
        assert_eq!(meta.params.get("ram").map(String::as_str), Some("'30'"));
    }

    #[test]
    fn test_process_mode_promoted_from_params() {
        let meta = extract_text("@params['process_mode'] = 'SAMPLE'\n");
        assert_eq!(meta.process_mode.as_deref(), Some("SAMPLE"));
        // The promoted alias still shows up as an ordinary parameter entry.
        assert_eq!(meta.params.get("process_mode").map(String::as_str), Some("'SAMPLE'"));
    }

    #[test]
    fn test_direct_process_mode_beats_params_alias() {
        let meta = extract_text("@process_mode = 'DATASET'\n@params['process_mode'] = 'SAMPLE'\n");
        assert_eq!(meta.process_mode.as_deref(), Some("DATASET"));
    }

    #[test]
    fn test_methods_in_declaration_order_with_duplicates() {
        let meta = extract_text("def initialize\nend\n  def next_dataset\n  end\n  def commands\n  end\n  def commands\n  end\n");
        assert_eq!(meta.methods, ["initialize", "next_dataset", "commands", "commands"]);
    }

    #[test]
    fn test_def_must_start_a_line() {
        let meta = extract_text("x = \"def not_a_method\"; helper def_like\n");
        assert!(meta.methods.is_empty());
    }

    #[test]
    fn test_end_to_end_columns_and_modules() {
        let meta = extract_text("@required_columns = ['Name', 'Read1']\n@modules = ['Dev/R']\n");
        assert_eq!(meta.required_columns, ["Name", "Read1"]);
        assert_eq!(meta.modules, ["Dev/R"]);
    }

    #[test]
    fn test_fixture_methods() {
        let meta = extract_text(FASTQC_SNIPPET);
        assert_eq!(meta.methods, ["initialize", "next_dataset", "commands"]);
    }
}
