//! Scaffold generation for new App definitions.
//!
//! Emits a complete, ready-to-edit App definition file, either from built-in
//! defaults or seeded from an existing app's extracted record. The output is
//! text assembly only; nothing here re-parses what it writes.

use crate::scan::AppMetadata;

/// Derived naming for a new app: class name, display name, and the matching
/// ezRun entry point.
#[derive(Debug, Clone)]
pub struct TemplateSpec {
    pub class_name: String,
    pub app_name: String,
    pub ezrun_name: String,
    pub category: String,
}

impl TemplateSpec {
    /// Normalizes a requested app name: any trailing `App` (case-insensitive)
    /// is stripped, then the canonical suffix and ezRun prefix are applied.
    #[must_use]
    pub fn new(requested_name: &str, category: &str) -> Self {
        let lower = requested_name.to_lowercase();
        let base = if lower.ends_with("app") {
            &requested_name[..requested_name.len() - 3]
        } else {
            requested_name
        };

        Self {
            class_name: format!("{base}App"),
            app_name: base.to_owned(),
            ezrun_name: format!("EzApp{base}"),
            category: category.to_owned(),
        }
    }
}

/// Generates the generic scaffold with built-in defaults.
#[must_use]
pub fn generic(spec: &TemplateSpec) -> String {
    let TemplateSpec {
        class_name,
        app_name,
        ezrun_name,
        category,
    } = spec;

    format!(
        r"#!/usr/bin/env ruby
# encoding: utf-8

require 'sushi_fabric'
require_relative 'global_variables'
include GlobalVariables

class {class_name} < SushiFabric::SushiApp
  def initialize
    super
    @name = '{app_name}'
    @params['process_mode'] = 'DATASET'  # or 'SAMPLE' for per-sample processing
    @analysis_category = '{category}'
    @description = <<-EOS
Description of what this app does.<br/>
Add links to documentation if available.
EOS

    # Required input columns from dataset
    @required_columns = ['Name', 'Read1']

    # Required parameters that must be set
    @required_params = ['name']

    # Computational resources
    @params['cores'] = [8, 1, 2, 4, 8, 16]
    @params['cores', 'context'] = 'slurm'
    @params['ram'] = [30, 15, 62]
    @params['ram', 'description'] = 'GB'
    @params['ram', 'context'] = 'slurm'
    @params['scratch'] = [100, 50, 200]
    @params['scratch', 'description'] = 'GB'
    @params['scratch', 'context'] = 'slurm'

    # App-specific parameters
    @params['name'] = '{app_name}_Result'
    @params['mail'] = ''

    # Environment modules to load
    @modules = ['Dev/R']

    # Columns/tags to inherit from input dataset
    @inherit_columns = ['Order Id']
    @inherit_tags = ['Factor', 'B-Fabric']
  end

  def set_default_parameters
    # Set defaults based on input dataset
  end

  def preprocess
    # Modify state before job submission
  end

  def next_dataset
    report_dir = File.join(@result_dir, @params['name'])
    {{
      'Name' => @params['name'],
      'Report [Link]' => File.join(report_dir, '00index.html'),
      'Result [File]' => report_dir
    }}.merge(extract_columns(colnames: @inherit_columns))
  end

  def commands
    run_RApp('{ezrun_name}')
  end
end

# For CLI testing:
if __FILE__ == $0
  usecase = {class_name}.new
  usecase.project = 'p1001'
  usecase.user = 'developer'
  usecase.dataset_tsv_file = 'input_dataset.tsv'
  # usecase.run
end
"
    )
}

/// Generates a scaffold pre-populated from a base app's extracted record.
#[must_use]
pub fn from_base(spec: &TemplateSpec, base: &AppMetadata) -> String {
    let TemplateSpec {
        class_name,
        app_name,
        ezrun_name,
        ..
    } = spec;

    let process_mode = base.process_mode.as_deref().unwrap_or("DATASET");
    let category = base.analysis_category.as_deref().unwrap_or("Other");
    let base_summary = base
        .description
        .as_deref()
        .and_then(|d| d.lines().next())
        .map_or("N/A", str::trim);

    let required_columns = quote_join(&base.required_columns);
    let required_params = quote_join(&base.required_params);
    let inherit_columns = quote_join(&base.inherit_columns);
    let modules = if base.modules.is_empty() {
        "'Dev/R'".to_owned()
    } else {
        quote_join(&base.modules)
    };

    let cores = base.params.get("cores").map_or("[8, 1, 2, 4, 8]", String::as_str);
    let ram = base.params.get("ram").map_or("[30, 15, 62]", String::as_str);
    let scratch = base.params.get("scratch").map_or("[100, 50, 200]", String::as_str);

    format!(
        r"#!/usr/bin/env ruby
# encoding: utf-8
# Based on: {base_class}

require 'sushi_fabric'
require_relative 'global_variables'
include GlobalVariables

class {class_name} < SushiFabric::SushiApp
  def initialize
    super
    @name = '{app_name}'
    @params['process_mode'] = '{process_mode}'
    @analysis_category = '{category}'
    @description = <<-EOS
TODO: Add description for {app_name}
Based on {base_class}: {base_summary}
EOS

    @required_columns = [{required_columns}]
    @required_params = [{required_params}]

    # Computational resources (from {base_class})
    @params['cores'] = {cores}
    @params['cores', 'context'] = 'slurm'
    @params['ram'] = {ram}
    @params['ram', 'description'] = 'GB'
    @params['ram', 'context'] = 'slurm'
    @params['scratch'] = {scratch}
    @params['scratch', 'description'] = 'GB'
    @params['scratch', 'context'] = 'slurm'

    @params['name'] = '{app_name}_Result'
    @params['mail'] = ''

    @modules = [{modules}]
    @inherit_columns = [{inherit_columns}]
  end

  def set_default_parameters
  end

  def preprocess
  end

  def next_dataset
    report_dir = File.join(@result_dir, @params['name'])
    {{
      'Name' => @params['name'],
      'Report [Link]' => File.join(report_dir, '00index.html'),
      'Result [File]' => report_dir
    }}.merge(extract_columns(colnames: @inherit_columns))
  end

  def commands
    run_RApp('{ezrun_name}')
  end
end

if __FILE__ == $0
  usecase = {class_name}.new
  usecase.project = 'p1001'
  usecase.user = 'developer'
  usecase.dataset_tsv_file = 'input_dataset.tsv'
  # usecase.run
end
",
        base_class = base.class_name,
    )
}

fn quote_join(items: &[String]) -> String {
    items.iter().map(|item| format!("'{item}'")).collect::<Vec<_>>().join(", ")
}
