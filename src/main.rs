//! A tool to inspect, compare, and scaffold SUSHI App definitions.
//!
//! # Overview
//!
//! `sushi-scan` reads the App definition files of a SUSHI installation (one
//! Ruby class per file under the library directory) and recovers their
//! declarative metadata by pattern scanning, without executing any Ruby. On
//! top of the recovered records it offers a structure report, a structural
//! diff between two apps, a categorized listing, and a template generator
//! that seeds new definitions from an existing one.
//!
//! # Quick Start
//!
//! Inspect an app:
//!
//! ```bash
//! sushi-scan show FastqcApp
//! ```
//!
//! The `App` suffix is optional; `sushi-scan show Fastqc` resolves to the
//! same file.
//!
//! # Basic Usage
//!
//! ## Inspecting an App
//!
//! **Structure report:**
//! ```bash
//! sushi-scan show FastqcApp
//! ```
//!
//! **Raw record as JSON:**
//! ```bash
//! sushi-scan show FastqcApp --json
//! ```
//!
//! ## Listing Apps
//!
//! **All apps, grouped by category:**
//! ```bash
//! sushi-scan list
//! ```
//!
//! **Filtered (case-insensitive regex):**
//! ```bash
//! sushi-scan list --filter fastqc
//! ```
//!
//! ## Comparing Two Apps
//!
//! ```bash
//! sushi-scan diff FastqcApp Fastqc2App
//! ```
//!
//! The report shows, per field, the common values and the values only one
//! side declares. Parameters are compared by key; values are not diffed.
//!
//! ## Scaffolding a New App
//!
//! **Generic template:**
//! ```bash
//! sushi-scan template MyNewApp --category QC
//! ```
//!
//! **Seeded from an existing app:**
//! ```bash
//! sushi-scan template MyNewApp --base FastqcApp > MyNewApp.rb
//! ```
//!
//! # Library Location
//!
//! All commands read from the SUSHI library directory, by default
//! `/srv/sushi/production/master/lib`. Override it per invocation with
//! `--lib-path` or persistently with the `SUSHI_LIB` environment variable:
//!
//! ```bash
//! export SUSHI_LIB=/srv/sushi/staging/master/lib
//! sushi-scan list
//! ```
//!
//! # Error Behavior
//!
//! A request for an app with no readable definition file prints a clear
//! "not found" message (with a sample of available apps) and exits nonzero.
//! Malformed or unexpected file content is never an error: each metadata
//! field that can't be recovered is simply reported as absent.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use sushi_scan::Result;

mod commands;

use crate::commands::{DiffArgs, ListArgs, ShowArgs, TemplateArgs, diff_apps, generate_template, list_apps, show_app};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "sushi-scan", version, about = "Inspect, compare, and scaffold SUSHI App definitions")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: ScanSubcommand,
}

#[derive(Subcommand, Debug)]
enum ScanSubcommand {
    /// Show the extracted structure of an app
    Show(ShowArgs),
    /// List available apps grouped by category
    List(ListArgs),
    /// Compare the structure of two apps
    Diff(DiffArgs),
    /// Generate a template for a new app
    Template(TemplateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        ScanSubcommand::Show(show_args) => show_app(show_args),
        ScanSubcommand::List(list_args) => list_apps(list_args),
        ScanSubcommand::Diff(diff_args) => diff_apps(diff_args),
        ScanSubcommand::Template(template_args) => generate_template(template_args),
    }
}
