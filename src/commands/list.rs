use super::common::CommonArgs;
use clap::Parser;
use ohno::IntoAppError;
use regex::RegexBuilder;
use sushi_scan::Result;
use sushi_scan::reports::generate_listing;
use sushi_scan::scan::categorize;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list apps whose name matches this pattern (case-insensitive)
    #[arg(long, short = 'f', value_name = "REGEX")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn list_apps(args: &ListArgs) -> Result<()> {
    let library = args.common.library();
    let mut apps = library.list()?;

    if let Some(filter) = &args.filter {
        let pattern = RegexBuilder::new(filter)
            .case_insensitive(true)
            .build()
            .into_app_err_with(|| format!("invalid filter pattern '{filter}'"))?;
        apps.retain(|app| pattern.is_match(app));
    }

    if apps.is_empty() {
        if let Some(filter) = &args.filter {
            println!("No SUSHI Apps found matching '{filter}'");
        } else {
            println!("No SUSHI Apps found in {}", library.lib_path());
        }
        return Ok(());
    }

    let groups = categorize(apps);
    let mut listing = String::new();
    generate_listing(&groups, args.common.color.use_colors(), &mut listing)?;
    print!("{listing}");

    Ok(())
}
