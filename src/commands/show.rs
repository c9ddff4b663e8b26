use super::common::CommonArgs;
use clap::Parser;
use ohno::{IntoAppError, bail};
use sushi_scan::Result;
use sushi_scan::reports::generate_structure;
use sushi_scan::scan::Lookup;

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// App to inspect (the `App` suffix is optional)
    #[arg(value_name = "APP")]
    pub app: String,

    /// Output the raw extracted record as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn show_app(args: &ShowArgs) -> Result<()> {
    let library = args.common.library();

    let Lookup::Found(meta) = library.load(&args.app) else {
        eprintln!("App '{}' not found.", args.app);
        if let Ok(apps) = library.list() {
            let available: Vec<_> = apps.iter().take(20).map(String::as_str).collect();
            eprintln!();
            eprintln!("Available apps (first 20): {}", available.join(", "));
            eprintln!();
            eprintln!("Use `sushi-scan list` to see all apps.");
        }
        bail!("app '{}' not found", args.app);
    };

    if args.json {
        let json = serde_json::to_string_pretty(&meta).into_app_err("unable to serialize app metadata")?;
        println!("{json}");
    } else {
        let mut report = String::new();
        generate_structure(&meta, args.common.color.use_colors(), &mut report)?;
        print!("{report}");
    }

    Ok(())
}
