use super::common::CommonArgs;
use clap::Parser;
use ohno::bail;
use sushi_scan::Result;
use sushi_scan::diff::try_compare;
use sushi_scan::reports::generate_comparison;

#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// First app to compare
    #[arg(value_name = "APP1")]
    pub left: String,

    /// Second app to compare
    #[arg(value_name = "APP2")]
    pub right: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn diff_apps(args: &DiffArgs) -> Result<()> {
    let library = args.common.library();

    let left = library.load(&args.left);
    let right = library.load(&args.right);

    let Some(comparison) = try_compare(&left, &right) else {
        // Name every missing side so the user can fix both at once.
        let mut missing = Vec::new();
        if !left.is_found() {
            missing.push(format!("'{}' not found", args.left));
        }
        if !right.is_found() {
            missing.push(format!("'{}' not found", args.right));
        }
        bail!("{}", missing.join(" and "));
    };

    let mut report = String::new();
    generate_comparison(&comparison, args.common.color.use_colors(), &mut report)?;
    print!("{report}");

    Ok(())
}
