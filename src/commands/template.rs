use super::common::CommonArgs;
use clap::Parser;
use sushi_scan::Result;
use sushi_scan::scan::Lookup;
use sushi_scan::template::{TemplateSpec, from_base, generic};

#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Name of the new app (the `App` suffix is optional)
    #[arg(value_name = "NAME", default_value = "NewApp")]
    pub name: String,

    /// Existing app to seed the template from
    #[arg(long, short = 'b', value_name = "APP")]
    pub base: Option<String>,

    /// Analysis category for the new app (ignored when seeding from a base)
    #[arg(long, value_name = "CATEGORY", default_value = "Other")]
    pub category: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn generate_template(args: &TemplateArgs) -> Result<()> {
    let library = args.common.library();
    let spec = TemplateSpec::new(&args.name, &args.category);

    let template = match &args.base {
        Some(base_name) => match library.load(base_name) {
            Lookup::Found(base) => from_base(&spec, &base),
            Lookup::NotFound => {
                // Degrade rather than fail: a missing base still yields a
                // usable scaffold, with a notice the caller can't miss.
                println!("# Base app '{base_name}' not found. Generating generic template instead.");
                println!();
                generic(&spec)
            }
        },
        None => generic(&spec),
    };

    print!("{template}");
    Ok(())
}
