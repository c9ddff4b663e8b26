mod common;
mod diff;
mod list;
mod show;
mod template;

pub use diff::{DiffArgs, diff_apps};
pub use list::{ListArgs, list_apps};
pub use show::{ShowArgs, show_app};
pub use template::{TemplateArgs, generate_template};
