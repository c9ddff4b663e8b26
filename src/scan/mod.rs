//! Pattern-based recovery of App metadata from SUSHI definition files.
//!
//! SUSHI App files are Ruby classes, but nothing here executes or parses Ruby.
//! Each metadata field is recovered independently by a dedicated pattern rule
//! scanning the raw file text, so a construct the rules don't recognize simply
//! leaves its field at the default instead of failing the whole scan.
//!
//! # Implementation Model
//!
//! - [`extractor`]: the field rules themselves, operating on in-memory text
//! - [`AppLibrary`]: resolves app names to files under the library root,
//!   reads them whole, and enumerates `*App.rb` entries
//! - [`Lookup`]: found / not-found signal for library reads
//! - [`Category`]: name-pattern classification used by the `list` command

mod app_metadata;
mod category;
pub mod extractor;
mod library;
mod lookup;

pub use app_metadata::AppMetadata;
pub use category::{Category, categorize, classify};
pub use library::AppLibrary;
pub use lookup::Lookup;
