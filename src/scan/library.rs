use crate::Result;
use crate::scan::{AppMetadata, Lookup, extractor};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use ohno::IntoAppError;
use std::fs;

/// File extension of App definition files.
const APP_EXT: &str = "rb";

/// Suffix token carried by every canonical App class name.
const APP_SUFFIX: &str = "App";

/// Access to a directory of SUSHI App definition files.
///
/// Resolves app names to files using the `<identifier>App.rb` convention,
/// reads each file whole, and hands the text to the extractor. There is no
/// caching: every load is a fresh read and a fresh scan.
#[derive(Debug, Clone)]
pub struct AppLibrary {
    lib_path: Utf8PathBuf,
}

impl AppLibrary {
    #[must_use]
    pub fn new(lib_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            lib_path: lib_path.into(),
        }
    }

    #[must_use]
    pub fn lib_path(&self) -> &Utf8Path {
        &self.lib_path
    }

    /// Normalizes an app name to its canonical class name, appending the
    /// `App` suffix when it isn't already there.
    #[must_use]
    pub fn canonical_class_name(app_name: &str) -> String {
        if app_name.ends_with(APP_SUFFIX) {
            app_name.to_owned()
        } else {
            format!("{app_name}{APP_SUFFIX}")
        }
    }

    /// The path the given app would live at, whether or not it exists.
    #[must_use]
    pub fn app_file_path(&self, app_name: &str) -> Utf8PathBuf {
        let class_name = Self::canonical_class_name(app_name);
        self.lib_path.join(format!("{class_name}.{APP_EXT}"))
    }

    /// Loads and scans the named app definition.
    ///
    /// A missing or unreadable file is reported as [`Lookup::NotFound`]; an
    /// unreadable-but-present file additionally logs a warning. Malformed
    /// file content is never an error, the extractor degrades field by field.
    #[must_use]
    pub fn load(&self, app_name: &str) -> Lookup<AppMetadata> {
        let class_name = Self::canonical_class_name(app_name);
        let file_path = self.app_file_path(app_name);

        match fs::read_to_string(&file_path) {
            Ok(text) => {
                debug!("scanning {file_path} ({} bytes)", text.len());
                Lookup::Found(extractor::extract(&text, &class_name, &file_path))
            }
            Err(e) => {
                if file_path.exists() {
                    warn!("unable to read {file_path}: {e}");
                } else {
                    debug!("no definition file at {file_path}");
                }
                Lookup::NotFound
            }
        }
    }

    /// Enumerates the canonical identifiers of every `*App.rb` file in the
    /// library directory, sorted lexicographically.
    ///
    /// # Errors
    ///
    /// Returns an error if the library directory cannot be read.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.lib_path).into_app_err_with(|| format!("SUSHI lib directory not found at {}", self.lib_path))?;

        let mut apps = Vec::new();
        for entry in entries {
            let entry = entry.into_app_err("unable to enumerate SUSHI lib directory")?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(class_name) = file_name.strip_suffix(&format!("{APP_SUFFIX}.{APP_EXT}")) {
                apps.push(format!("{class_name}{APP_SUFFIX}"));
            }
        }

        apps.sort();
        Ok(apps)
    }
}
