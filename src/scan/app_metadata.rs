use camino::Utf8PathBuf;
use serde::Serialize;
use std::collections::BTreeMap;

/// The metadata recovered from a single App definition file.
///
/// One instance per source file, immutable once produced. Optional fields are
/// `None` when no pattern matched, which is distinct from an empty string;
/// collection fields default to empty, never to absent. `class_name` is the
/// only field guaranteed present since it is derived from the request rather
/// than extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppMetadata {
    /// Canonical class name, always carrying the `App` suffix.
    pub class_name: String,

    /// Where the definition was read from. Provenance only.
    pub file_path: Utf8PathBuf,

    pub name: Option<String>,
    pub analysis_category: Option<String>,

    /// May span multiple lines when declared as a heredoc block.
    pub description: Option<String>,

    pub process_mode: Option<String>,

    /// Declared order preserved, duplicates possible.
    pub required_columns: Vec<String>,
    pub required_params: Vec<String>,

    /// Environment modules the app loads.
    pub modules: Vec<String>,

    pub inherit_columns: Vec<String>,
    pub inherit_tags: Vec<String>,

    /// Parameter assignments by key; a key assigned more than once keeps the
    /// last value in document order.
    pub params: BTreeMap<String, String>,

    /// Name of the ezRun sub-program the app invokes, if any.
    pub ezrun_app: Option<String>,

    /// Method names in declaration order, duplicates preserved.
    pub methods: Vec<String>,
}

impl AppMetadata {
    /// An empty record for the given identity, every field at its default.
    #[must_use]
    pub fn new(class_name: impl Into<String>, file_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            class_name: class_name.into(),
            file_path: file_path.into(),
            name: None,
            analysis_category: None,
            description: None,
            process_mode: None,
            required_columns: Vec::new(),
            required_params: Vec::new(),
            modules: Vec::new(),
            inherit_columns: Vec::new(),
            inherit_tags: Vec::new(),
            params: BTreeMap::new(),
            ezrun_app: None,
            methods: Vec::new(),
        }
    }
}
