//! # Configuration
//!
//! Taskline keeps its configuration in a single JSON document at `~/.taskline.json`.
//!
//! ## Resolution
//!
//! Every read is the compiled-in default document with the on-disk document laid over
//! it at the top level: a key present on disk replaces the default wholesale (including
//! nested mappings like `theme`), a key absent on disk falls back to the default.
//! `tasklineDirectory` may be written as `~/...` and is always handed out absolute.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `language` | `en` | UI language code |
//! | `tasklineDirectory` | `~` | Where local task data lives |
//! | `displayCompleteTasks` | `true` | Show finished tasks in listings |
//! | `displayProgressOverview` | `true` | Show the progress summary line |
//! | `activeStorageModule` | `local` | Name of the entry in `storageModules` to use |
//! | `storageModules` | one `local` module | Configured storage backends |
//! | `dateformat` | `dd.mm.yyyy HH:MM` | Date formatting pattern |
//! | `theme` | see [`Theme`] | Colors and icon colors |
//!
//! Unknown top-level keys are kept as-is and survive a round trip.

use crate::error::{Result, TasklineError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

pub mod path;
pub mod store;

pub use path::{Assignment, DottedPath, PathMode};
pub use store::{ConfigStore, CONFIG_FILENAME};

/// The full configuration shape persisted to disk and returned by [`ConfigStore::get`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub language: String,
    pub taskline_directory: String,
    pub display_complete_tasks: bool,
    pub display_progress_overview: bool,
    pub active_storage_module: String,
    pub storage_modules: Vec<StorageModule>,
    pub dateformat: String,
    pub theme: Theme,

    /// Keys this version does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            taskline_directory: "~".to_string(),
            display_complete_tasks: true,
            display_progress_overview: true,
            active_storage_module: "local".to_string(),
            storage_modules: vec![StorageModule {
                name: "local".to_string(),
                kind: StorageModuleType::Local,
                config: Value::Object(Map::new()),
            }],
            dateformat: "dd.mm.yyyy HH:MM".to_string(),
            theme: Theme::default(),
            extra: Map::new(),
        }
    }
}

impl ConfigDocument {
    /// The `storageModules` entry named by `activeStorageModule`.
    pub fn active_storage_module(&self) -> Result<&StorageModule> {
        self.storage_module(&self.active_storage_module)
            .ok_or_else(|| TasklineError::UnknownStorageModule(self.active_storage_module.clone()))
    }

    pub fn storage_module(&self, name: &str) -> Option<&StorageModule> {
        self.storage_modules.iter().find(|m| m.name == name)
    }
}

/// Kind of backend a storage module is handled by.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StorageModuleType {
    Local,
    #[serde(alias = "remote-document-store")]
    Firestore,
}

/// One configured storage backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StorageModule {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StorageModuleType,
    /// Backend-specific settings, left opaque until the backend asks for them.
    #[serde(default = "empty_object")]
    pub config: Value,
}

impl StorageModule {
    /// Deserialize `config` into the backend's own settings type.
    pub fn typed_config<C: DeserializeOwned>(&self) -> Result<C> {
        serde_json::from_value(self.config.clone()).map_err(|e| {
            TasklineError::InvalidDocument(format!("storage module '{}': {}", self.name, e))
        })
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Theme {
    pub colors: ThemeColors,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeColors {
    pub pale: String,
    pub error: String,
    pub task: TaskColors,
    pub icons: IconColors,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            pale: "grey".to_string(),
            error: "red".to_string(),
            task: TaskColors::default(),
            icons: IconColors::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TaskColors {
    pub priority: PriorityColors,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PriorityColors {
    pub medium: String,
    pub high: String,
}

impl Default for PriorityColors {
    fn default() -> Self {
        Self {
            medium: "yellow".to_string(),
            high: "red".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct IconColors {
    pub note: String,
    pub success: String,
    pub star: String,
    pub progress: String,
    pub pending: String,
    pub canceled: String,
}

impl Default for IconColors {
    fn default() -> Self {
        Self {
            note: "blue".to_string(),
            success: "green".to_string(),
            star: "yellow".to_string(),
            progress: "blue".to_string(),
            pending: "magenta".to_string(),
            canceled: "red".to_string(),
        }
    }
}

/// Serialize as pretty-printed JSON with 4-space indentation.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| TasklineError::InvalidDocument(e.to_string()))
}
