//! # Config Store
//!
//! [`ConfigStore`] owns `<home>/.taskline.json`: it creates the file from the defaults
//! when missing, loads and caches it on first read, overlays it on the defaults, and
//! writes whole documents back.
//!
//! The store is constructed explicitly and handed to whoever needs it, so tests can run
//! independent stores side by side against different temporary homes.
//!
//! ## Caching
//!
//! The parsed file is cached on the first [`ConfigStore::get`] and never re-read until a
//! write ([`ConfigStore::set`], [`ConfigStore::set_value`], ...) invalidates it. Edits
//! made to the file by another process in the meantime are not noticed; the last writer
//! wins.
//!
//! ## Failure
//!
//! A missing or unreadable file is an [`TasklineError::Io`], malformed JSON is a
//! [`TasklineError::Parse`]. Neither falls back to defaults: a corrupt file is a hard stop
//! so user edits are never silently discarded.

use super::path::{Assignment, DottedPath, PathMode};
use super::{to_pretty_json, ConfigDocument};
use crate::error::{Result, TasklineError};
use crate::home::{expand_tilde, home_dir};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = ".taskline.json";

const TASKLINE_DIRECTORY_KEY: &str = "tasklineDirectory";

/// Uses `RefCell` for the cache since the store is only ever driven from one thread.
#[derive(Debug)]
pub struct ConfigStore {
    home: PathBuf,
    config_file: PathBuf,
    defaults: ConfigDocument,
    default_fields: Map<String, Value>,
    cache: RefCell<Option<Map<String, Value>>>,
}

impl ConfigStore {
    /// Open the store for the current user's home directory.
    pub fn for_current_user() -> Result<Self> {
        Self::open(home_dir()?)
    }

    /// Open the store rooted at `home` with the compiled-in defaults.
    pub fn open(home: impl Into<PathBuf>) -> Result<Self> {
        Self::with_defaults(home, ConfigDocument::default())
    }

    /// Open the store rooted at `home`, using `defaults` as the base document.
    ///
    /// Creates `<home>/.taskline.json` from `defaults` if it does not exist yet.
    /// `defaults` must name an existing storage module as active.
    pub fn with_defaults(home: impl Into<PathBuf>, defaults: ConfigDocument) -> Result<Self> {
        defaults.active_storage_module()?;
        let home = home.into();
        let default_fields = match serde_json::to_value(&defaults)? {
            Value::Object(map) => map,
            _ => {
                return Err(TasklineError::InvalidDocument(
                    "default config must be a JSON object".to_string(),
                ))
            }
        };

        let store = Self {
            config_file: home.join(CONFIG_FILENAME),
            home,
            defaults,
            default_fields,
            cache: RefCell::new(None),
        };
        store.ensure_config_file()?;
        Ok(store)
    }

    fn ensure_config_file(&self) -> Result<()> {
        if self.config_file.exists() {
            return Ok(());
        }
        debug!(path = %self.config_file.display(), "creating default config file");
        self.write(&Value::Object(self.default_fields.clone()))
    }

    /// The resolved configuration: defaults overlaid with the on-disk document.
    pub fn get(&self) -> Result<ConfigDocument> {
        let merged = self.get_raw()?;
        serde_json::from_value(merged).map_err(|e| TasklineError::InvalidDocument(e.to_string()))
    }

    /// Same as [`ConfigStore::get`] but untyped, so keys unknown to [`ConfigDocument`]
    /// and partial nested mappings come back exactly as stored.
    pub fn get_raw(&self) -> Result<Value> {
        let mut merged = self.merged()?;
        expand_taskline_directory(&mut merged, &self.home)?;
        Ok(Value::Object(merged))
    }

    /// Defaults overlaid with the cached file contents, `~` left as written.
    fn merged(&self) -> Result<Map<String, Value>> {
        let loaded = {
            let mut cache = self.cache.borrow_mut();
            match cache.clone() {
                Some(doc) => doc,
                None => {
                    let doc = self.load()?;
                    *cache = Some(doc.clone());
                    doc
                }
            }
        };

        let mut merged = self.default_fields.clone();
        for (key, value) in loaded {
            merged.insert(key, value);
        }
        Ok(merged)
    }

    /// Read a single field by dotted path from the resolved configuration.
    pub fn get_value(&self, key: &str) -> Result<Option<Value>> {
        let doc = self.get_raw()?;
        Ok(DottedPath::parse(key).lookup(&doc)?.cloned())
    }

    /// Overwrite the config file with `document` and drop the cache.
    pub fn set(&self, document: &ConfigDocument) -> Result<()> {
        let value = serde_json::to_value(document)?;
        self.set_raw(&value)
    }

    /// Overwrite the config file with an untyped document and drop the cache.
    ///
    /// The document may be partial, but laid over the defaults it must still read back
    /// as a [`ConfigDocument`]; otherwise nothing is written.
    pub fn set_raw(&self, document: &Value) -> Result<()> {
        let Some(fields) = document.as_object() else {
            return Err(TasklineError::InvalidDocument(
                "config root must be a JSON object".to_string(),
            ));
        };
        self.check_shape(fields)
            .map_err(|e| TasklineError::InvalidDocument(e.to_string()))?;
        self.write(document)?;
        self.invalidate();
        Ok(())
    }

    /// Assign `value` at the dotted path `key` and persist the whole document.
    ///
    /// Empty path segments and missing or falsy intermediate nodes make this a no-op
    /// that reports success. Use [`ConfigStore::set_value_strict`] to have those
    /// reported as errors. A value that leaves the document unreadable as a
    /// [`ConfigDocument`] is refused with [`TasklineError::InvalidPath`].
    pub fn set_value(&self, key: &str, value: impl Into<Value>) -> Result<Assignment> {
        self.assign(key, value.into(), PathMode::Lenient)
    }

    /// Like [`ConfigStore::set_value`], but every unusable path is an
    /// [`TasklineError::InvalidPath`].
    pub fn set_value_strict(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.assign(key, value.into(), PathMode::Strict).map(|_| ())
    }

    fn assign(&self, key: &str, value: Value, mode: PathMode) -> Result<Assignment> {
        let path = DottedPath::parse(key);
        // Persist `tasklineDirectory` the way it was written unless it is the target.
        let mut doc = Value::Object(self.merged()?);
        let outcome = path.assign(&mut doc, value, mode)?;
        match &outcome {
            Assignment::Applied => {
                if let Some(fields) = doc.as_object() {
                    self.check_shape(fields).map_err(|e| {
                        TasklineError::invalid_path(key, format!("value does not fit: {}", e))
                    })?;
                }
                self.set_raw(&doc)?;
            }
            Assignment::Skipped(reason) => {
                warn!(key = %path, reason = %reason, "config value not set");
            }
        }
        Ok(outcome)
    }

    /// Whether `fields` laid over the defaults deserializes as a [`ConfigDocument`].
    fn check_shape(&self, fields: &Map<String, Value>) -> serde_json::Result<()> {
        let mut merged = self.default_fields.clone();
        for (key, value) in fields {
            merged.insert(key.clone(), value.clone());
        }
        serde_json::from_value::<ConfigDocument>(Value::Object(merged)).map(|_| ())
    }

    /// Write the default document back to disk.
    pub fn reset(&self) -> Result<()> {
        debug!(path = %self.config_file.display(), "resetting config to defaults");
        self.set_raw(&Value::Object(self.default_fields.clone()))
    }

    /// The compiled-in defaults, unmodified.
    pub fn get_default(&self) -> &ConfigDocument {
        &self.defaults
    }

    pub fn config_path(&self) -> &Path {
        &self.config_file
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    fn load(&self) -> Result<Map<String, Value>> {
        debug!(path = %self.config_file.display(), "loading config");
        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| TasklineError::io(&self.config_file, e))?;
        let doc = match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => map,
            _ => {
                return Err(TasklineError::InvalidDocument(format!(
                    "{} must contain a JSON object",
                    self.config_file.display()
                )))
            }
        };
        Ok(doc)
    }

    fn write(&self, document: &Value) -> Result<()> {
        let data = to_pretty_json(document)?;
        fs::write(&self.config_file, data).map_err(|e| TasklineError::io(&self.config_file, e))?;
        debug!(path = %self.config_file.display(), "wrote config");
        Ok(())
    }

    fn invalidate(&self) {
        if self.cache.borrow_mut().take().is_some() {
            debug!("config cache invalidated");
        }
    }
}

fn expand_taskline_directory(doc: &mut Map<String, Value>, home: &Path) -> Result<()> {
    if let Some(Value::String(dir)) = doc.get_mut(TASKLINE_DIRECTORY_KEY) {
        if dir.starts_with('~') {
            *dir = expand_tilde(dir, home)?;
        }
    }
    Ok(())
}
