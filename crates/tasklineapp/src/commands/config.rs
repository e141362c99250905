use crate::commands::{CmdMessage, CmdResult};
use crate::config::{Assignment, ConfigStore};
use crate::error::{Result, TasklineError};
use serde_json::Value;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set {
        key: String,
        value: String,
        strict: bool,
    },
    Path,
    Reset,
}

pub fn run(store: &ConfigStore, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(store.get_raw()?)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match store.get_value(&key) {
                Ok(Some(value)) => Ok(result.with_value(value)),
                Ok(None) => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
                Err(e @ TasklineError::InvalidPath { .. }) => {
                    result.add_message(CmdMessage::error(e.to_string()));
                    Ok(result)
                }
                Err(e) => Err(e),
            }
        }
        ConfigAction::Set { key, value, strict } => {
            let parsed = parse_value(&value);
            let display_val = parsed.to_string();
            let outcome = if strict {
                store
                    .set_value_strict(&key, parsed)
                    .map(|_| Assignment::Applied)
            } else {
                store.set_value(&key, parsed)
            };

            let mut result = CmdResult::default();
            match outcome {
                Ok(Assignment::Applied) => {
                    result.add_message(CmdMessage::success(format!(
                        "{} set to {}",
                        key, display_val
                    )));
                }
                Ok(Assignment::Skipped(reason)) => {
                    result.add_message(CmdMessage::warning(format!(
                        "{} was not set: {}",
                        key, reason
                    )));
                }
                Err(e @ TasklineError::InvalidPath { .. }) => {
                    result.add_message(CmdMessage::error(e.to_string()));
                }
                Err(e) => return Err(e),
            }
            Ok(result)
        }
        ConfigAction::Path => {
            let path = store.config_path().to_path_buf();
            let mut result = CmdResult::default().with_config_path(path.clone());
            result.add_message(CmdMessage::info(path.display().to_string()));
            Ok(result)
        }
        ConfigAction::Reset => {
            store.reset()?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success("Configuration reset to defaults"));
            Ok(result)
        }
    }
}

/// Values given on the command line are read as JSON when they parse (`true`, `3`,
/// `{"a":1}`) and as plain strings otherwise.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
