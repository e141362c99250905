//! Dotted key paths over JSON values.
//!
//! A dotted path like `theme.colors.error` names a nested field by joining keys with `.`.
//! Object nodes are indexed by key, array nodes by a decimal index
//! (`storageModules.0.config`).
//!
//! Writes come in two modes. [`PathMode::Lenient`] keeps the long-standing behavior of
//! `config set`: an empty intermediate segment, or an intermediate node that is missing or
//! falsy (`null`, `false`, `0`, `""`), skips the write without an error. [`PathMode::Strict`]
//! reports each of those as [`TasklineError::InvalidPath`]. Neither mode ever creates
//! intermediate nodes.

use crate::error::{Result, TasklineError};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    #[default]
    Lenient,
    Strict,
}

/// Outcome of a write that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Applied,
    /// Lenient mode skipped the write; carries the reason.
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
    raw: String,
    segments: Vec<String>,
}

impl DottedPath {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Read the value at this path. Returns `Ok(None)` when any node along the way is
    /// missing or cannot be indexed.
    pub fn lookup<'a>(&self, root: &'a Value) -> Result<Option<&'a Value>> {
        if self.segments.iter().any(String::is_empty) {
            return Err(self.invalid("path contains an empty segment"));
        }

        let mut node = root;
        for segment in &self.segments {
            let next = match node {
                Value::Object(map) => map.get(segment.as_str()),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            };
            match next {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    /// Write `value` at this path inside `root`.
    pub fn assign(&self, root: &mut Value, value: Value, mode: PathMode) -> Result<Assignment> {
        let Some((last, parents)) = self.segments.split_last() else {
            return Err(self.invalid("path is empty"));
        };

        let mut node = root;
        for (depth, segment) in parents.iter().enumerate() {
            if segment.is_empty() {
                return self.skip_or_fail(mode, "path contains an empty segment".to_string());
            }

            let next = match node {
                Value::Object(map) => map.get_mut(segment.as_str()),
                Value::Array(items) => {
                    let index = self.array_index(segment, depth)?;
                    items.get_mut(index)
                }
                other => {
                    return Err(self.invalid(format!(
                        "'{}' is {}, not an object",
                        self.prefix(depth),
                        describe(other)
                    )))
                }
            };

            node = match next {
                Some(child) if is_falsy(child) => {
                    return self.skip_or_fail(
                        mode,
                        format!("'{}' is {}", self.prefix(depth + 1), describe(child)),
                    )
                }
                Some(child) => child,
                None => {
                    return self.skip_or_fail(
                        mode,
                        format!("'{}' does not exist", self.prefix(depth + 1)),
                    )
                }
            };
        }

        if last.is_empty() && mode == PathMode::Strict {
            return Err(self.invalid("path ends with an empty segment"));
        }

        let depth = parents.len();
        match node {
            Value::Object(map) => {
                map.insert(last.clone(), value);
                Ok(Assignment::Applied)
            }
            Value::Array(items) => {
                let index = self.array_index(last, depth)?;
                let len = items.len();
                match items.get_mut(index) {
                    Some(slot) => {
                        *slot = value;
                        Ok(Assignment::Applied)
                    }
                    None => Err(self.invalid(format!(
                        "index {} is out of bounds for '{}' (length {})",
                        index,
                        self.prefix(depth),
                        len
                    ))),
                }
            }
            other => Err(self.invalid(format!(
                "'{}' is {}, not an object",
                self.prefix(depth),
                describe(other)
            ))),
        }
    }

    fn array_index(&self, segment: &str, depth: usize) -> Result<usize> {
        segment.parse::<usize>().map_err(|_| {
            self.invalid(format!(
                "'{}' is an array and '{}' is not an index",
                self.prefix(depth),
                segment
            ))
        })
    }

    fn skip_or_fail(&self, mode: PathMode, reason: String) -> Result<Assignment> {
        match mode {
            PathMode::Lenient => Ok(Assignment::Skipped(reason)),
            PathMode::Strict => Err(self.invalid(reason)),
        }
    }

    /// Path of the node reached after consuming `depth` segments.
    fn prefix(&self, depth: usize) -> String {
        if depth == 0 {
            "<root>".to_string()
        } else {
            self.segments[..depth].join(".")
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> TasklineError {
        TasklineError::invalid_path(self.raw.clone(), reason)
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
