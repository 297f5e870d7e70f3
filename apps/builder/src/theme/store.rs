//! Durable key-value preference storage.

#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::AppError;

/// A small string key-value store that survives restarts.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Volatile store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a JSON object in a single file, shared with other keys
/// this program does not own.
///
/// A missing file reads as empty. `set` rewrites the file in full and keeps
/// every other key as it was. Non-string values are read back as their JSON
/// text.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Map<String, Value>, AppError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(AppError::Io(e)),
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(values)) => Ok(values),
            Ok(other) => Err(AppError::Storage(format!(
                "preferences file {} holds {} instead of an object",
                self.path.display(),
                json_kind(&other)
            ))),
            Err(e) => Err(AppError::Storage(format!(
                "preferences file {} is not valid JSON: {e}",
                self.path.display()
            ))),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.load()?.remove(key).map(|value| match value {
            Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = match self.load() {
            Ok(values) => values,
            // Unparseable content is replaced; I/O failures are not.
            Err(AppError::Storage(reason)) => {
                warn!("Replacing unreadable preferences: {reason}");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
