//! Key-value settings store
//!
//! Settings are addressed by `(category, name)` and hold one of five value
//! types. Every effective change is recorded in a pending changeset that the
//! owner hands to the interested subsystems ([`ChangeSink`]s) and then
//! resets, see [`apply_changes`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::defaults::builtin_defaults;
use crate::error::{io_error, json_error, Result, SettingsKitError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    StringArray(Vec<String>),
}

impl SettingValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::Float(_) => "float",
            SettingValue::String(_) => "string",
            SettingValue::StringArray(_) => "string array",
        }
    }

    /// False for NaN and infinite floats, which JSON cannot store
    pub fn is_storable(&self) -> bool {
        match self {
            SettingValue::Float(v) => v.is_finite(),
            _ => true,
        }
    }

    /// Parse `text` as a value of the same type as `self`.
    ///
    /// Non-finite floats are rejected. String arrays are comma separated; surrounding whitespace is trimmed.
    pub fn parse_same_type(&self, text: &str) -> Option<SettingValue> {
        let text = text.trim();
        match self {
            SettingValue::Bool(_) => match text.to_ascii_lowercase().as_str() {
                "true" | "on" | "1" => Some(SettingValue::Bool(true)),
                "false" | "off" | "0" => Some(SettingValue::Bool(false)),
                _ => None,
            },
            SettingValue::Int(_) => text.parse().ok().map(SettingValue::Int),
            SettingValue::Float(_) => text
                .parse()
                .ok()
                .filter(|v: &f64| v.is_finite())
                .map(SettingValue::Float),
            SettingValue::String(_) => Some(SettingValue::String(text.to_string())),
            SettingValue::StringArray(_) => Some(SettingValue::StringArray(
                text.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{}", v),
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::Float(v) => write!(f, "{}", v),
            SettingValue::String(v) => f.write_str(v),
            SettingValue::StringArray(v) => f.write_str(&v.join(", ")),
        }
    }
}

/// `(category, name)`
pub type SettingKey = (String, String);

/// Settings changed since the last apply
pub type Changeset = BTreeSet<SettingKey>;

fn key(category: &str, name: &str) -> SettingKey {
    (category.to_string(), name.to_string())
}

fn lookup_error(
    category: &str,
    name: &str,
    found: Option<SettingValue>,
    expected: &'static str,
) -> SettingsKitError {
    match found {
        None => SettingsKitError::UnknownSetting {
            category: category.to_string(),
            name: name.to_string(),
        },
        Some(_) => SettingsKitError::TypeMismatch {
            category: category.to_string(),
            name: name.to_string(),
            expected,
        },
    }
}

pub trait SettingsStore {
    /// Effective value (user override, else default)
    fn get(&self, category: &str, name: &str) -> Option<SettingValue>;

    fn default_value(&self, category: &str, name: &str) -> Option<SettingValue>;

    /// Store a value, recording it in the pending changeset if it differs
    fn set(&mut self, category: &str, name: &str, value: SettingValue);

    fn pending_changes(&self) -> Changeset;

    fn reset_pending_changes(&mut self);

    fn get_bool(&self, category: &str, name: &str) -> Result<bool> {
        match self.get(category, name) {
            Some(SettingValue::Bool(v)) => Ok(v),
            other => Err(lookup_error(category, name, other, "bool")),
        }
    }

    fn get_int(&self, category: &str, name: &str) -> Result<i64> {
        match self.get(category, name) {
            Some(SettingValue::Int(v)) => Ok(v),
            other => Err(lookup_error(category, name, other, "int")),
        }
    }

    /// Float value; integer settings are widened
    fn get_float(&self, category: &str, name: &str) -> Result<f64> {
        match self.get(category, name) {
            Some(SettingValue::Float(v)) => Ok(v),
            Some(SettingValue::Int(v)) => Ok(v as f64),
            other => Err(lookup_error(category, name, other, "float")),
        }
    }

    fn get_string(&self, category: &str, name: &str) -> Result<String> {
        match self.get(category, name) {
            Some(SettingValue::String(v)) => Ok(v),
            other => Err(lookup_error(category, name, other, "string")),
        }
    }

    fn get_string_array(&self, category: &str, name: &str) -> Result<Vec<String>> {
        match self.get(category, name) {
            Some(SettingValue::StringArray(v)) => Ok(v),
            other => Err(lookup_error(category, name, other, "string array")),
        }
    }

    fn set_bool(&mut self, category: &str, name: &str, value: bool) {
        self.set(category, name, SettingValue::Bool(value));
    }

    fn set_int(&mut self, category: &str, name: &str, value: i64) {
        self.set(category, name, SettingValue::Int(value));
    }

    fn set_float(&mut self, category: &str, name: &str, value: f64) {
        self.set(category, name, SettingValue::Float(value));
    }

    fn set_string(&mut self, category: &str, name: &str, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.set(category, name, SettingValue::String(value.into()));
    }

    fn set_string_array(&mut self, category: &str, name: &str, value: Vec<String>) {
        self.set(category, name, SettingValue::StringArray(value));
    }

    /// Restore the default value of a setting
    fn reset_to_default(&mut self, category: &str, name: &str) -> Result<()> {
        let value = self
            .default_value(category, name)
            .ok_or_else(|| lookup_error(category, name, None, "default"))?;
        self.set(category, name, value);
        Ok(())
    }
}

/// A subsystem that reacts to changed settings
pub trait ChangeSink {
    fn process_changed_settings(&mut self, changes: &Changeset);
}

impl<F: FnMut(&Changeset)> ChangeSink for F {
    fn process_changed_settings(&mut self, changes: &Changeset) {
        self(changes)
    }
}

/// Hand the pending changeset to every sink, then clear it.
///
/// Returns the changeset that was applied (empty if nothing changed; sinks
/// are not called in that case).
pub fn apply_changes<S: SettingsStore + ?Sized>(
    store: &mut S,
    sinks: &mut [Box<dyn ChangeSink>],
) -> Changeset {
    let changes = store.pending_changes();
    if changes.is_empty() {
        return changes;
    }
    for sink in sinks.iter_mut() {
        sink.process_changed_settings(&changes);
    }
    store.reset_pending_changes();
    debug!(changed = changes.len(), sinks = sinks.len(), "Applied settings changes");
    changes
}

/// On-disk layout: `{ "Category": { "name": value } }`
type SettingsFile = BTreeMap<String, BTreeMap<String, SettingValue>>;

/// In-memory store with defaults, user overrides and JSON persistence
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    defaults: BTreeMap<SettingKey, SettingValue>,
    user: BTreeMap<SettingKey, SettingValue>,
    pending: Changeset,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the settings the settings window edits
    pub fn with_builtin_defaults() -> Self {
        Self::with_defaults(builtin_defaults())
    }

    pub fn with_defaults<'a>(
        defaults: impl IntoIterator<Item = (&'a str, &'a str, SettingValue)>,
    ) -> Self {
        MemorySettings {
            defaults: defaults
                .into_iter()
                .map(|(category, name, value)| (key(category, name), value))
                .collect(),
            user: BTreeMap::new(),
            pending: Changeset::new(),
        }
    }

    /// Settings whose value differs from the default
    pub fn user_values(&self) -> impl Iterator<Item = (&SettingKey, &SettingValue)> {
        self.user.iter()
    }

    /// Replace user overrides with the contents of `path`.
    ///
    /// A missing file leaves the store at its defaults. Loading does not
    /// record pending changes.
    #[instrument(name = "settings_load", skip(self))]
    pub fn load_user(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            info!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(io_error(path))?;
        let file: SettingsFile = serde_json::from_str(&content).map_err(json_error(path))?;

        self.user = file
            .into_iter()
            .flat_map(|(category, values)| {
                values
                    .into_iter()
                    .map(move |(name, value)| ((category.clone(), name), value))
            })
            .filter(|(k, value)| self.defaults.get(k) != Some(value))
            .collect();

        info!(
            path = %path.display(),
            user_values = self.user.len(),
            "Loaded settings"
        );
        Ok(())
    }

    /// Save user overrides using atomic write (write temp + rename)
    #[instrument(name = "settings_save", skip(self))]
    pub fn save_user(&self, path: &Path) -> Result<()> {
        let mut file = SettingsFile::new();
        for ((category, name), value) in &self.user {
            file.entry(category.clone())
                .or_default()
                .insert(name.clone(), value.clone());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let json = serde_json::to_string_pretty(&file).map_err(json_error(path))?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &json).map_err(io_error(&temp_path))?;
        fs::rename(&temp_path, path).map_err(io_error(path))?;

        info!(path = %path.display(), user_values = self.user.len(), "Saved settings (atomic)");
        Ok(())
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, category: &str, name: &str) -> Option<SettingValue> {
        let k = key(category, name);
        self.user
            .get(&k)
            .or_else(|| self.defaults.get(&k))
            .cloned()
    }

    fn default_value(&self, category: &str, name: &str) -> Option<SettingValue> {
        self.defaults.get(&key(category, name)).cloned()
    }

    fn set(&mut self, category: &str, name: &str, value: SettingValue) {
        if !value.is_storable() {
            warn!(category, name, value = %value, "Ignoring non-finite setting value");
            return;
        }
        if self.get(category, name).as_ref() == Some(&value) {
            return;
        }
        let k = key(category, name);
        debug!(category, name, value = %value, "Setting changed");
        if self.defaults.get(&k) == Some(&value) {
            self.user.remove(&k);
        } else {
            self.user.insert(k.clone(), value);
        }
        self.pending.insert(k);
    }

    fn pending_changes(&self) -> Changeset {
        self.pending.clone()
    }

    fn reset_pending_changes(&mut self) {
        self.pending.clear();
    }
}
