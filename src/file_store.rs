//! Preference store persisted as a flat TOML table
//!
//! Each preference is one top-level `key = value` pair. Only booleans,
//! integers and strings are understood; anything else in the file is skipped
//! on load and dropped on the next write.

use crate::constants::{APP_DIR_NAME, PREFS_FILE_NAME};
use crate::store::{PrefValue, PreferenceStore};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, PrefValue>>,
}

impl FileStore {
    /// Get the standard preference file path
    ///
    /// - macOS: `~/Library/Application Support/wifireset/preferences.toml`
    /// - Linux: `~/.config/wifireset/preferences.toml`
    /// - Windows: `%APPDATA%\wifireset\preferences.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir.join(PREFS_FILE_NAME))
    }

    /// Open the store backed by `path`
    ///
    /// A missing file is an empty store; it is created on the first commit.
    /// Every commit rewrites the whole file, so values skipped on load
    /// (floats, arrays, tables) are removed from disk by the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid TOML.
    pub fn open(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read preference file: {}", path.display()))?;
            parse_table(&contents)
                .with_context(|| format!("Failed to parse preference file: {}", path.display()))?
        } else {
            log::debug!(
                "Preference file {} does not exist yet; starting empty",
                path.display()
            );
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, values: &BTreeMap<String, PrefValue>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create preference directory")?;
        }

        let contents = toml::to_string(values).context("Failed to serialize preferences")?;

        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write preference file: {}", self.path.display()))?;

        log::info!("Preferences saved to: {}", self.path.display());
        Ok(())
    }
}

fn parse_table(contents: &str) -> Result<BTreeMap<String, PrefValue>> {
    let table: toml::Table = contents.parse()?;
    let mut values = BTreeMap::new();

    for (key, value) in table {
        let value = match value {
            toml::Value::Boolean(b) => PrefValue::Bool(b),
            toml::Value::Integer(i) => PrefValue::Long(i),
            toml::Value::String(s) => PrefValue::String(s),
            other => {
                log::warn!(
                    "Skipping preference '{}': unsupported {} value",
                    key,
                    other.type_str()
                );
                continue;
            }
        };
        values.insert(key, value);
    }

    Ok(values)
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.lock().get(key).cloned()
    }

    fn commit(&self, edits: Vec<(String, PrefValue)>) {
        let mut values = self.values.lock();
        values.extend(edits);

        if let Err(e) = self.write(&values) {
            log::error!("Failed to persist preferences: {:#}", e);
        }
    }
}
