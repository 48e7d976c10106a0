// Library interface for WifiReset preferences
// Typed accessors over a host key-value store, plus the stores the CLI uses

pub mod config;
pub mod constants;
pub mod error;
pub mod file_store;
pub mod resolver;
pub mod settings;
pub mod store;
pub mod timestamp;

pub use error::SettingsError;
pub use file_store::FileStore;
pub use resolver::{DefaultResolver, ResourceResolver, SettingKey};
pub use settings::{Settings, SettingsSnapshot};
pub use store::{Editor, MemoryStore, PrefValue, PreferenceStore};
pub use timestamp::Timestamp;

use anyhow::Result;
use std::path::PathBuf;

/// Resolve the preference file path
///
/// Precedence: explicit path > WIFIRESET_PREFS_FILE > platform default
pub fn resolve_prefs_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit.or_else(config::parse_prefs_path_override) {
        Some(path) => Ok(path),
        None => FileStore::default_path(),
    }
}
