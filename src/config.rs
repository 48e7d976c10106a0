//! Environment overrides for WifiReset
//!
//! Environment variables (all optional):
//! - WIFIRESET_PREFS_FILE: Override the preference file location

use crate::constants::PREFS_FILE_ENV;
use log::{debug, info};
use std::env;
use std::path::PathBuf;

/// Parse the WIFIRESET_PREFS_FILE environment variable
///
/// Returns Some(path) if set to a non-empty value
/// Returns None if unset or empty
pub fn parse_prefs_path_override() -> Option<PathBuf> {
    match env::var(PREFS_FILE_ENV) {
        Ok(val) if !val.trim().is_empty() => {
            info!("Preference file set via environment variable: {}", val);
            Some(PathBuf::from(val))
        }
        Ok(_) => {
            debug!("{} is empty. Using default location.", PREFS_FILE_ENV);
            None
        }
        Err(_) => {
            debug!("{} not set.", PREFS_FILE_ENV);
            None
        }
    }
}
