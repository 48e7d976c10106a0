//! Centralized constants for WifiReset preferences
//!
//! Store keys and the defaults returned when a setting has never been written.
//! Each constant notes its unit where one applies.

// ============================================================================
// STORE KEYS
// ============================================================================

/// Key of the service enabled flag.
pub const KEY_ACTIVE: &str = "active";

/// Key of the run-on-boot flag.
pub const KEY_AUTOSTART: &str = "autostart";

/// Key of the persistent notification icon flag.
pub const KEY_NOTIFY: &str = "notify";

/// Key of the polling interval (stored as a decimal string).
pub const KEY_INTERVAL: &str = "interval";

/// Key of the last database clean timestamp.
pub const KEY_LAST_CLEAN_DATE: &str = "last_clean_date";

/// Key of the next scheduled Wi-Fi reset timestamp.
pub const KEY_NEXT_RESET_TIME: &str = "next_reset_time";

// ============================================================================
// DEFAULTS
// ============================================================================

/// Default for the active flag.
pub const ACTIVE_DEFAULT: bool = true;

/// Default for the autostart flag.
pub const AUTOSTART_DEFAULT: bool = true;

/// Default for the notify flag.
pub const NOTIFY_DEFAULT: bool = true;

/// Default polling interval, in the string form the store holds it.
/// Unit: seconds
pub const INTERVAL_DEFAULT_SECONDS: &str = "300";

/// Stored value meaning "timestamp not set".
/// Unit: epoch milliseconds
pub const TIMESTAMP_UNSET: i64 = 0;

// ============================================================================
// PREFERENCE FILE
// ============================================================================

/// Directory created under the platform config dir.
pub const APP_DIR_NAME: &str = "wifireset";

/// Preference file name inside [`APP_DIR_NAME`].
pub const PREFS_FILE_NAME: &str = "preferences.toml";

/// Environment variable overriding the preference file path.
pub const PREFS_FILE_ENV: &str = "WIFIRESET_PREFS_FILE";
