//! Typed accessors for the WifiReset service settings
//!
//! [`Settings`] borrows a host store and a key resolver and forwards every
//! call to them. It keeps no state of its own, so building one per call site
//! is free.

use crate::constants::{
    ACTIVE_DEFAULT, AUTOSTART_DEFAULT, INTERVAL_DEFAULT_SECONDS, NOTIFY_DEFAULT, TIMESTAMP_UNSET,
};
use crate::error::{Result, SettingsError};
use crate::resolver::{ResourceResolver, SettingKey};
use crate::store::PreferenceStore;
use crate::timestamp::Timestamp;
use log::{debug, info};

/// Preferences accessor over a host store
pub struct Settings<'a, S, R> {
    store: &'a S,
    resolver: &'a R,
}

/// All six settings read at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSnapshot {
    pub active: bool,
    pub autostart: bool,
    pub notify: bool,
    pub interval: i32,
    pub last_clean_date: Timestamp,
    pub next_reset_time: Option<Timestamp>,
}

impl<'a, S: PreferenceStore, R: ResourceResolver> Settings<'a, S, R> {
    pub fn new(store: &'a S, resolver: &'a R) -> Self {
        Self { store, resolver }
    }

    fn key(&self, key: SettingKey) -> String {
        self.resolver.resolve(key)
    }

    /// Whether the reset service is enabled
    pub fn is_active(&self) -> bool {
        self.store.get_bool(&self.key(SettingKey::Active), ACTIVE_DEFAULT)
    }

    pub fn set_active(&self, active: bool) {
        self.set_bool(SettingKey::Active, active);
    }

    /// Whether the service starts on boot
    pub fn is_autostart(&self) -> bool {
        self.store.get_bool(&self.key(SettingKey::Autostart), AUTOSTART_DEFAULT)
    }

    pub fn set_autostart(&self, autostart: bool) {
        self.set_bool(SettingKey::Autostart, autostart);
    }

    /// Whether the service shows a persistent notification icon
    pub fn is_notify(&self) -> bool {
        self.store.get_bool(&self.key(SettingKey::Notify), NOTIFY_DEFAULT)
    }

    pub fn set_notify(&self, notify: bool) {
        self.set_bool(SettingKey::Notify, notify);
    }

    /// Polling interval in seconds
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidInterval`] if the stored string is not
    /// a base-10 integer.
    pub fn interval(&self) -> Result<i32> {
        let value = self
            .store
            .get_string(&self.key(SettingKey::Interval), INTERVAL_DEFAULT_SECONDS);

        value
            .parse::<i32>()
            .map_err(|source| SettingsError::InvalidInterval { value, source })
    }

    /// Store the polling interval in the decimal form [`interval`](Self::interval) reads
    pub fn set_interval(&self, seconds: i32) {
        let key = self.key(SettingKey::Interval);
        debug!("Setting {} = {}", key, seconds);
        self.store.edit().put_string(&key, &seconds.to_string()).apply();
    }

    /// Last time the database was cleaned
    ///
    /// The first read on a store without a value records the current time
    /// and returns it.
    pub fn last_clean_date(&self) -> Timestamp {
        let stored = self
            .store
            .get_long(&self.key(SettingKey::LastCleanDate), TIMESTAMP_UNSET);

        let stored = Timestamp::from_millis(stored);
        if stored.is_unset() {
            let now = Timestamp::now();
            info!("No last clean date recorded; initializing to {}", now);
            self.set_last_clean_date(now);
            now
        } else {
            stored
        }
    }

    pub fn set_last_clean_date(&self, value: Timestamp) {
        self.set_long(SettingKey::LastCleanDate, value.as_millis());
    }

    /// Next scheduled Wi-Fi reset, or None if nothing is scheduled
    pub fn next_reset_time(&self) -> Option<Timestamp> {
        let stored = self
            .store
            .get_long(&self.key(SettingKey::NextResetTime), TIMESTAMP_UNSET);

        let stored = Timestamp::from_millis(stored);
        (!stored.is_unset()).then_some(stored)
    }

    pub fn set_next_reset_time(&self, value: Timestamp) {
        self.set_long(SettingKey::NextResetTime, value.as_millis());
    }

    pub fn set_long(&self, key: SettingKey, value: i64) {
        let key = self.key(key);
        debug!("Setting {} = {}", key, value);
        self.store.edit().put_long(&key, value).apply();
    }

    pub fn set_bool(&self, key: SettingKey, value: bool) {
        let key = self.key(key);
        debug!("Setting {} = {}", key, value);
        self.store.edit().put_bool(&key, value).apply();
    }

    /// Read every setting, including the self-initializing last clean date
    pub fn snapshot(&self) -> Result<SettingsSnapshot> {
        Ok(SettingsSnapshot {
            active: self.is_active(),
            autostart: self.is_autostart(),
            notify: self.is_notify(),
            interval: self.interval()?,
            last_clean_date: self.last_clean_date(),
            next_reset_time: self.next_reset_time(),
        })
    }
}
