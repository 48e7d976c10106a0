//! Mapping from symbolic setting names to store keys

use crate::constants::{
    KEY_ACTIVE, KEY_AUTOSTART, KEY_INTERVAL, KEY_LAST_CLEAN_DATE, KEY_NEXT_RESET_TIME, KEY_NOTIFY,
};

/// The settings known to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Active,
    Autostart,
    Notify,
    Interval,
    LastCleanDate,
    NextResetTime,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::Active,
        SettingKey::Autostart,
        SettingKey::Notify,
        SettingKey::Interval,
        SettingKey::LastCleanDate,
        SettingKey::NextResetTime,
    ];
}

/// Resolves a symbolic setting to the key string used in the store
pub trait ResourceResolver {
    fn resolve(&self, key: SettingKey) -> String;
}

/// Resolver returning the built-in store keys
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl ResourceResolver for DefaultResolver {
    fn resolve(&self, key: SettingKey) -> String {
        match key {
            SettingKey::Active => KEY_ACTIVE,
            SettingKey::Autostart => KEY_AUTOSTART,
            SettingKey::Notify => KEY_NOTIFY,
            SettingKey::Interval => KEY_INTERVAL,
            SettingKey::LastCleanDate => KEY_LAST_CLEAN_DATE,
            SettingKey::NextResetTime => KEY_NEXT_RESET_TIME,
        }
        .to_string()
    }
}
