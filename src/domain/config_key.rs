// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around `String` that
//! names an entry in a [`ConfigStore`](crate::service::ConfigStore).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper for configuration keys.
///
/// Keys are compared case-sensitively and byte-for-byte. A `ConfigKey` borrows as a
/// `str`, so stores can be queried with plain string slices.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
/// let key2 = ConfigKey::from("database.port".to_string());
///
/// assert_eq!(key.as_str(), "database.host");
/// assert_ne!(key, key2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedcfg::domain::ConfigKey;
    ///
    /// let key = ConfigKey::from("app.version");
    /// assert_eq!(key.as_str(), "app.version");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<&ConfigKey> for ConfigKey {
    fn from(key: &ConfigKey) -> Self {
        key.clone()
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_new() {
        let key = ConfigKey::new("retries".to_string());
        assert_eq!(key.as_str(), "retries");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("server.port");
        assert_eq!(key.into_string(), "server.port");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("server.port");
        assert_eq!(format!("{}", key), "server.port");
    }

    #[test]
    fn test_config_key_is_case_sensitive() {
        assert_ne!(ConfigKey::from("Retries"), ConfigKey::from("retries"));
    }

    #[test]
    fn test_config_key_borrowed_lookup() {
        let mut map = HashMap::new();
        map.insert(ConfigKey::from("timeouts"), 1);

        assert_eq!(map.get("timeouts"), Some(&1));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_config_key_ordering() {
        let mut keys = vec![ConfigKey::from("b"), ConfigKey::from("a")];
        keys.sort();
        assert_eq!(keys[0].as_str(), "a");
    }

    #[test]
    fn test_config_key_serde_transparent() {
        let key: ConfigKey = serde_yaml::from_str("limits.cpu").unwrap();
        assert_eq!(key.as_str(), "limits.cpu");
    }
}
