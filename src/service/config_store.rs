// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed configuration store.
//!
//! This module provides `ConfigStore`, an immutable bag of raw values with typed
//! lookups, and `ConfigStoreBuilder` for assembling one.

use crate::domain::{ConfigError, ConfigKey, RawValue, Result};
use crate::ports::{Converter, FromRawValue};
use crate::registry::resolve;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// An immutable key/value bag with typed lookups.
///
/// The store is filled once at construction and never changes afterwards, so lookups
/// are pure and repeatable and the store can be shared across threads without
/// synchronization. Each lookup names the result type; the converter for that type is
/// chosen by the compiler (see [`registry`](crate::registry)).
///
/// A missing key and a malformed value are separate failures: [`get`](Self::get)
/// reports the first as [`ConfigError::NotFound`], [`get_optional`](Self::get_optional)
/// reports it as `Ok(None)`, and both report the second as
/// [`ConfigError::ConversionFailed`].
///
/// # Examples
///
/// ```rust
/// use typedcfg::domain::ConfigError;
/// use typedcfg::service::ConfigStore;
///
/// let store = ConfigStore::builder()
///     .with_value("retries", "3")
///     .with_value("timeouts", vec!["10", "20", "bad"])
///     .build();
///
/// assert_eq!(store.get::<i32>("retries").unwrap(), 3);
///
/// let err = store.get::<Vec<i32>>("timeouts").unwrap_err();
/// assert!(matches!(err, ConfigError::ConversionFailed { .. }));
/// assert_eq!(err.index(), Some(2));
///
/// assert_eq!(store.get_optional::<i32>("missing").unwrap(), None);
/// ```
///
/// Serializing a store writes its entries sorted by key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigStore {
    #[serde(serialize_with = "serialize_sorted")]
    values: HashMap<ConfigKey, RawValue>,
}

fn serialize_sorted<S: Serializer>(
    values: &HashMap<ConfigKey, RawValue>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    values.iter().collect::<BTreeMap<_, _>>().serialize(serializer)
}

impl ConfigStore {
    /// Creates a store that owns `values`.
    pub fn new(values: HashMap<ConfigKey, RawValue>) -> Self {
        Self { values }
    }

    /// Creates a new store builder.
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// Retrieves the value under `key` converted to `T`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::NotFound`] - the key is absent
    /// * [`ConfigError::ConversionFailed`] - the value cannot be converted to `T`
    pub fn get<T: FromRawValue>(&self, key: impl AsRef<str>) -> Result<T> {
        self.get_with(key, &resolve::<T>())
    }

    /// Retrieves the value under `key` converted to `T`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ConversionFailed`] - the key is present but its value cannot be
    ///   converted to `T`
    pub fn get_optional<T: FromRawValue>(&self, key: impl AsRef<str>) -> Result<Option<T>> {
        self.get_optional_with(key, &resolve::<T>())
    }

    /// Like [`get`](Self::get), with an explicitly chosen converter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typedcfg::adapters::Delimited;
    /// use typedcfg::registry::resolve;
    /// use typedcfg::service::ConfigStore;
    ///
    /// let store = ConfigStore::builder().with_value("ports", "80,443").build();
    /// let ports = store.get_with("ports", &Delimited::new(resolve::<u16>())).unwrap();
    /// assert_eq!(ports, vec![80, 443]);
    /// ```
    pub fn get_with<T, C>(&self, key: impl AsRef<str>, converter: &C) -> Result<T>
    where
        C: Converter<T>,
    {
        let key = key.as_ref();
        self.get_optional_with(key, converter)?
            .ok_or_else(|| ConfigError::not_found(key))
    }

    /// Like [`get_optional`](Self::get_optional), with an explicitly chosen converter.
    pub fn get_optional_with<T, C>(&self, key: impl AsRef<str>, converter: &C) -> Result<Option<T>>
    where
        C: Converter<T>,
    {
        let key = key.as_ref();
        tracing::trace!(
            key,
            type_name = %Converter::<T>::type_name(converter),
            "Looking up configuration value"
        );

        let Some((stored_key, raw)) = self.values.get_key_value(key) else {
            return Ok(None);
        };

        converter.convert(stored_key, raw).map(Some).map_err(|e| {
            tracing::debug!(
                key,
                kind = raw.kind(),
                "Failed to convert configuration value: {}",
                e
            );
            e
        })
    }

    /// Checks whether `key` is present.
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.values.contains_key(key.as_ref())
    }

    /// Iterates over the stored keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> + '_ {
        self.values.keys()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigStore
where
    K: Into<ConfigKey>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ConfigStoreBuilder::new().with_values(iter).build()
    }
}

impl<K, V> From<HashMap<K, V>> for ConfigStore
where
    K: Into<ConfigKey>,
    V: Into<RawValue>,
{
    fn from(values: HashMap<K, V>) -> Self {
        values.into_iter().collect()
    }
}

/// Builder for constructing a `ConfigStore`.
///
/// # Examples
///
/// ```rust
/// use typedcfg::service::ConfigStoreBuilder;
///
/// let store = ConfigStoreBuilder::new()
///     .with_value("name", "svc")
///     .with_values([("replicas", "2"), ("region", "eu")])
///     .build();
/// assert_eq!(store.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ConfigStoreBuilder {
    values: HashMap<ConfigKey, RawValue>,
}

impl ConfigStoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value. A later value for the same key replaces the earlier one.
    pub fn with_value(mut self, key: impl Into<ConfigKey>, value: impl Into<RawValue>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Adds every pair from `values`.
    pub fn with_values<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<ConfigKey>,
        V: Into<RawValue>,
    {
        for (key, value) in values {
            self.insert(key.into(), value.into());
        }
        self
    }

    fn insert(&mut self, key: ConfigKey, value: RawValue) {
        if let Some(previous) = self.values.insert(key.clone(), value) {
            tracing::debug!(
                key = %key,
                previous = %previous,
                "Replacing configuration value for duplicate key"
            );
        }
    }

    /// Builds the store.
    pub fn build(self) -> ConfigStore {
        ConfigStore::new(self.values)
    }
}
