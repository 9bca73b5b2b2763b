// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping generator converter.

use crate::domain::{ConfigError, ConfigKey, RawValue, Result};
use crate::ports::{Converter, FromRawValue};
use crate::registry::resolve;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Converts a [`RawValue::Map`] entry by entry with an inner converter.
///
/// Entry keys are kept as strings. A failing entry aborts the conversion and its error
/// gains the entry key.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use typedcfg::domain::RawValue;
/// use typedcfg::service::ConfigStore;
///
/// let mut limits = BTreeMap::new();
/// limits.insert("cpu", "2");
/// limits.insert("memory", "512");
///
/// let store = ConfigStore::builder()
///     .with_value("limits", RawValue::from(limits))
///     .build();
///
/// let limits: BTreeMap<String, u32> = store.get("limits").unwrap();
/// assert_eq!(limits["memory"], 512);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MappingOf<C> {
    inner: C,
}

impl<C> MappingOf<C> {
    /// Wraps the converter used for each entry value.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<T, C: Converter<T>> Converter<BTreeMap<String, T>> for MappingOf<C> {
    fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<BTreeMap<String, T>> {
        let entries = raw.as_map().ok_or_else(|| {
            ConfigError::conversion(
                key.as_str(),
                Converter::<BTreeMap<String, T>>::type_name(self),
                raw,
            )
        })?;
        entries
            .iter()
            .map(|(name, value)| {
                self.inner
                    .convert(key, value)
                    .map(|v| (name.clone(), v))
                    .map_err(|e| e.at_key(name.as_str()))
            })
            .collect()
    }

    fn type_name(&self) -> String {
        format!("Map<String, {}>", Converter::<T>::type_name(&self.inner))
    }
}

impl<T: FromRawValue> FromRawValue for BTreeMap<String, T> {
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        MappingOf::new(resolve::<T>()).convert(key, raw)
    }

    fn type_name() -> String {
        format!("Map<String, {}>", T::type_name())
    }
}

impl<T, S> FromRawValue for HashMap<String, T, S>
where
    T: FromRawValue,
    S: BuildHasher + Default,
{
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        BTreeMap::<String, T>::from_raw(key, raw).map(|entries| entries.into_iter().collect())
    }

    fn type_name() -> String {
        format!("Map<String, {}>", T::type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ConfigKey {
        ConfigKey::from("limits")
    }

    fn limits(memory: &str) -> RawValue {
        let mut entries = BTreeMap::new();
        entries.insert("cpu", "2");
        entries.insert("memory", memory);
        RawValue::from(entries)
    }

    #[test]
    fn test_mapping_converts_every_entry() {
        let values = BTreeMap::<String, u32>::from_raw(&key(), &limits("512")).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values["cpu"], 2);
        assert_eq!(values["memory"], 512);
    }

    #[test]
    fn test_hash_map_registration() {
        let values: HashMap<String, u32> = HashMap::from_raw(&key(), &limits("512")).unwrap();
        assert_eq!(values.get("cpu"), Some(&2));
    }

    #[test]
    fn test_failing_entry_reports_its_key() {
        let err = BTreeMap::<String, u32>::from_raw(&key(), &limits("lots")).unwrap_err();
        assert_eq!(err.index(), None);
        assert!(err.to_string().contains("'limits.memory'"));
        assert!(err.to_string().contains("'lots'"));
    }

    #[test]
    fn test_list_is_not_a_mapping() {
        let err = BTreeMap::<String, u32>::from_raw(&key(), &RawValue::from(vec!["1"]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ConversionFailed { ref expected_type, .. }
                if expected_type == "Map<String, u32>"
        ));
    }

    #[test]
    fn test_mapping_of_sequences() {
        let mut pools = BTreeMap::new();
        pools.insert("eu", RawValue::from(vec!["1", "2"]));
        pools.insert("us", RawValue::from(vec!["3", "x"]));
        let raw = RawValue::from(pools);

        let err = BTreeMap::<String, Vec<u8>>::from_raw(&key(), &raw).unwrap_err();
        assert!(err.to_string().contains("'limits.us[1]'"));
    }
}
