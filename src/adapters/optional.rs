// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional-value generator converter.

use crate::domain::{ConfigKey, RawValue, Result};
use crate::ports::{Converter, FromRawValue};
use crate::registry::resolve;

/// Treats an empty scalar as `None` and hands anything else to the inner converter.
///
/// This describes a present-but-empty value (for example a YAML `~`). It is unrelated
/// to a missing key: `ConfigStore::get::<Option<T>>` still fails with `NotFound` when the
/// key is absent, while `get_optional` reports absence as `None`.
///
/// # Examples
///
/// ```rust
/// use typedcfg::service::ConfigStore;
///
/// let store = ConfigStore::builder()
///     .with_value("proxy", "")
///     .with_value("workers", "4")
///     .build();
///
/// assert_eq!(store.get::<Option<String>>("proxy").unwrap(), None);
/// assert_eq!(store.get::<Option<u8>>("workers").unwrap(), Some(4));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct OptionalOf<C> {
    inner: C,
}

impl<C> OptionalOf<C> {
    /// Wraps the converter used for non-empty values.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<T, C: Converter<T>> Converter<Option<T>> for OptionalOf<C> {
    fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<Option<T>> {
        if raw.is_empty_scalar() {
            return Ok(None);
        }
        self.inner.convert(key, raw).map(Some)
    }

    fn type_name(&self) -> String {
        format!("Option<{}>", Converter::<T>::type_name(&self.inner))
    }
}

impl<T: FromRawValue> FromRawValue for Option<T> {
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        OptionalOf::new(resolve::<T>()).convert(key, raw)
    }

    fn type_name() -> String {
        format!("Option<{}>", T::type_name())
    }
}
