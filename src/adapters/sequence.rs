// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequence generator converter.
//!
//! [`SequenceOf`] lifts a converter for `T` into a converter for `Vec<T>`. Every
//! sequence-like container registered here goes through it, so each container gets
//! the same ordering and failure behavior for any element type.

use crate::domain::{ConfigError, ConfigKey, RawValue, Result};
use crate::ports::{Converter, FromRawValue};
use crate::registry::resolve;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Converts a [`RawValue::List`] element-wise with an inner converter.
///
/// Element order is preserved. The first element that fails aborts the conversion and
/// its error gains the element's index; no partial sequence is returned.
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::{ScalarParser, SequenceOf};
/// use typedcfg::service::ConfigStore;
///
/// let store = ConfigStore::builder()
///     .with_value("timeouts", vec!["10", "20", "bad"])
///     .build();
///
/// let err = store
///     .get_with("timeouts", &SequenceOf::new(ScalarParser::<u32>::new()))
///     .unwrap_err();
/// assert_eq!(err.index(), Some(2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceOf<C> {
    inner: C,
}

impl<C> SequenceOf<C> {
    /// Wraps the converter used for each element.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

/// Converts `items` in order with `inner`, tagging a failure with its index.
pub(crate) fn convert_elements<'a, T, C>(
    inner: &C,
    key: &ConfigKey,
    items: impl IntoIterator<Item = &'a RawValue>,
) -> Result<Vec<T>>
where
    C: Converter<T>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| inner.convert(key, item).map_err(|e| e.at_index(i)))
        .collect()
}

impl<T, C: Converter<T>> Converter<Vec<T>> for SequenceOf<C> {
    fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<Vec<T>> {
        let items = raw.as_list().ok_or_else(|| {
            ConfigError::conversion(key.as_str(), Converter::<Vec<T>>::type_name(self), raw)
        })?;
        convert_elements(&self.inner, key, items)
    }

    fn type_name(&self) -> String {
        format!("Vec<{}>", Converter::<T>::type_name(&self.inner))
    }
}

impl<T: FromRawValue> FromRawValue for Vec<T> {
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        SequenceOf::new(resolve::<T>()).convert(key, raw)
    }

    fn type_name() -> String {
        format!("Vec<{}>", T::type_name())
    }
}

impl<T: FromRawValue> FromRawValue for VecDeque<T> {
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        Vec::<T>::from_raw(key, raw).map(VecDeque::from)
    }

    fn type_name() -> String {
        format!("VecDeque<{}>", T::type_name())
    }
}

/// Duplicate elements collapse; the order of the stored list is not kept.
impl<T: FromRawValue + Ord> FromRawValue for BTreeSet<T> {
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        Vec::<T>::from_raw(key, raw).map(|items| items.into_iter().collect())
    }

    fn type_name() -> String {
        format!("BTreeSet<{}>", T::type_name())
    }
}

impl<T, S> FromRawValue for HashSet<T, S>
where
    T: FromRawValue + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        Vec::<T>::from_raw(key, raw).map(|items| items.into_iter().collect())
    }

    fn type_name() -> String {
        format!("HashSet<{}>", T::type_name())
    }
}

/// The stored list must hold exactly `N` elements.
impl<T: FromRawValue, const N: usize> FromRawValue for [T; N] {
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        let items = Vec::<T>::from_raw(key, raw)?;
        <[T; N]>::try_from(items)
            .map_err(|_| ConfigError::conversion(key.as_str(), Self::type_name(), raw))
    }

    fn type_name() -> String {
        format!("[{}; {}]", T::type_name(), N)
    }
}
