// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converter for lists packed into a single scalar.
//!
//! Values that come from flat sources such as environment variables often encode a list
//! as `"10,20,30"`. [`Delimited`] splits such a scalar and converts each item with an
//! inner converter. It is never picked implicitly; pass it to
//! [`ConfigStore::get_with`](crate::service::ConfigStore::get_with).

use crate::adapters::sequence::convert_elements;
use crate::domain::{ConfigError, ConfigKey, RawValue, Result};
use crate::ports::Converter;

/// Default item separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Splits a scalar on a separator and converts each trimmed item.
///
/// An empty (or all-whitespace) scalar yields an empty list. A [`RawValue::List`] is
/// converted element-wise, as [`SequenceOf`](crate::adapters::SequenceOf) would.
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::Delimited;
/// use typedcfg::registry::resolve;
/// use typedcfg::service::ConfigStore;
///
/// let store = ConfigStore::builder()
///     .with_value("hosts", "alpha; beta ;gamma")
///     .build();
///
/// let hosts = store
///     .get_with("hosts", &Delimited::new(resolve::<String>()).with_separator(';'))
///     .unwrap();
/// assert_eq!(hosts, vec!["alpha", "beta", "gamma"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Delimited<C> {
    inner: C,
    separator: char,
}

impl<C> Delimited<C> {
    /// Wraps the converter used for each item, splitting on [`DEFAULT_SEPARATOR`].
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Sets the item separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl<T, C: Converter<T>> Converter<Vec<T>> for Delimited<C> {
    fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<Vec<T>> {
        match raw {
            RawValue::Scalar(text) if text.trim().is_empty() => Ok(Vec::new()),
            RawValue::Scalar(text) => {
                let items: Vec<RawValue> = text
                    .split(self.separator)
                    .map(|item| RawValue::from(item.trim()))
                    .collect();
                convert_elements(&self.inner, key, &items)
            }
            RawValue::List(items) => convert_elements(&self.inner, key, items),
            RawValue::Map(_) => Err(ConfigError::conversion(
                key.as_str(),
                Converter::<Vec<T>>::type_name(self),
                raw,
            )),
        }
    }

    fn type_name(&self) -> String {
        format!(
            "'{}'-delimited list of {}",
            self.separator,
            Converter::<T>::type_name(&self.inner)
        )
    }
}
