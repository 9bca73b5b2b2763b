// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converter trait definitions.
//!
//! This module defines the two seams of the conversion registry:
//!
//! - [`Converter`] is an explicit strategy object that turns a [`RawValue`] into a `T`.
//!   Generator converters wrap another `Converter` and apply it element-wise.
//! - [`FromRawValue`] is implemented by the target type itself. Implementing it is
//!   how a type is registered, and the compiler selects the implementation from the
//!   requested type alone.

use crate::domain::{ConfigKey, RawValue, Result};
use std::fmt;

/// A strategy that converts an untyped value into a `T`.
///
/// Converters are stateless apart from configuration fixed at construction (such as
/// an inner converter or a separator), so one instance can serve any number of
/// lookups from any number of threads.
///
/// # Examples
///
/// ```rust
/// use typedcfg::domain::{ConfigError, ConfigKey, RawValue, Result};
/// use typedcfg::ports::Converter;
///
/// struct Percent;
///
/// impl Converter<f64> for Percent {
///     fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<f64> {
///         let text = raw.as_scalar().and_then(|s| s.strip_suffix('%'));
///         text.and_then(|s| s.parse::<f64>().ok())
///             .map(|p| p / 100.0)
///             .ok_or_else(|| ConfigError::conversion(key.as_str(), "percentage", raw))
///     }
/// }
///
/// let key = ConfigKey::from("ratio");
/// assert_eq!(Percent.convert(&key, &RawValue::from("25%")).unwrap(), 0.25);
/// ```
pub trait Converter<T> {
    /// Converts the value stored under `key`.
    ///
    /// `key` is only used to describe failures.
    fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<T>;

    /// The type name reported in conversion errors.
    fn type_name(&self) -> String {
        std::any::type_name::<T>().to_string()
    }
}

/// A type that can be produced from a [`RawValue`].
///
/// This is the registration point of the converter registry. Base types implement it
/// directly; composite types implement it generically over their element type, by
/// delegating to a generator converter wrapped around the element's registration.
/// Looking up a type without an implementation does not compile.
///
/// # Examples
///
/// ```rust
/// use typedcfg::domain::{ConfigError, ConfigKey, RawValue, Result};
/// use typedcfg::ports::FromRawValue;
/// use typedcfg::service::ConfigStore;
///
/// #[derive(Debug, PartialEq)]
/// enum LogLevel {
///     Quiet,
///     Verbose,
/// }
///
/// impl FromRawValue for LogLevel {
///     fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
///         match raw.as_scalar() {
///             Some("quiet") => Ok(LogLevel::Quiet),
///             Some("verbose") => Ok(LogLevel::Verbose),
///             _ => Err(ConfigError::conversion(key.as_str(), Self::type_name(), raw)),
///         }
///     }
/// }
///
/// let store = ConfigStore::builder()
///     .with_value("levels", vec!["quiet", "verbose"])
///     .build();
///
/// // The sequence generator picks up the new registration with no further code.
/// let levels: Vec<LogLevel> = store.get("levels").unwrap();
/// assert_eq!(levels, vec![LogLevel::Quiet, LogLevel::Verbose]);
/// ```
#[diagnostic::on_unimplemented(
    message = "no converter is registered for `{Self}`",
    label = "`{Self}` cannot be read from configuration",
    note = "implement `FromRawValue` for `{Self}`, or pass an explicit `Converter` to `get_with`"
)]
pub trait FromRawValue: Sized {
    /// Converts the value stored under `key` into `Self`.
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self>;

    /// The type name reported in conversion errors.
    fn type_name() -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// A converter built from a closure.
///
/// Useful for one-off strategies that do not warrant a named type, including ones
/// that decide at run time which conversion to apply.
///
/// # Examples
///
/// ```rust
/// use typedcfg::domain::{ConfigKey, RawValue};
/// use typedcfg::ports::{Converter, FnConverter};
///
/// let upper = FnConverter::new("uppercase string", |_key: &ConfigKey, raw: &RawValue| {
///     Ok(raw.to_string().to_uppercase())
/// });
///
/// let key = ConfigKey::from("region");
/// assert_eq!(upper.convert(&key, &RawValue::from("eu-west")).unwrap(), "EU-WEST");
/// assert_eq!(Converter::<String>::type_name(&upper), "uppercase string");
/// ```
pub struct FnConverter<F> {
    type_name: String,
    f: F,
}

impl<F> FnConverter<F> {
    /// Creates a converter reporting `type_name` in its errors.
    pub fn new(type_name: impl Into<String>, f: F) -> Self {
        Self {
            type_name: type_name.into(),
            f,
        }
    }
}

impl<F> fmt::Debug for FnConverter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl<T, F> Converter<T> for FnConverter<F>
where
    F: Fn(&ConfigKey, &RawValue) -> Result<T>,
{
    fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<T> {
        (self.f)(key, raw)
    }

    fn type_name(&self) -> String {
        self.type_name.clone()
    }
}
