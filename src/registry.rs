// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-directed converter resolution.
//!
//! The registry is the set of [`FromRawValue`] implementations in scope. There is no
//! runtime table: [`resolve`] turns the requested type into its converter during type
//! checking, so a lookup for a type that has no registration is rejected by the
//! compiler before any data is read.
//!
//! ```compile_fail
//! use typedcfg::service::ConfigStore;
//!
//! struct NotRegistered;
//!
//! let store = ConfigStore::builder().with_value("key", "value").build();
//! let _ = store.get::<NotRegistered>("key");
//! ```
//!
//! Registrations compose: because `Vec<T>` is registered for every registered `T`,
//! `Vec<Vec<u16>>` and `Option<Vec<bool>>` resolve with no additional code.

use crate::domain::{ConfigKey, RawValue, Result};
use crate::ports::{Converter, FromRawValue};
use std::fmt;
use std::marker::PhantomData;

/// The converter bound to `T`'s [`FromRawValue`] registration.
///
/// Zero-sized and freely copyable. Obtained through [`resolve`].
pub struct Resolved<T>(PhantomData<fn() -> T>);

impl<T> Clone for Resolved<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolved<T> {}

impl<T> Default for Resolved<T> {
    fn default() -> Self {
        Resolved(PhantomData)
    }
}

impl<T> fmt::Debug for Resolved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resolved<{}>", std::any::type_name::<T>())
    }
}

impl<T: FromRawValue> Converter<T> for Resolved<T> {
    fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<T> {
        T::from_raw(key, raw)
    }

    fn type_name(&self) -> String {
        T::type_name()
    }
}

/// Returns the converter registered for `T`.
///
/// # Examples
///
/// ```rust
/// use typedcfg::domain::{ConfigKey, RawValue};
/// use typedcfg::ports::Converter;
/// use typedcfg::registry::resolve;
///
/// let key = ConfigKey::from("ports");
/// let ports: Vec<u16> = resolve::<Vec<u16>>()
///     .convert(&key, &RawValue::from(vec!["80", "443"]))
///     .unwrap();
/// assert_eq!(ports, vec![80, 443]);
/// ```
pub fn resolve<T: FromRawValue>() -> Resolved<T> {
    Resolved(PhantomData)
}
