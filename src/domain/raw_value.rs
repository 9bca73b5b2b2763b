// SPDX-License-Identifier: MIT OR Apache-2.0

//! Untyped configuration values.
//!
//! This module provides the `RawValue` type, which holds configuration data as it was
//! supplied, before any typed conversion. Scalars keep their textual form so that the
//! requested type, not the input format, decides how they are interpreted.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// An untyped unit of configuration data.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::RawValue;
///
/// let retries = RawValue::from(3u32);
/// assert_eq!(retries.as_scalar(), Some("3"));
///
/// let timeouts = RawValue::from(vec!["10", "20"]);
/// assert_eq!(timeouts.as_list().map(|items| items.len()), Some(2));
/// assert_eq!(timeouts.to_string(), "[10, 20]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawValue {
    /// A primitive in its textual form: a string, number or boolean.
    Scalar(String),
    /// An ordered sequence of values.
    List(Vec<RawValue>),
    /// A nested mapping from string keys to values.
    Map(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// Returns the text of a scalar, or `None` for lists and maps.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            RawValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements of a list, or `None` for scalars and maps.
    pub fn as_list(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries of a map, or `None` for scalars and lists.
    pub fn as_map(&self) -> Option<&BTreeMap<String, RawValue>> {
        match self {
            RawValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns `true` for a scalar holding the empty string.
    ///
    /// Null values in serde input deserialize to this form.
    pub fn is_empty_scalar(&self) -> bool {
        matches!(self, RawValue::Scalar(s) if s.is_empty())
    }

    /// Short name of the value's shape, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Scalar(_) => "scalar",
            RawValue::List(_) => "list",
            RawValue::Map(_) => "map",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Scalar(s) => f.write_str(s),
            RawValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            RawValue::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Scalar(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Scalar(s.to_string())
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Scalar(b.to_string())
    }
}

macro_rules! impl_from_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for RawValue {
                fn from(v: $t) -> Self {
                    RawValue::Scalar(v.to_string())
                }
            }
        )*
    };
}

impl_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

// `Debug` keeps the fractional part of whole floats (`2.0`), so a float never
// reads back as an integer.
macro_rules! impl_from_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for RawValue {
                fn from(v: $t) -> Self {
                    RawValue::Scalar(format!("{v:?}"))
                }
            }
        )*
    };
}

impl_from_float!(f32, f64);

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        RawValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RawValue>, const N: usize> From<[T; N]> for RawValue {
    fn from(items: [T; N]) -> Self {
        RawValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<RawValue>> From<BTreeMap<K, V>> for RawValue {
    fn from(entries: BTreeMap<K, V>) -> Self {
        RawValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<RawValue>> From<HashMap<K, V>> for RawValue {
    fn from(entries: HashMap<K, V>) -> Self {
        RawValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Scalar(s) => serializer.serialize_str(s),
            RawValue::List(items) => serializer.collect_seq(items),
            RawValue::Map(entries) => serializer.collect_map(entries),
        }
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar, sequence or mapping")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::Scalar(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Scalar(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Scalar(String::new()))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        RawValue::deserialize(deserializer)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<RawValue, D::Error> {
        RawValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<RawValue>()? {
            items.push(item);
        }
        Ok(RawValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawValue, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<RawValue, RawValue>()? {
            // Non-string scalar keys (numbers, booleans) keep their text.
            let key = match key {
                RawValue::Scalar(s) => s,
                other => {
                    return Err(de::Error::custom(format!(
                        "mapping keys must be scalars, found a {}",
                        other.kind()
                    )))
                }
            };
            entries.insert(key, value);
        }
        Ok(RawValue::Map(entries))
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}
