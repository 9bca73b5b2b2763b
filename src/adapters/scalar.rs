// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base converters for primitive types.
//!
//! Every type here reads a [`RawValue::Scalar`]; lists and maps are rejected with a
//! conversion error. Numeric and address types parse the scalar text with `FromStr`,
//! without trimming.

use crate::domain::{ConfigError, ConfigKey, RawValue, Result};
use crate::ports::{Converter, FromRawValue};
use std::fmt;
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::num::{
    NonZeroI32, NonZeroI64, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::path::PathBuf;
use std::str::FromStr;

/// Returns the text of a scalar, or a conversion error naming `expected_type`.
pub(crate) fn expect_scalar<'a>(
    key: &ConfigKey,
    raw: &'a RawValue,
    expected_type: impl FnOnce() -> String,
) -> Result<&'a str> {
    raw.as_scalar()
        .ok_or_else(|| ConfigError::conversion(key.as_str(), expected_type(), raw))
}

/// Converts a scalar with `T`'s `FromStr` implementation.
///
/// This is the converter behind the registered numeric and address types. It also
/// serves types that implement `FromStr` but have no registration of their own, through
/// [`ConfigStore::get_with`](crate::service::ConfigStore::get_with).
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::ScalarParser;
/// use typedcfg::service::ConfigStore;
///
/// #[derive(Debug, PartialEq)]
/// struct Millis(u64);
///
/// impl std::str::FromStr for Millis {
///     type Err = std::num::ParseIntError;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.trim_end_matches("ms").parse().map(Millis)
///     }
/// }
///
/// let store = ConfigStore::builder().with_value("delay", "250ms").build();
/// let delay = store.get_with("delay", &ScalarParser::<Millis>::new()).unwrap();
/// assert_eq!(delay, Millis(250));
/// ```
pub struct ScalarParser<T>(PhantomData<fn() -> T>);

impl<T> ScalarParser<T> {
    /// Creates the parser.
    pub fn new() -> Self {
        ScalarParser(PhantomData)
    }
}

impl<T> Default for ScalarParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ScalarParser<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScalarParser<T> {}

impl<T> fmt::Debug for ScalarParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarParser<{}>", std::any::type_name::<T>())
    }
}

impl<T> Converter<T> for ScalarParser<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn convert(&self, key: &ConfigKey, raw: &RawValue) -> Result<T> {
        let text = expect_scalar(key, raw, || Converter::<T>::type_name(self))?;
        text.parse::<T>().map_err(|e| {
            ConfigError::conversion_with_source(
                key.as_str(),
                Converter::<T>::type_name(self),
                raw,
                e,
            )
        })
    }
}

/// Registers types whose conversion is their `FromStr` implementation.
///
/// The macro expands to a [`FromRawValue`](crate::ports::FromRawValue) implementation
/// delegating to [`ScalarParser`](crate::adapters::ScalarParser), which is how the
/// crate registers its own numeric and address types. `T::Err` must implement
/// `std::error::Error + Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use typedcfg::impl_parsed_from_raw;
/// use typedcfg::service::ConfigStore;
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl std::str::FromStr for Port {
///     type Err = std::num::ParseIntError;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.parse().map(Port)
///     }
/// }
///
/// impl_parsed_from_raw!(Port);
///
/// let store = ConfigStore::builder().with_value("ports", vec!["80", "443"]).build();
/// let ports: Vec<Port> = store.get("ports").unwrap();
/// assert_eq!(ports, vec![Port(80), Port(443)]);
/// ```
#[macro_export]
macro_rules! impl_parsed_from_raw {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::ports::FromRawValue for $t {
                fn from_raw(
                    key: &$crate::domain::ConfigKey,
                    raw: &$crate::domain::RawValue,
                ) -> $crate::domain::Result<Self> {
                    $crate::ports::Converter::<$t>::convert(
                        &$crate::adapters::ScalarParser::<$t>::new(),
                        key,
                        raw,
                    )
                }
            }
        )*
    };
}

impl_parsed_from_raw!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);
impl_parsed_from_raw!(
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroUsize,
    NonZeroI32,
    NonZeroI64
);
impl_parsed_from_raw!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, PathBuf);

/// Accepts `true`, `yes`, `1`, `on` and `false`, `no`, `0`, `off`, ignoring case.
impl FromRawValue for bool {
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        let text = expect_scalar(key, raw, Self::type_name)?;
        match text.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => text
                .parse::<bool>()
                .map_err(|e| ConfigError::conversion_with_source(key.as_str(), "bool", raw, e)),
        }
    }

    fn type_name() -> String {
        "bool".to_string()
    }
}

/// Any scalar is a valid string, including the empty one.
impl FromRawValue for String {
    fn from_raw(key: &ConfigKey, raw: &RawValue) -> Result<Self> {
        expect_scalar(key, raw, Self::type_name).map(str::to_string)
    }

    fn type_name() -> String {
        "String".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::resolve;

    fn convert<T: FromRawValue>(raw: impl Into<RawValue>) -> Result<T> {
        resolve::<T>().convert(&ConfigKey::from("test.key"), &raw.into())
    }

    #[test]
    fn test_integers() {
        assert_eq!(convert::<i32>("42").unwrap(), 42);
        assert_eq!(convert::<i32>("-42").unwrap(), -42);
        assert_eq!(
            convert::<i64>("9223372036854775807").unwrap(),
            9223372036854775807
        );
        assert_eq!(
            convert::<u64>("18446744073709551615").unwrap(),
            18446744073709551615
        );
    }

    #[test]
    fn test_integer_invalid() {
        assert!(convert::<i32>("not_a_number").is_err());
        assert!(convert::<i32>("3.14").is_err());
        assert!(convert::<u32>("-42").is_err());
        assert!(convert::<u8>("256").is_err());
    }

    #[test]
    fn test_integer_is_not_trimmed() {
        assert!(convert::<i32>(" 42").is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(convert::<f64>("3.25").unwrap(), 3.25);
        assert_eq!(convert::<f32>("-0.5").unwrap(), -0.5);
        assert_eq!(convert::<f64>("10").unwrap(), 10.0);
        assert!(convert::<f64>("ten").is_err());
    }

    #[test]
    fn test_bool_variants() {
        for val in ["true", "True", "TRUE", "yes", "Yes", "1", "on", "ON"] {
            assert!(convert::<bool>(val).unwrap(), "Failed for value: {}", val);
        }
        for val in ["false", "False", "no", "NO", "0", "off", "Off"] {
            assert!(!convert::<bool>(val).unwrap(), "Failed for value: {}", val);
        }
        assert!(convert::<bool>("maybe").is_err());
        assert!(convert::<bool>("").is_err());
    }

    #[test]
    fn test_string_accepts_any_scalar() {
        assert_eq!(convert::<String>("  spaces  ").unwrap(), "  spaces  ");
        assert_eq!(convert::<String>("").unwrap(), "");
    }

    #[test]
    fn test_char() {
        assert_eq!(convert::<char>("x").unwrap(), 'x');
        assert!(convert::<char>("xy").is_err());
    }

    #[test]
    fn test_non_zero() {
        assert_eq!(convert::<NonZeroU16>("8").unwrap().get(), 8);
        assert!(convert::<NonZeroU16>("0").is_err());
    }

    #[test]
    fn test_addresses_and_paths() {
        let ip = convert::<IpAddr>("127.0.0.1").unwrap();
        assert_eq!(ip.to_string(), "127.0.0.1");
        let addr = convert::<SocketAddr>("[::1]:8080").unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(convert::<Ipv4Addr>("not_an_ip").is_err());
        assert_eq!(
            convert::<PathBuf>("/etc/app").unwrap(),
            PathBuf::from("/etc/app")
        );
    }

    #[test]
    fn test_composite_rejected_by_base_converter() {
        let err = convert::<i32>(vec!["1", "2"]).unwrap_err();
        match err {
            ConfigError::ConversionFailed {
                key,
                expected_type,
                raw_value,
                path,
                source,
            } => {
                assert_eq!(key, "test.key");
                assert_eq!(expected_type, "i32");
                assert_eq!(raw_value, "[1, 2]");
                assert!(path.is_empty());
                assert!(source.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_is_kept_as_source() {
        use std::error::Error as _;
        let err = convert::<u16>("bad").unwrap_err();
        assert!(err.source().is_some());
        assert_eq!(err.index(), None);
    }

    #[test]
    fn test_scalar_parser_for_unregistered_type() {
        #[derive(Debug, PartialEq)]
        struct Celsius(i16);

        impl FromStr for Celsius {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                s.trim_end_matches('C').parse().map(Celsius)
            }
        }

        let parser = ScalarParser::<Celsius>::new();
        let key = ConfigKey::from("limit");
        assert_eq!(
            parser.convert(&key, &RawValue::from("-5C")).unwrap(),
            Celsius(-5)
        );
        assert!(parser.convert(&key, &RawValue::from("warm")).is_err());
    }
}
