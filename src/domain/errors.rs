// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the errors a typed lookup can produce. All errors use
//! `thiserror` and are returned to the caller; a lookup never substitutes a fallback.

use crate::domain::element_path::{ElementPath, PathSegment};
use crate::domain::RawValue;
use thiserror::Error;

/// The main error type for typed configuration lookups.
///
/// Absence (`NotFound`) and malformed values (`ConversionFailed`) are distinct
/// variants so that callers can treat them differently.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::ConfigError;
///
/// fn lookup() -> Result<u16, ConfigError> {
///     Err(ConfigError::not_found("server.port"))
/// }
///
/// assert!(matches!(lookup(), Err(ConfigError::NotFound { .. })));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key is absent from the store.
    #[error("Configuration key not found: {key}")]
    NotFound {
        /// The key that was not found
        key: String,
    },

    /// No converter exists for the requested type.
    ///
    /// Lookups resolved through [`FromRawValue`](crate::ports::FromRawValue) reject
    /// such types at compile time. This variant is for converters that pick their
    /// strategy at run time.
    #[error("No converter available for type {type_name}")]
    UnsupportedType {
        /// The requested type
        type_name: String,
    },

    /// The stored value cannot be converted to the requested type.
    #[error(
        "Failed to convert configuration value '{raw_value}' for key '{key}{path}' to type {expected_type}"
    )]
    ConversionFailed {
        /// The key whose value failed
        key: String,
        /// The type the failing element was converted to
        expected_type: String,
        /// The failing element, rendered as text
        raw_value: String,
        /// Location of the failing element inside a composite value
        path: ElementPath,
        /// The underlying parse error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `NotFound` error.
    pub fn not_found(key: impl Into<String>) -> Self {
        ConfigError::NotFound { key: key.into() }
    }

    /// Creates an `UnsupportedType` error naming `T`.
    pub fn unsupported_type<T: ?Sized>() -> Self {
        ConfigError::UnsupportedType {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Creates a `ConversionFailed` error for a value of the wrong shape.
    pub fn conversion(
        key: impl Into<String>,
        expected_type: impl Into<String>,
        raw: &RawValue,
    ) -> Self {
        ConfigError::ConversionFailed {
            key: key.into(),
            expected_type: expected_type.into(),
            raw_value: raw.to_string(),
            path: ElementPath::default(),
            source: None,
        }
    }

    /// Creates a `ConversionFailed` error that wraps a parse error.
    pub fn conversion_with_source<E>(
        key: impl Into<String>,
        expected_type: impl Into<String>,
        raw: &RawValue,
        source: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::ConversionFailed {
            key: key.into(),
            expected_type: expected_type.into(),
            raw_value: raw.to_string(),
            path: ElementPath::default(),
            source: Some(Box::new(source)),
        }
    }

    /// Records that this failure happened at position `index` of a sequence.
    ///
    /// Other variants are returned unchanged.
    pub fn at_index(self, index: usize) -> Self {
        self.prepend(PathSegment::Index(index))
    }

    /// Records that this failure happened under `key` of a mapping.
    pub fn at_key(self, key: impl Into<String>) -> Self {
        self.prepend(PathSegment::Key(key.into()))
    }

    fn prepend(mut self, segment: PathSegment) -> Self {
        if let ConfigError::ConversionFailed { path, .. } = &mut self {
            path.push_front(segment);
        }
        self
    }

    /// The outermost sequence index of a failed conversion.
    ///
    /// Returns `None` for other variants and when the failure is not inside a sequence.
    pub fn index(&self) -> Option<usize> {
        match self {
            ConfigError::ConversionFailed { path, .. } => match path.segments().first() {
                Some(PathSegment::Index(i)) => Some(*i),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
