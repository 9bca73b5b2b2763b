// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed lookups over a bag of untyped configuration values.
//!
//! This crate fetches strongly-typed values out of a string-keyed collection of raw
//! configuration values without a dedicated accessor per type. The caller names the
//! type it wants; the compiler picks the matching converter.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `RawValue`, errors)
//! - **Ports**: Trait definitions for conversion (`Converter`, `FromRawValue`)
//! - **Adapters**: The registered converters, for primitives and composite shapes
//! - **Registry**: Type-directed resolution of the converter for a requested type
//! - **Service**: `ConfigStore`, the immutable bag answering typed lookups
//!
//! # Features
//!
//! - **Type Safety**: Asking for a type with no converter is a compile error
//! - **Composable**: `Vec<T>`, `Option<T>`, maps and sets work for every registered `T`
//! - **Extensible**: One `FromRawValue` impl registers a new type everywhere
//! - **Precise Errors**: Missing keys and malformed values are distinct errors, and
//!   failures inside composite values name the failing element
//!
//! Loading configuration is left to the caller. `RawValue` and `ConfigStore` implement
//! serde's `Deserialize`, so any serde format crate can produce a store.
//!
//! # Quick Start
//!
//! ```rust
//! use typedcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = ConfigStore::builder()
//!     .with_value("retries", "3")
//!     .with_value("timeouts", vec!["10", "20", "30"])
//!     .build();
//!
//! let retries: u32 = store.get("retries")?;
//! let timeouts: Vec<u64> = store.get("timeouts")?;
//! let proxy: Option<String> = store.get_optional("proxy")?;
//!
//! assert_eq!(retries, 3);
//! assert_eq!(timeouts, vec![10, 20, 30]);
//! assert_eq!(proxy, None);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{Delimited, MappingOf, OptionalOf, ScalarParser, SequenceOf};
    pub use crate::domain::{ConfigError, ConfigKey, RawValue, Result};
    pub use crate::ports::{Converter, FnConverter, FromRawValue};
    pub use crate::registry::resolve;
    pub use crate::service::{ConfigStore, ConfigStoreBuilder};
}
