// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the types every other layer speaks in: keys, untyped raw
//! values and the error taxonomy of typed lookups.

pub mod config_key;
pub mod element_path;
pub mod errors;
pub mod raw_value;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use element_path::{ElementPath, PathSegment};
pub use errors::{ConfigError, Result};
pub use raw_value::RawValue;
