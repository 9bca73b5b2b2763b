// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store.
//!
//! This module contains `ConfigStore`, which owns the raw key/value bag and answers
//! typed lookups by delegating conversion to the registry.

pub mod config_store;

// Re-export commonly used types
pub use config_store::{ConfigStore, ConfigStoreBuilder};
