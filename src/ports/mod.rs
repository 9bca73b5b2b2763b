// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define how raw values are
//! converted into typed ones. The converters in the adapters layer implement them.

pub mod converter;

// Re-export commonly used types
pub use converter::{Converter, FnConverter, FromRawValue};
