// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the registered converters.
//!
//! This module contains the concrete implementations of the converter ports: base
//! converters for primitive types and generator converters that build a converter for
//! a composite type out of the converter for its element type.
//!
//! | Shape     | Generator        | Registered for                                         |
//! |-----------|------------------|--------------------------------------------------------|
//! | scalar    | [`ScalarParser`] | numbers, `char`, non-zero ints, addresses, `PathBuf`   |
//! | sequence  | [`SequenceOf`]   | `Vec`, `VecDeque`, `BTreeSet`, `HashSet`, `[T; N]`     |
//! | optional  | [`OptionalOf`]   | `Option<T>`                                            |
//! | mapping   | [`MappingOf`]    | `BTreeMap<String, T>`, `HashMap<String, T>`            |
//! | delimited | [`Delimited`]    | explicit use only                                      |
//!
//! `bool` and `String` have hand-written registrations in [`scalar`].

pub mod delimited;
pub mod mapping;
pub mod optional;
pub mod scalar;
pub mod sequence;

// Re-export commonly used types
pub use delimited::Delimited;
pub use mapping::MappingOf;
pub use optional::OptionalOf;
pub use scalar::ScalarParser;
pub use sequence::SequenceOf;
