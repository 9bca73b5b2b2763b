// SPDX-License-Identifier: MIT OR Apache-2.0

//! Location of a failing element inside a composite value.

use std::fmt;

/// One step from a composite value into one of its elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// Position within a sequence.
    Index(usize),
    /// Entry key within a mapping.
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "[{}]", i),
            PathSegment::Key(k) => write!(f, ".{}", k),
        }
    }
}

/// Path from the value stored under a key down to the element that failed conversion.
///
/// The path is empty when the stored value itself failed. It renders as a suffix to
/// the key, so `timeouts` with path `[2]` reads `timeouts[2]`.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::{ElementPath, PathSegment};
///
/// let mut path = ElementPath::default();
/// path.push_front(PathSegment::Index(0));
/// path.push_front(PathSegment::Key("pools".to_string()));
/// assert_eq!(path.to_string(), ".pools[0]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementPath(Vec<PathSegment>);

impl ElementPath {
    /// Prepends a segment, as done by a generator wrapping an inner failure.
    pub fn push_front(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns `true` when the stored value itself failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for ElementPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        ElementPath(segments)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
