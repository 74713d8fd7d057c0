// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape kinds for collection-like descriptors.
//!
//! The descriptor model covers exactly two shape families: single-child
//! sequences and two-child associative containers. No third family exists,
//! so the kind set is closed.

use std::fmt;

/// Kind of a collection-like shape.
///
/// Drives generic traversal: encoders branch on the kind to decide whether
/// a value contributes one child type (element) or two (key and value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Single-child shapes: arrays, lists, sets.
    List,
    /// Two-child shapes: maps and other associative containers.
    Map,
}

impl ShapeKind {
    /// Number of child descriptors a shape of this kind owns.
    ///
    /// Fixed by the family: 1 for [`ShapeKind::List`], 2 for
    /// [`ShapeKind::Map`]. Never 0.
    pub const fn elements_count(self) -> usize {
        match self {
            Self::List => 1,
            Self::Map => 2,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Map => write!(f, "map"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_count_fixed_by_kind() {
        assert_eq!(ShapeKind::List.elements_count(), 1);
        assert_eq!(ShapeKind::Map.elements_count(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(ShapeKind::List.to_string(), "list");
        assert_eq!(ShapeKind::Map.to_string(), "map");
    }
}
