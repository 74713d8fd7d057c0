// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The descriptor union consumed by generic traversal code.
//!
//! Encoders and decoders hold an `Arc<Descriptor>` and recurse: branch on
//! the variant, query the child count, then fetch child descriptors by
//! index. The set of variants is closed; no open-ended subclassing exists
//! in this model.

use crate::error::DescriptorError;
use crate::list_like::ListLikeDescriptor;
use crate::map_like::MapLikeDescriptor;
use crate::primitive::PrimitiveDescriptor;
use crate::shape_kind::ShapeKind;
use std::fmt;

/// Metadata attached to a descriptor element by a framework's derive layer.
///
/// The collection families never carry any; the type exists so the
/// `element_annotations` contract has a concrete element type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    /// Annotation name, e.g. `"rename"`.
    pub name: String,
    /// Optional argument.
    pub value: Option<String>,
}

/// Shared empty slice for families that support no annotations.
pub(crate) const NO_ANNOTATIONS: &[Annotation] = &[];

/// A complete descriptor: scalar leaf or collection shape.
///
/// Immutable value object. Equality and hash are structural over the serial
/// name and child descriptors, so independently constructed descriptors of
/// the same logical shape compare equal and can be deduplicated by a cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// Scalar leaf type, no children.
    Primitive(PrimitiveDescriptor),
    /// Single-child shape (array, list, set).
    ListLike(ListLikeDescriptor),
    /// Two-child shape (map).
    MapLike(MapLikeDescriptor),
}

impl Descriptor {
    /// Canonical name of the described type.
    pub fn serial_name(&self) -> &str {
        match self {
            Self::Primitive(p) => p.serial_name(),
            Self::ListLike(l) => l.serial_name(),
            Self::MapLike(m) => m.serial_name(),
        }
    }

    /// Collection shape kind, `None` for scalar leaves.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Self::Primitive(_) => None,
            Self::ListLike(_) => Some(ShapeKind::List),
            Self::MapLike(_) => Some(ShapeKind::Map),
        }
    }

    /// Number of child descriptors: 0, 1 or 2.
    pub fn elements_count(&self) -> usize {
        match self {
            Self::Primitive(_) => 0,
            Self::ListLike(l) => l.elements_count(),
            Self::MapLike(m) => m.elements_count(),
        }
    }

    /// Child descriptor at `index`, delegating to the shape family.
    ///
    /// Scalar leaves have no children, so every index is out of range.
    pub fn element_descriptor(&self, index: usize) -> Result<&Descriptor, DescriptorError> {
        match self {
            Self::Primitive(p) => Err(DescriptorError::ElementIndexOutOfRange {
                serial_name: p.serial_name().to_string(),
                count: 0,
                index,
            }),
            Self::ListLike(l) => l.element_descriptor(index),
            Self::MapLike(m) => m.element_descriptor(index),
        }
    }

    /// Check if this is a scalar leaf.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Get the list-like shape, if this is one.
    pub fn as_list_like(&self) -> Option<&ListLikeDescriptor> {
        match self {
            Self::ListLike(l) => Some(l),
            _ => None,
        }
    }

    /// Get the map-like shape, if this is one.
    pub fn as_map_like(&self) -> Option<&MapLikeDescriptor> {
        match self {
            Self::MapLike(m) => Some(m),
            _ => None,
        }
    }
}

impl From<PrimitiveDescriptor> for Descriptor {
    fn from(value: PrimitiveDescriptor) -> Self {
        Self::Primitive(value)
    }
}

impl From<ListLikeDescriptor> for Descriptor {
    fn from(value: ListLikeDescriptor) -> Self {
        Self::ListLike(value)
    }
}

impl From<MapLikeDescriptor> for Descriptor {
    fn from(value: MapLikeDescriptor) -> Self {
        Self::MapLike(value)
    }
}

impl fmt::Display for Descriptor {
    /// Renders `name<child, ...>`, e.g. `alloc.vec.Vec<string>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{}", p.serial_name()),
            Self::ListLike(l) => write!(f, "{}<{}>", l.serial_name(), l.element()),
            Self::MapLike(m) => {
                write!(f, "{}<{}, {}>", m.serial_name(), m.key(), m.value())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::PrimitiveKind;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::sync::Arc;

    fn hash_of(desc: &Descriptor) -> u64 {
        let mut hasher = DefaultHasher::new();
        desc.hash(&mut hasher);
        hasher.finish()
    }

    fn string_desc() -> Arc<Descriptor> {
        Arc::new(PrimitiveDescriptor::new(PrimitiveKind::String).into())
    }

    fn i32_desc() -> Arc<Descriptor> {
        Arc::new(PrimitiveDescriptor::new(PrimitiveKind::I32).into())
    }

    #[test]
    fn test_shape_kind_and_counts() {
        let prim = string_desc();
        let list: Descriptor = ListLikeDescriptor::list(prim.clone()).into();
        let map: Descriptor = MapLikeDescriptor::unordered_map(prim.clone(), i32_desc()).into();

        assert_eq!(prim.shape_kind(), None);
        assert_eq!(prim.elements_count(), 0);
        assert_eq!(list.shape_kind(), Some(ShapeKind::List));
        assert_eq!(list.elements_count(), 1);
        assert_eq!(map.shape_kind(), Some(ShapeKind::Map));
        assert_eq!(map.elements_count(), 2);
    }

    #[test]
    fn test_primitive_children_out_of_range() {
        let prim = string_desc();
        assert!(matches!(
            prim.element_descriptor(0),
            Err(DescriptorError::ElementIndexOutOfRange { count: 0, .. })
        ));
    }

    #[test]
    fn test_equal_descriptors_hash_equal() {
        let a: Descriptor = ListLikeDescriptor::list(string_desc()).into();
        let b: Descriptor = ListLikeDescriptor::list(string_desc()).into();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let m1: Descriptor = MapLikeDescriptor::ordered_map(string_desc(), i32_desc()).into();
        let m2: Descriptor = MapLikeDescriptor::ordered_map(string_desc(), i32_desc()).into();
        assert_eq!(m1, m2);
        assert_eq!(hash_of(&m1), hash_of(&m2));
    }

    #[test]
    fn test_cross_family_inequality() {
        let list: Descriptor = ListLikeDescriptor::list(string_desc()).into();
        let prim = string_desc();
        assert_ne!(list, *prim);
    }

    #[test]
    fn test_display() {
        let list: Descriptor = ListLikeDescriptor::list(string_desc()).into();
        assert_eq!(list.to_string(), "alloc.vec.Vec<string>");

        let nested: Descriptor =
            MapLikeDescriptor::unordered_map(string_desc(), Arc::new(list)).into();
        assert_eq!(
            nested.to_string(),
            "std.collections.HashMap<string, alloc.vec.Vec<string>>"
        );
    }

    #[test]
    fn test_accessors() {
        let list: Descriptor = ListLikeDescriptor::list(string_desc()).into();
        assert!(list.as_list_like().is_some());
        assert!(list.as_map_like().is_none());
        assert!(!list.is_primitive());
        assert!(string_desc().is_primitive());
    }
}
