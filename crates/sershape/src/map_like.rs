// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Two-child shape family: maps and other associative containers.
//!
//! A map-like shape owns exactly two child descriptors: the key type at
//! index 0 and the value type at index 1. Key and value are not
//! interchangeable; equality is order-sensitive.

use crate::descriptor::{Annotation, Descriptor, NO_ANNOTATIONS};
use crate::error::{parse_element_index, DescriptorError};
use crate::shape_kind::ShapeKind;
use std::sync::Arc;

/// Canonical name for insertion-ordered maps.
pub const ORDERED_MAP_NAME: &str = "indexmap.map.IndexMap";
/// Canonical name for unordered maps.
pub const UNORDERED_MAP_NAME: &str = "std.collections.HashMap";

/// Descriptor for two-child shapes.
///
/// Structural value object: equality and hash cover the serial name, the
/// key descriptor and the value descriptor (recursively), never identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapLikeDescriptor {
    serial_name: String,
    key: Arc<Descriptor>,
    value: Arc<Descriptor>,
}

impl MapLikeDescriptor {
    /// Caller-named variant for user-defined associative types.
    pub fn named(
        serial_name: impl Into<String>,
        key: Arc<Descriptor>,
        value: Arc<Descriptor>,
    ) -> Self {
        Self {
            serial_name: serial_name.into(),
            key,
            value,
        }
    }

    /// Insertion-ordered map ([`ORDERED_MAP_NAME`]).
    pub fn ordered_map(key: Arc<Descriptor>, value: Arc<Descriptor>) -> Self {
        Self::named(ORDERED_MAP_NAME, key, value)
    }

    /// Unordered map ([`UNORDERED_MAP_NAME`]).
    pub fn unordered_map(key: Arc<Descriptor>, value: Arc<Descriptor>) -> Self {
        Self::named(UNORDERED_MAP_NAME, key, value)
    }

    /// Shape kind, always [`ShapeKind::Map`].
    pub const fn kind(&self) -> ShapeKind {
        ShapeKind::Map
    }

    /// Canonical name of this shape.
    pub fn serial_name(&self) -> &str {
        &self.serial_name
    }

    /// Number of child descriptors, always 2.
    pub const fn elements_count(&self) -> usize {
        2
    }

    /// Key descriptor (index 0), shared with other holders.
    pub fn key(&self) -> &Arc<Descriptor> {
        &self.key
    }

    /// Value descriptor (index 1), shared with other holders.
    pub fn value(&self) -> &Arc<Descriptor> {
        &self.value
    }

    /// Decimal-string form of `index`. Pure formatting, no range check.
    pub fn element_name(&self, index: usize) -> String {
        index.to_string()
    }

    /// Parse an element name back into its index.
    pub fn element_index(&self, name: &str) -> Result<usize, DescriptorError> {
        parse_element_index(name)
    }

    /// Whether the element at `index` is individually optional.
    ///
    /// Neither key nor value ever is; valid indices are 0 and 1.
    pub fn is_element_optional(&self, index: usize) -> Result<bool, DescriptorError> {
        self.check_index(index)?;
        Ok(false)
    }

    /// Annotations attached to the element at `index`.
    ///
    /// The map-like family carries none; the slice is always empty for
    /// valid indices.
    pub fn element_annotations(&self, index: usize) -> Result<&[Annotation], DescriptorError> {
        self.check_index(index)?;
        Ok(NO_ANNOTATIONS)
    }

    /// Child descriptor at `index`: key at 0, value at 1.
    pub fn element_descriptor(&self, index: usize) -> Result<&Descriptor, DescriptorError> {
        match index {
            0 => Ok(&self.key),
            1 => Ok(&self.value),
            _ => Err(self.out_of_range(index)),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), DescriptorError> {
        if index <= 1 {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> DescriptorError {
        DescriptorError::ElementIndexOutOfRange {
            serial_name: self.serial_name.clone(),
            count: 2,
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{PrimitiveDescriptor, PrimitiveKind};

    fn prim(kind: PrimitiveKind) -> Arc<Descriptor> {
        Arc::new(Descriptor::Primitive(PrimitiveDescriptor::new(kind)))
    }

    #[test]
    fn test_map_contract() {
        let desc =
            MapLikeDescriptor::unordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::I32));
        assert_eq!(desc.kind(), ShapeKind::Map);
        assert_eq!(desc.serial_name(), UNORDERED_MAP_NAME);
        assert_eq!(desc.elements_count(), 2);
        assert_eq!(
            desc.element_descriptor(0).unwrap(),
            prim(PrimitiveKind::String).as_ref()
        );
        assert_eq!(
            desc.element_descriptor(1).unwrap(),
            prim(PrimitiveKind::I32).as_ref()
        );
    }

    #[test]
    fn test_name_index_round_trip() {
        let desc =
            MapLikeDescriptor::ordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::F64));
        for index in [0, 1] {
            assert_eq!(desc.element_index(&desc.element_name(index)).unwrap(), index);
        }
    }

    #[test]
    fn test_invalid_element_name() {
        let desc =
            MapLikeDescriptor::unordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::I32));
        assert!(matches!(
            desc.element_index("abc"),
            Err(DescriptorError::InvalidElementName { .. })
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        let desc =
            MapLikeDescriptor::unordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::I32));
        for index in [2, 3, 100] {
            assert!(matches!(
                desc.element_descriptor(index),
                Err(DescriptorError::ElementIndexOutOfRange { .. })
            ));
            assert!(matches!(
                desc.is_element_optional(index),
                Err(DescriptorError::ElementIndexOutOfRange { .. })
            ));
            assert!(matches!(
                desc.element_annotations(index),
                Err(DescriptorError::ElementIndexOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_never_optional_no_annotations() {
        let desc =
            MapLikeDescriptor::ordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::I32));
        for index in [0, 1] {
            assert_eq!(desc.is_element_optional(index), Ok(false));
            assert!(desc.element_annotations(index).unwrap().is_empty());
        }
    }

    #[test]
    fn test_key_value_order_sensitive() {
        let a =
            MapLikeDescriptor::unordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::I32));
        let b =
            MapLikeDescriptor::unordered_map(prim(PrimitiveKind::I32), prim(PrimitiveKind::String));
        assert_ne!(a, b);
    }

    #[test]
    fn test_structural_equality_and_name_inequality() {
        let a =
            MapLikeDescriptor::unordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::I32));
        let b =
            MapLikeDescriptor::unordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::I32));
        assert_eq!(a, b);

        let ordered =
            MapLikeDescriptor::ordered_map(prim(PrimitiveKind::String), prim(PrimitiveKind::I32));
        assert_ne!(a, ordered);

        let named = MapLikeDescriptor::named(
            "my_app.Index",
            prim(PrimitiveKind::String),
            prim(PrimitiveKind::I32),
        );
        assert_eq!(named.serial_name(), "my_app.Index");
        assert_ne!(a, named);
    }
}
