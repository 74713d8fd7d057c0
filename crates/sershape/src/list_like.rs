// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Single-child shape family: arrays, lists and sets.
//!
//! Every list-like shape owns exactly one child descriptor (the element
//! type) and a canonical serial name. The concrete variants differ only in
//! the name they fix; the contract is shared.

use crate::descriptor::{Annotation, Descriptor, NO_ANNOTATIONS};
use crate::error::{parse_element_index, DescriptorError};
use crate::primitive::PrimitiveDescriptor;
use crate::shape_kind::ShapeKind;
use std::sync::Arc;

/// Canonical name for fixed-size generic arrays.
pub const ARRAY_NAME: &str = "core.array.Array";
/// Canonical name for ordered growable lists.
pub const LIST_NAME: &str = "alloc.vec.Vec";
/// Canonical name for insertion-ordered sets.
pub const ORDERED_SET_NAME: &str = "indexmap.set.IndexSet";
/// Canonical name for unordered sets.
pub const UNORDERED_SET_NAME: &str = "std.collections.HashSet";

/// Descriptor for single-child shapes.
///
/// Structural value object: equality and hash cover the serial name and the
/// element descriptor (recursively), never identity. Two independently
/// constructed descriptors of the same logical shape are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListLikeDescriptor {
    serial_name: String,
    element: Arc<Descriptor>,
}

impl ListLikeDescriptor {
    /// Caller-named variant for user-defined sequence types.
    pub fn named(serial_name: impl Into<String>, element: Arc<Descriptor>) -> Self {
        Self {
            serial_name: serial_name.into(),
            element,
        }
    }

    /// Ordered growable list ([`LIST_NAME`]).
    pub fn list(element: Arc<Descriptor>) -> Self {
        Self::named(LIST_NAME, element)
    }

    /// Generic fixed-size array ([`ARRAY_NAME`]).
    pub fn array(element: Arc<Descriptor>) -> Self {
        Self::named(ARRAY_NAME, element)
    }

    /// Specialized primitive array, e.g. an `i32` buffer.
    ///
    /// The canonical name is derived from the wrapped scalar's own name,
    /// `"{primitive}Array"`, so each primitive array is a distinct shape.
    pub fn primitive_array(primitive: PrimitiveDescriptor) -> Self {
        let serial_name = format!("{}Array", primitive.serial_name());
        Self {
            serial_name,
            element: Arc::new(Descriptor::Primitive(primitive)),
        }
    }

    /// Insertion-ordered set ([`ORDERED_SET_NAME`]).
    pub fn ordered_set(element: Arc<Descriptor>) -> Self {
        Self::named(ORDERED_SET_NAME, element)
    }

    /// Unordered set ([`UNORDERED_SET_NAME`]).
    pub fn unordered_set(element: Arc<Descriptor>) -> Self {
        Self::named(UNORDERED_SET_NAME, element)
    }

    /// Shape kind, always [`ShapeKind::List`].
    pub const fn kind(&self) -> ShapeKind {
        ShapeKind::List
    }

    /// Canonical name of this shape.
    pub fn serial_name(&self) -> &str {
        &self.serial_name
    }

    /// Number of child descriptors, always 1.
    pub const fn elements_count(&self) -> usize {
        1
    }

    /// Element descriptor, shared with other holders.
    pub fn element(&self) -> &Arc<Descriptor> {
        &self.element
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
    /// List elements never are; the only valid index is 0.
    pub fn is_element_optional(&self, index: usize) -> Result<bool, DescriptorError> {
        self.check_index(index)?;
        Ok(false)
    }

    /// Annotations attached to the element at `index`.
    ///
    /// The list-like family carries none; the slice is always empty for
    /// the valid index.
    pub fn element_annotations(&self, index: usize) -> Result<&[Annotation], DescriptorError> {
        self.check_index(index)?;
        Ok(NO_ANNOTATIONS)
    }

    /// Child descriptor at `index`. Only index 0 is valid.
    pub fn element_descriptor(&self, index: usize) -> Result<&Descriptor, DescriptorError> {
        self.check_index(index)?;
        Ok(&self.element)
    }

    fn check_index(&self, index: usize) -> Result<(), DescriptorError> {
        if index == 0 {
            Ok(())
        } else {
            Err(DescriptorError::ElementIndexOutOfRange {
                serial_name: self.serial_name.clone(),
                count: 1,
                index,
            })
        }
    }
}
