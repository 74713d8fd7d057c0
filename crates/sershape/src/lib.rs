// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # sershape - structural shape descriptors
//!
//! Describes the *shape* of collection-like values (lists, arrays, sets,
//! maps) independently of their concrete runtime representation, so
//! format-specific encoders and decoders can traverse any such value
//! generically.
//!
//! ## Quick Start
//!
//! ```rust
//! use sershape::{Descriptor, ListLikeDescriptor, MapLikeDescriptor};
//! use sershape::{PrimitiveDescriptor, PrimitiveKind, ShapeKind};
//! use std::sync::Arc;
//!
//! let string = Arc::new(Descriptor::from(PrimitiveDescriptor::new(PrimitiveKind::String)));
//! let i32_ = Arc::new(Descriptor::from(PrimitiveDescriptor::new(PrimitiveKind::I32)));
//!
//! // "map of string to list of i32"
//! let list = Arc::new(Descriptor::from(ListLikeDescriptor::list(i32_)));
//! let map = MapLikeDescriptor::unordered_map(string, list);
//!
//! assert_eq!(map.kind(), ShapeKind::Map);
//! assert_eq!(map.elements_count(), 2);
//! assert_eq!(map.element_descriptor(0).unwrap().serial_name(), "string");
//! ```
//!
//! ## Model
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Descriptor`] | Closed union: scalar leaf, list-like, or map-like |
//! | [`ListLikeDescriptor`] | Single-child shapes (arrays, lists, sets) |
//! | [`MapLikeDescriptor`] | Two-child shapes (maps), key at 0, value at 1 |
//! | [`PrimitiveDescriptor`] | Scalar leaf with a fixed canonical name |
//! | [`DescriptorCache`] | Post-hoc deduplication keyed by structural equality |
//!
//! Descriptors are immutable value objects. Equality and hashing are
//! structural over `(serial_name, children)`; independently constructed
//! descriptors of the same logical shape are interchangeable. All
//! operations are synchronous, pure computations; concurrent reads need
//! no locking.
//!
//! Element addressing is positional with a decimal-string name mapping:
//! `element_name(i)` is `i.to_string()` and `element_index` is its exact
//! inverse, failing on non-numeric input. Neither family supports
//! per-element optionality or annotations.

mod cache;
mod descriptor;
mod error;
mod list_like;
mod map_like;
mod primitive;
mod shape_kind;

pub use cache::DescriptorCache;
pub use descriptor::{Annotation, Descriptor};
pub use error::DescriptorError;
pub use list_like::{
    ListLikeDescriptor, ARRAY_NAME, LIST_NAME, ORDERED_SET_NAME, UNORDERED_SET_NAME,
};
pub use map_like::{MapLikeDescriptor, ORDERED_MAP_NAME, UNORDERED_MAP_NAME};
pub use primitive::{PrimitiveDescriptor, PrimitiveKind};
pub use shape_kind::ShapeKind;
