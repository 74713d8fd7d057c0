// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Leaf descriptors for scalar types.
//!
//! Collection shapes bottom out at scalar children. A primitive descriptor
//! carries no child descriptors of its own; it only contributes a stable
//! serial name to equality and to the derived `{name}Array` canonical name
//! of primitive-array shapes.

/// Scalar type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
    String,
}

impl PrimitiveKind {
    /// Stable canonical name of this scalar kind.
    pub const fn serial_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
        }
    }
}

/// Descriptor for a scalar leaf type.
///
/// Immutable value object; equality and hash follow the kind (and thereby
/// the serial name), never identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveDescriptor {
    kind: PrimitiveKind,
}

impl PrimitiveDescriptor {
    /// Create a descriptor for the given scalar kind.
    pub const fn new(kind: PrimitiveKind) -> Self {
        Self { kind }
    }

    /// Scalar kind described by this descriptor.
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Canonical name, e.g. `"i32"` or `"string"`.
    pub const fn serial_name(&self) -> &'static str {
        self.kind.serial_name()
    }
}
