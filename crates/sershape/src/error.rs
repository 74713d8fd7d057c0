// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the descriptor contract.
//!
//! Both variants are precondition violations on the caller's side of the
//! contract: they point at a bug in traversal code, never at malformed
//! input data, and are reported synchronously at the call site.

use thiserror::Error;

/// Descriptor contract failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// `element_index` was called with a string that is not a valid
    /// non-negative integer.
    #[error("'{name}' is not a valid element index")]
    InvalidElementName {
        /// The offending name.
        name: String,
    },

    /// An indexed accessor was called with an index outside the valid
    /// range for the descriptor's family.
    #[error("descriptor '{serial_name}' has {count} child element(s), index: {index}")]
    ElementIndexOutOfRange {
        /// Canonical name of the descriptor that rejected the index.
        serial_name: String,
        /// Number of child elements the descriptor actually has.
        count: usize,
        /// The offending index.
        index: usize,
    },
}

/// Parse an element name back into its index.
///
/// Inverse of decimal index formatting: accepts exactly the non-negative
/// integer strings `usize` parses, rejects everything else (including
/// negative numbers).
pub(crate) fn parse_element_index(name: &str) -> Result<usize, DescriptorError> {
    name.parse::<usize>()
        .map_err(|_| DescriptorError::InvalidElementName {
            name: name.to_string(),
        })
}
