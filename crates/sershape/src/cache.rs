// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural deduplication of descriptors.
//!
//! Construction is not synchronized anywhere in this crate: two concurrent
//! requests for the same logical shape may build two distinct instances.
//! Because equality and hashing are purely structural, the cache can
//! deduplicate them post hoc and hand out one shared `Arc` per shape.
//! Correctness never depends on this cache, only allocation efficiency
//! does.

use crate::descriptor::Descriptor;
use dashmap::DashMap;
use log::trace;
use std::sync::Arc;

/// Interning cache keyed by structural equality.
///
/// Lock-free for concurrent readers; suitable as a process-wide registry
/// shared across encoder threads.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: DashMap<Descriptor, Arc<Descriptor>>,
}

impl DescriptorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical shared instance for `descriptor`.
    ///
    /// If a structurally equal descriptor was interned before, that `Arc`
    /// is returned and the argument is dropped; otherwise the argument
    /// becomes the canonical instance.
    pub fn intern(&self, descriptor: Descriptor) -> Arc<Descriptor> {
        if let Some(existing) = self.entries.get(&descriptor) {
            trace!("descriptor cache hit: {}", existing.serial_name());
            return Arc::clone(existing.value());
        }
        trace!("descriptor cache miss: {}", descriptor.serial_name());
        let shared = Arc::new(descriptor.clone());
        // A concurrent intern of an equal descriptor may race us here;
        // entry() keeps whichever Arc lands first so all callers converge.
        Arc::clone(
            self.entries
                .entry(descriptor)
                .or_insert(shared)
                .value(),
        )
    }

    /// Number of distinct shapes interned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all interned shapes. Outstanding `Arc`s stay valid.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
