// Copyright 2025 the Dragover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragover Registry: reference-counted keyed registries for UI element bookkeeping.
//!
//! This crate provides [`Registry`], a small keyed container that tracks one
//! value per identifier together with a count of the registrations currently
//! outstanding for that identifier. It exists because declarative UI layers do
//! not guarantee ordering between lifecycle events: when an element is
//! unmounted and immediately remounted under a reused identifier, the
//! remount's "add" frequently arrives *before* the stale unmount's "remove".
//! A naive map (overwrite on add, delete on remove) would then drop the live
//! registration the moment the stale remove fires.
//!
//! [`Registry`] decouples "is this identifier currently registered" from "how
//! many registrations reference it": an entry survives as long as at least one
//! add has not yet been matched by a remove, and the most recent add or update
//! always supplies the current value.
//!
//! ## Reference counting
//!
//! - [`Registry::add`] inserts an entry with count 1, or increments the count
//!   and refreshes the value when the identifier is already present.
//! - [`Registry::update`] refreshes the value in place without touching the
//!   count, and silently ignores identifiers that were never added (a late
//!   geometry callback arriving before mount completes is expected, not an
//!   error).
//! - [`Registry::remove`] decrements the count and only deletes the entry when
//!   the count returns to zero. Removing an absent identifier is a no-op.
//!
//! ## Minimal example
//!
//! ```rust
//! use dragover_registry::Registry;
//!
//! let mut registry = Registry::new();
//!
//! // Remount races mount: the second add lands before the first remove.
//! registry.add("card", 10_u32);
//! registry.add("card", 20);
//! assert_eq!(registry.ref_count(&"card"), 2);
//!
//! // The stale remove fires; the live registration survives with the
//! // refreshed value.
//! registry.remove(&"card");
//! assert_eq!(registry.get(&"card"), Some(&20));
//!
//! // The matching remove finally retires the entry.
//! registry.remove(&"card");
//! assert!(registry.get(&"card").is_none());
//! ```
//!
//! ## Key bounds
//!
//! Keys only need `PartialEq`; no hashing or ordering constraints are imposed.
//! Entries live in a small `Vec` and lookups scan by equality, which is the
//! right trade for the tens of on-screen elements this container is built for
//! and keeps it easy to integrate with application identifier types (integers,
//! UUIDs, strings, generational handles). Iteration order is stable within one
//! registry instance but is not part of the API contract.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// One registered identifier: its value plus the outstanding registration count.
#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    /// Number of `add` calls not yet matched by a `remove`. Always >= 1 while
    /// the entry exists.
    count: usize,
    value: V,
}

/// A keyed value store whose entries are retained by reference counting.
///
/// Each entry co-locates its key, value, and registration count, so a whole
/// registration is updated atomically within one operation; no shared
/// aliasing is involved. All operations are total: absent identifiers degrade
/// to no-ops or `None`, never to errors, because UI lifecycle events are
/// allowed to race gesture callbacks.
///
/// # Example
///
/// ```rust
/// use dragover_registry::Registry;
///
/// let mut frames = Registry::new();
/// frames.add(7_u64, (0.0, 0.0, 50.0, 50.0));
///
/// // Geometry callback after a relayout: same registration, new value.
/// frames.update(&7, (10.0, 0.0, 60.0, 50.0));
/// assert_eq!(frames.ref_count(&7), 1);
///
/// frames.remove(&7);
/// assert!(frames.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Registry<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Registry<K, V> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of distinct identifiers currently registered.
    ///
    /// An identifier registered several times over still counts once here;
    /// see [`Registry::ref_count`] for the per-identifier count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no identifiers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over `(key, value)` pairs.
    ///
    /// The order is stable within a single registry instance but carries no
    /// semantics; callers must not rely on any particular ordering.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Removes every entry regardless of its registration count.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> Registry<K, V>
where
    K: PartialEq,
{
    /// Registers `key`, inserting or retaining it.
    ///
    /// If `key` is absent it is inserted with a count of 1. If it is already
    /// present the count is incremented and the stored value is overwritten:
    /// the most recent registration always supplies the current value. This
    /// operation never fails.
    pub fn add(&mut self, key: K, value: V) {
        match self.position_of(&key) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.count += 1;
                entry.value = value;
            }
            None => self.entries.push(Entry {
                key,
                count: 1,
                value,
            }),
        }
    }

    /// Refreshes the value stored for `key`, leaving its count untouched.
    ///
    /// Returns `true` if the entry was present. An update for an identifier
    /// that was never added is a silent no-op returning `false`; the supplied
    /// value is dropped.
    pub fn update(&mut self, key: &K, value: V) -> bool {
        match self.position_of(key) {
            Some(idx) => {
                self.entries[idx].value = value;
                true
            }
            None => false,
        }
    }

    /// Releases one registration of `key`.
    ///
    /// Decrements the count when more than one registration is outstanding;
    /// deletes the entry when the last registration is released. Removing an
    /// absent identifier is a no-op. Returns `true` only when this call
    /// deleted the entry outright.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(idx) = self.position_of(key) else {
            return false;
        };
        if self.entries[idx].count > 1 {
            self.entries[idx].count -= 1;
            false
        } else {
            self.entries.remove(idx);
            true
        }
    }

    /// Returns the value registered for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.position_of(key).map(|idx| &self.entries[idx].value)
    }

    /// Returns the stored key and value for `key`, if any.
    ///
    /// The returned key reference borrows from the registry, which lets
    /// callers hand out an identifier whose lifetime is tied to the entry
    /// rather than to their own lookup key.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.position_of(key)
            .map(|idx| (&self.entries[idx].key, &self.entries[idx].value))
    }

    /// Returns `true` if `key` is currently registered.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.position_of(key).is_some()
    }

    /// Returns the number of outstanding registrations for `key`.
    ///
    /// Absent identifiers report 0; present ones always report at least 1.
    #[must_use]
    pub fn ref_count(&self, key: &K) -> usize {
        self.position_of(key)
            .map_or(0, |idx| self.entries[idx].count)
    }

    /// Returns the position of `key` within the entry vector, if present.
    fn position_of(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.key == key)
    }
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
