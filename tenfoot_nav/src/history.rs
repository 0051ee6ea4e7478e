// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded focus history.

use std::collections::VecDeque;

/// Bounded LIFO of previously focused elements.
///
/// When full, pushing drops the oldest entry. Entries are not validated on
/// push; [`pop_valid`](Self::pop_valid) discards ones that are no longer usable.
#[derive(Clone, Debug)]
pub struct NavigationHistory<K> {
    entries: VecDeque<K>,
    capacity: usize,
}

impl<K: Copy> NavigationHistory<K> {
    /// Create an empty history holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Remember `id`.
    pub fn push(&mut self, id: K) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(id);
    }

    /// Pop entries until one satisfies `is_valid`, returning it.
    ///
    /// Invalid entries are dropped along the way.
    pub fn pop_valid(&mut self, mut is_valid: impl FnMut(K) -> bool) -> Option<K> {
        while let Some(id) = self.entries.pop_back() {
            if is_valid(id) {
                return Some(id);
            }
        }
        None
    }

    /// Most recent entry.
    pub fn peek(&self) -> Option<K> {
        self.entries.back().copied()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
