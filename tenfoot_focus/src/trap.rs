// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus traps: nested modal scopes that confine navigation.

use alloc::vec::Vec;

use crate::source::GeometrySource;

/// A modal scope restricting navigation to its descendants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusTrap<K> {
    /// Root element of the trap; only it and its descendants are reachable.
    pub scope_root: K,
    /// Element that held focus when the trap was opened.
    pub previous_focus: Option<K>,
    /// Host timestamp (milliseconds) at which the trap was opened.
    pub created_at: u64,
}

/// Stack of open focus traps; only the top one constrains navigation.
///
/// A scope root appears at most once. Traps may be closed out of order, in
/// which case the remaining stack keeps its relative order.
#[derive(Clone, Debug)]
pub struct FocusTrapStack<K> {
    traps: Vec<FocusTrap<K>>,
}

impl<K> Default for FocusTrapStack<K> {
    fn default() -> Self {
        Self { traps: Vec::new() }
    }
}

impl<K> FocusTrapStack<K>
where
    K: Copy + Eq,
{
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a trap rooted at `scope_root`.
    ///
    /// Returns `false` and leaves the stack unchanged if a trap with that root
    /// is already open.
    pub fn push(&mut self, scope_root: K, previous_focus: Option<K>, now: u64) -> bool {
        if self.traps.iter().any(|t| t.scope_root == scope_root) {
            return false;
        }
        self.traps.push(FocusTrap {
            scope_root,
            previous_focus,
            created_at: now,
        });
        true
    }

    /// Close the trap rooted at `scope_root`, wherever it sits in the stack.
    pub fn pop(&mut self, scope_root: K) -> Option<FocusTrap<K>> {
        let index = self.traps.iter().rposition(|t| t.scope_root == scope_root)?;
        Some(self.traps.remove(index))
    }

    /// The trap currently constraining navigation.
    pub fn top(&self) -> Option<&FocusTrap<K>> {
        self.traps.last()
    }

    /// Whether `candidate` is reachable under the current trap.
    ///
    /// Always `true` when no trap is open.
    pub fn contains<S>(&self, source: &S, candidate: K) -> bool
    where
        S: GeometrySource<K> + ?Sized,
    {
        self.top()
            .is_none_or(|trap| source.contains(trap.scope_root, candidate))
    }

    /// Whether any trap with root `scope_root` is open.
    pub fn is_open(&self, scope_root: K) -> bool {
        self.traps.iter().any(|t| t.scope_root == scope_root)
    }

    /// Whether no traps are open.
    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
    }

    /// Number of open traps.
    pub fn len(&self) -> usize {
        self.traps.len()
    }

    /// Open traps from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &FocusTrap<K>> + '_ {
        self.traps.iter()
    }

    /// Close every trap, returning them bottom to top.
    pub fn clear(&mut self) -> Vec<FocusTrap<K>> {
        core::mem::take(&mut self.traps)
    }
}
