// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus registry: derive eligible candidates from a geometry source.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::element::ElementInfo;
use crate::resolve::Candidate;
use crate::source::GeometrySource;
use crate::trap::FocusTrapStack;

/// Predicate over element descriptions, used to override focusable/skip filters.
pub type ElementPredicate = Box<dyn Fn(&ElementInfo) -> bool>;

/// The current set of eligible focus candidates.
///
/// An element is eligible when all of the following hold:
/// - it passes the focusable predicate, or was explicitly [registered](Self::register);
/// - it was not explicitly [unregistered](Self::unregister);
/// - it does not match the skip predicate;
/// - the geometry source reports it visible and has bounds for it;
/// - it lies inside the active scope, if there is one.
///
/// [`refresh_in`](Self::refresh_in) recomputes the set from scratch and has no
/// other side effects, so calling it twice without an intervening UI change
/// yields the same set. The order follows the source's document order, but
/// callers should not rely on it for anything other than "first eligible".
pub struct FocusRegistry<K> {
    focusable: ElementPredicate,
    skip: ElementPredicate,
    registered: HashSet<K>,
    unregistered: HashSet<K>,
    candidates: Vec<Candidate<K>>,
    scope: Option<K>,
    stale: bool,
}

impl<K: core::fmt::Debug> core::fmt::Debug for FocusRegistry<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusRegistry")
            .field("registered", &self.registered.len())
            .field("unregistered", &self.unregistered.len())
            .field("candidates", &self.candidates.len())
            .field("scope", &self.scope)
            .field("stale", &self.stale)
            .finish_non_exhaustive()
    }
}

impl<K> Default for FocusRegistry<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FocusRegistry<K>
where
    K: Copy + Eq + Hash,
{
    /// Create an empty, stale registry using the default predicates.
    pub fn new() -> Self {
        Self {
            focusable: Box::new(ElementInfo::is_default_focusable),
            skip: Box::new(ElementInfo::is_default_skipped),
            registered: HashSet::new(),
            unregistered: HashSet::new(),
            candidates: Vec::new(),
            scope: None,
            stale: true,
        }
    }

    /// Replace the focusable capability filter.
    pub fn set_focusable_predicate(&mut self, predicate: impl Fn(&ElementInfo) -> bool + 'static) {
        self.focusable = Box::new(predicate);
        self.stale = true;
    }

    /// Replace the skip filter.
    pub fn set_skip_predicate(&mut self, predicate: impl Fn(&ElementInfo) -> bool + 'static) {
        self.skip = Box::new(predicate);
        self.stale = true;
    }

    /// Treat `id` as focusable even if the focusable predicate rejects it.
    ///
    /// Returns `true` if this changed the registry.
    pub fn register(&mut self, id: K) -> bool {
        let removed = self.unregistered.remove(&id);
        let inserted = self.registered.insert(id);
        self.stale |= removed || inserted;
        removed || inserted
    }

    /// Exclude `id` from the candidate set even if the focusable predicate accepts it.
    ///
    /// Returns `true` if this changed the registry.
    pub fn unregister(&mut self, id: K) -> bool {
        let removed = self.registered.remove(&id);
        let inserted = self.unregistered.insert(id);
        self.stale |= removed || inserted;
        removed || inserted
    }

    /// Recompute the candidate set, restricted to the top trap's scope if any.
    pub fn refresh<S>(&mut self, source: &S, traps: &FocusTrapStack<K>) -> &[Candidate<K>]
    where
        S: GeometrySource<K> + ?Sized,
    {
        self.refresh_in(source, traps.top().map(|t| t.scope_root))
    }

    /// Recompute the candidate set, restricted to `scope` if given.
    pub fn refresh_in<S>(&mut self, source: &S, scope: Option<K>) -> &[Candidate<K>]
    where
        S: GeometrySource<K> + ?Sized,
    {
        self.candidates.clear();
        for id in source.elements() {
            if !self.passes_filters(source, id, scope) {
                continue;
            }
            if let Some(rect) = source.rect_of(id) {
                self.candidates.push(Candidate { id, rect });
            }
        }
        self.scope = scope;
        self.stale = false;
        &self.candidates
    }

    /// Whether `id` would be part of the candidate set for `scope` right now.
    ///
    /// This consults the source directly and does not depend on the last refresh.
    pub fn is_eligible<S>(&self, source: &S, id: K, scope: Option<K>) -> bool
    where
        S: GeometrySource<K> + ?Sized,
    {
        self.passes_filters(source, id, scope) && source.rect_of(id).is_some()
    }

    fn passes_filters<S>(&self, source: &S, id: K, scope: Option<K>) -> bool
    where
        S: GeometrySource<K> + ?Sized,
    {
        if self.unregistered.contains(&id) {
            return false;
        }
        let Some(info) = source.info_of(id) else {
            return false;
        };
        let focusable = self.registered.contains(&id) || (self.focusable)(&info);
        if !focusable || (self.skip)(&info) || !source.is_visible(id) {
            return false;
        }
        scope.is_none_or(|root| source.contains(root, id))
    }

    /// Candidates computed by the last refresh.
    pub fn candidates(&self) -> &[Candidate<K>] {
        &self.candidates
    }

    /// Scope used by the last refresh.
    pub fn scope(&self) -> Option<K> {
        self.scope
    }

    /// Whether `id` was eligible at the last refresh.
    pub fn contains(&self, id: K) -> bool {
        self.candidates.iter().any(|c| c.id == id)
    }

    /// First eligible candidate in document order at the last refresh.
    pub fn first(&self) -> Option<K> {
        self.candidates.first().map(|c| c.id)
    }

    /// Whether the candidate set needs to be recomputed before use.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Flag the candidate set as out of date.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Drop computed candidates and explicit registrations, keeping predicates.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.registered.clear();
        self.unregistered.clear();
        self.scope = None;
        self.stale = true;
    }
}
