// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional resolution: pick the next candidate in a direction.
//!
//! The production policy is a greedy nearest-neighbor search restricted to the
//! forward half-plane:
//!
//! 1. A candidate is *valid* for a direction only if its center lies past the
//!    current center by more than [`Tuning::center_tolerance`] along the travel
//!    axis, and its facing edge starts at or beyond the current element's
//!    leading edge minus [`Tuning::edge_slack`]. Elements that merely overlap
//!    the current one are never targets.
//! 2. Each valid candidate gets a [`Score`]: the gap between facing edges
//!    (`primary`) plus the cross-axis center misalignment (`secondary`)
//!    weighted by [`Tuning::cross_axis_weight`].
//! 3. Among candidates whose total is within [`Tuning::tie_threshold`] of the
//!    best total, the best-aligned one (smallest `secondary`) wins. Remaining
//!    ties fall back to the total and then reading order, so the result does
//!    not depend on the order candidates are supplied in.

use core::cmp::Ordering;

use kurbo::Rect;

use crate::Direction;

/// A focusable candidate with its bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<K> {
    /// Identifier for this candidate.
    pub id: K,
    /// Bounds in viewport coordinates.
    pub rect: Rect,
}

/// Tunable constants of the directional policy, in pixels unless noted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tuning {
    /// How far past the current center a candidate center must lie.
    pub center_tolerance: f64,
    /// How far a candidate's facing edge may reach back over the current element.
    pub edge_slack: f64,
    /// Multiplier applied to cross-axis misalignment (unitless, below 1).
    pub cross_axis_weight: f64,
    /// Score band within which alignment beats raw distance.
    pub tie_threshold: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            center_tolerance: 10.0,
            edge_slack: 5.0,
            cross_axis_weight: 0.3,
            tie_threshold: 50.0,
        }
    }
}

/// Score of a valid candidate; lower is better.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    /// Gap between facing edges along the travel axis, never negative.
    pub primary: f64,
    /// Absolute difference between centers across the travel axis.
    pub secondary: f64,
    /// `primary + secondary * cross_axis_weight`.
    pub total: f64,
}

/// Trait for directional focus policies.
///
/// A policy receives the current element's bounds, a read-only slice of
/// eligible candidates, and a direction, and returns the next target if any.
pub trait FocusPolicy<K>
where
    K: Copy,
{
    /// Compute the next focus target from `current` in `direction`.
    fn next(&self, current: Rect, candidates: &[Candidate<K>], direction: Direction)
    -> Option<K>;
}

/// The edge-distance plus weighted-misalignment policy described in the module docs.
#[derive(Copy, Clone, Debug, Default)]
pub struct DirectionalPolicy {
    /// Policy constants.
    pub tuning: Tuning,
}

impl<K> FocusPolicy<K> for DirectionalPolicy
where
    K: Copy,
{
    fn next(
        &self,
        current: Rect,
        candidates: &[Candidate<K>],
        direction: Direction,
    ) -> Option<K> {
        resolve(current, candidates, direction, &self.tuning)
    }
}

/// Half-plane test: whether `candidate` is a legal target from `current` in `direction`.
///
/// Both rectangles are expected to be normalized (`x0 <= x1`, `y0 <= y1`).
/// Any NaN coordinate makes the test fail.
pub fn is_valid_target(
    current: &Rect,
    candidate: &Rect,
    direction: Direction,
    tuning: &Tuning,
) -> bool {
    let oc = current.center();
    let cc = candidate.center();
    let tol = tuning.center_tolerance;
    let slack = tuning.edge_slack;
    match direction {
        Direction::Right => cc.x > oc.x + tol && candidate.x0 >= current.x1 - slack,
        Direction::Left => cc.x < oc.x - tol && candidate.x1 <= current.x0 + slack,
        Direction::Down => cc.y > oc.y + tol && candidate.y0 >= current.y1 - slack,
        Direction::Up => cc.y < oc.y - tol && candidate.y1 <= current.y0 + slack,
    }
}

/// Score `candidate` relative to `current`, or `None` if it is not a valid target.
pub fn score(
    current: &Rect,
    candidate: &Rect,
    direction: Direction,
    tuning: &Tuning,
) -> Option<Score> {
    if !is_valid_target(current, candidate, direction, tuning) {
        return None;
    }
    let oc = current.center();
    let cc = candidate.center();
    let (gap, secondary) = match direction {
        Direction::Right => (candidate.x0 - current.x1, (cc.y - oc.y).abs()),
        Direction::Left => (current.x0 - candidate.x1, (cc.y - oc.y).abs()),
        Direction::Down => (candidate.y0 - current.y1, (cc.x - oc.x).abs()),
        Direction::Up => (current.y0 - candidate.y1, (cc.x - oc.x).abs()),
    };
    let primary = gap.max(0.0);
    let total = primary + secondary * tuning.cross_axis_weight;
    total.is_finite().then_some(Score {
        primary,
        secondary,
        total,
    })
}

/// Resolve the best candidate from `current` in `direction`.
///
/// Returns `None` when no candidate passes the half-plane test; this is the
/// "navigation failed" outcome and is never an error.
pub fn resolve<K>(
    current: Rect,
    candidates: &[Candidate<K>],
    direction: Direction,
    tuning: &Tuning,
) -> Option<K>
where
    K: Copy,
{
    let current = current.abs();

    let best_total = candidates
        .iter()
        .filter_map(|c| score(&current, &c.rect.abs(), direction, tuning))
        .map(|s| s.total)
        .fold(f64::INFINITY, f64::min);
    if !best_total.is_finite() {
        return None;
    }

    let mut best: Option<(&Candidate<K>, Score)> = None;
    for candidate in candidates {
        let rect = candidate.rect.abs();
        let Some(s) = score(&current, &rect, direction, tuning) else {
            continue;
        };
        // Only candidates in the near-tie band compete on alignment.
        let in_band = s.total <= best_total || s.total - best_total < tuning.tie_threshold;
        if !in_band {
            continue;
        }
        let better = match best {
            None => true,
            Some((b, bs)) => compare_in_band((&rect, &s), (&b.rect.abs(), &bs)) == Ordering::Less,
        };
        if better {
            best = Some((candidate, s));
        }
    }

    best.map(|(c, _)| c.id)
}

fn compare_in_band(a: (&Rect, &Score), b: (&Rect, &Score)) -> Ordering {
    let (ar, asc) = a;
    let (br, bsc) = b;
    asc.secondary
        .partial_cmp(&bsc.secondary)
        .unwrap_or(Ordering::Equal)
        .then_with(|| asc.total.partial_cmp(&bsc.total).unwrap_or(Ordering::Equal))
        .then_with(|| compare_rect_reading(ar, br))
}

fn compare_rect_reading(a: &Rect, b: &Rect) -> Ordering {
    a.y0.partial_cmp(&b.y0)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x0.partial_cmp(&b.x0).unwrap_or(Ordering::Equal))
}
