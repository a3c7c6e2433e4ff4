// Copyright 2025 the Dragover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-target resolution for an in-flight drag.
//!
//! Pure functions over registries: given a drag identifier and its cumulative
//! offset, [`resolve_target`] answers which drop target (if any) the dragged
//! frame is over right now. Exact targets outrank any-targets; any-targets
//! compete on midpoint distance.

use dragover_registry::Registry;
use kurbo::{Rect, Vec2};

/// Strict rectangle intersection: `true` only when the interiors overlap.
///
/// Rectangles that merely touch along an edge or at a corner do not intersect,
/// and a degenerate (zero-width or zero-height) rectangle intersects nothing.
/// This is deliberately stricter than [`Rect::overlaps`], which counts
/// boundary contact. Coordinates are assumed finite; a `NaN` anywhere makes
/// the comparison `false`.
///
/// ```rust
/// use dragover_session::intersects;
/// use kurbo::Rect;
///
/// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(intersects(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
/// // Sharing the x = 10 edge is not an overlap.
/// assert!(!intersects(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
/// ```
#[inline]
#[must_use]
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Resolves the drop target for the drag element `drag_id`, displaced by
/// `offset` from its registered rectangle.
///
/// The dragged frame is the registered rectangle translated by `offset`.
/// Resolution then applies two rules in order:
///
/// 1. If `exact_drops` holds a rectangle under `drag_id` itself and the
///    dragged frame overlaps it, that target wins outright, even when an
///    any-target is closer.
/// 2. Otherwise, among the `any_drops` rectangles overlapping the dragged
///    frame, the one whose midpoint is nearest the dragged frame's midpoint
///    wins.
///
/// Returns `None` when `drag_id` has no entry in `drags` or when no target
/// overlaps. Exactly equidistant any-targets resolve to a single winner that
/// is stable for a given registry — callers must not rely on which one.
///
/// ```rust
/// use dragover_registry::Registry;
/// use dragover_session::resolve_target;
/// use kurbo::{Rect, Vec2};
///
/// let mut drags = Registry::new();
/// drags.add("card", Rect::new(0.0, 0.0, 50.0, 50.0));
/// let exact_drops = Registry::new();
/// let mut any_drops = Registry::new();
/// any_drops.add("inbox", Rect::new(40.0, 40.0, 90.0, 90.0));
///
/// let offset = Vec2::new(10.0, 10.0);
/// let hit = resolve_target(&"card", offset, &drags, &exact_drops, &any_drops);
/// assert_eq!(hit, Some(&"inbox"));
/// ```
#[must_use]
pub fn resolve_target<'r, K: PartialEq>(
    drag_id: &K,
    offset: Vec2,
    drags: &Registry<K, Rect>,
    exact_drops: &'r Registry<K, Rect>,
    any_drops: &'r Registry<K, Rect>,
) -> Option<&'r K> {
    let frame = *drags.get(drag_id)? + offset;

    // An exact target is bound to the drag element's own identifier, so there
    // is at most one candidate and no distance contest.
    if let Some((key, rect)) = exact_drops.get_key_value(drag_id)
        && intersects(frame, *rect)
    {
        return Some(key);
    }

    let midpoint = frame.center();
    let mut nearest: Option<(&K, f64)> = None;
    for (key, rect) in any_drops.iter() {
        if !intersects(frame, *rect) {
            continue;
        }
        let distance = rect.center().distance_squared(midpoint);
        // Strictly-smaller keeps the earliest candidate on exact ties, which
        // is what makes equidistant resolution stable for a given registry.
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((key, distance));
        }
    }
    nearest.map(|(key, _)| key)
}
