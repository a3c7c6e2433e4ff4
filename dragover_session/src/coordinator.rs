// Copyright 2025 the Dragover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinator: registries plus the active drag session.

use dragover_registry::Registry;
use kurbo::{Rect, Vec2};

use crate::collision;

/// Which drag elements a drop target accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DropKind {
    /// Accepts only the drag element registered under the target's own
    /// identifier, and outranks every [`Any`](Self::Any) target it overlaps.
    Exact,
    /// Accepts any drag element, competing on midpoint distance with the
    /// other `Any` targets the dragged frame overlaps.
    Any,
}

/// Drag-and-drop state for one surface: the element registries and the
/// in-flight drag session.
///
/// The host layer mirrors element rectangles in through the `register_*` /
/// `update_*` / `unregister_*` calls, reports the active drag each gesture
/// sample with [`report_drag`](Self::report_drag), and commits the outcome
/// with [`finalize_drop`](Self::finalize_drop). All queries are synchronous
/// reads of the last resolved state.
///
/// Registration changes never resolve collisions by themselves; a drop target
/// appearing or moving mid-drag takes effect at the next report. This keeps
/// resolution pinned to gesture samples, so lifecycle churn between samples
/// is invisible.
///
/// # Example
///
/// ```rust
/// use dragover_session::{Coordinator, DropKind};
/// use kurbo::{Rect, Vec2};
///
/// let mut dnd = Coordinator::new();
/// dnd.register_drag("a", Rect::new(0.0, 0.0, 50.0, 50.0));
/// dnd.register_drop("b", Rect::new(40.0, 40.0, 90.0, 90.0), DropKind::Any);
/// dnd.register_drop("c", Rect::new(200.0, 200.0, 250.0, 250.0), DropKind::Any);
///
/// dnd.report_drag("a", Vec2::new(10.0, 10.0));
/// assert_eq!(dnd.collision_target(), Some(&"b"));
/// assert_eq!(dnd.finalize_drop(&"a"), Some(&"b"));
/// assert_eq!(dnd.dropped_target(), Some(&"b"));
/// ```
#[derive(Clone, Debug)]
pub struct Coordinator<K> {
    drags: Registry<K, Rect>,
    exact_drops: Registry<K, Rect>,
    any_drops: Registry<K, Rect>,
    /// The drag element most recently reported, until overwritten.
    drag_id: Option<K>,
    drag_offset: Option<Vec2>,
    /// Resolved at report time only; registration churn leaves it stale.
    collision_target: Option<K>,
    dropped_target: Option<K>,
    revision: u64,
}

impl<K> Coordinator<K> {
    /// Creates an empty coordinator with no registered elements and no
    /// session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            drags: Registry::new(),
            exact_drops: Registry::new(),
            any_drops: Registry::new(),
            drag_id: None,
            drag_offset: None,
            collision_target: None,
            dropped_target: None,
            revision: 0,
        }
    }

    /// A counter that advances whenever a session value changes: the active
    /// drag, its offset, the collision target, or the last dropped target.
    ///
    /// Cheap to poll between gesture samples; equal revisions mean equal
    /// session state. Registration calls do not advance it, since their
    /// effect only becomes observable at the next report.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The identifier of the in-flight drag, if one has been reported.
    #[must_use]
    pub fn active_drag(&self) -> Option<&K> {
        self.drag_id.as_ref()
    }

    /// The cumulative offset most recently reported for the active drag.
    #[must_use]
    pub fn drag_offset(&self) -> Option<Vec2> {
        self.drag_offset
    }

    /// The drop target the active drag resolved to at its last report.
    #[must_use]
    pub fn collision_target(&self) -> Option<&K> {
        self.collision_target.as_ref()
    }

    /// The outcome of the most recent finalize: the target that received the
    /// drop, or `None` after a failed attempt (or before any).
    #[must_use]
    pub fn dropped_target(&self) -> Option<&K> {
        self.dropped_target.as_ref()
    }

    /// Read access to the draggable-element registry.
    #[must_use]
    pub fn drags(&self) -> &Registry<K, Rect> {
        &self.drags
    }

    /// Read access to the exact drop-target registry.
    #[must_use]
    pub fn exact_drops(&self) -> &Registry<K, Rect> {
        &self.exact_drops
    }

    /// Read access to the any drop-target registry.
    #[must_use]
    pub fn any_drops(&self) -> &Registry<K, Rect> {
        &self.any_drops
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K: PartialEq> Coordinator<K> {
    /// Registers (or re-registers) a draggable element's rectangle.
    ///
    /// Registering an identifier already present stacks a reference and
    /// adopts the new rectangle, so the element survives that many
    /// unregistrations. That is what keeps an identity-reusing remount alive
    /// when the replacement registers before the original is torn down.
    pub fn register_drag(&mut self, id: K, frame: Rect) {
        self.drags.add(id, frame);
    }

    /// Replaces a registered draggable's rectangle, leaving its reference
    /// count alone.
    ///
    /// Returns `false` and stores nothing when the identifier is not
    /// registered, which is the normal outcome when a geometry callback fires
    /// for an element already torn down.
    pub fn update_drag(&mut self, id: &K, frame: Rect) -> bool {
        self.drags.update(id, frame)
    }

    /// Releases one reference to a draggable element.
    ///
    /// Returns `true` only when this released the last reference and the
    /// element left the registry. Unregistering an absent identifier is a
    /// no-op.
    pub fn unregister_drag(&mut self, id: &K) -> bool {
        self.drags.remove(id)
    }

    /// Registers (or re-registers) a drop target's rectangle under `kind`.
    ///
    /// Reference counting works as for [`register_drag`](Self::register_drag).
    /// The two kinds are independent registries, so one identifier registered
    /// under both is two separate entries.
    pub fn register_drop(&mut self, id: K, frame: Rect, kind: DropKind) {
        match kind {
            DropKind::Exact => self.exact_drops.add(id, frame),
            DropKind::Any => self.any_drops.add(id, frame),
        }
    }

    /// Replaces a registered drop target's rectangle.
    ///
    /// `kind` must match the registration; updating under the other kind
    /// finds nothing and returns `false`.
    pub fn update_drop(&mut self, id: &K, frame: Rect, kind: DropKind) -> bool {
        match kind {
            DropKind::Exact => self.exact_drops.update(id, frame),
            DropKind::Any => self.any_drops.update(id, frame),
        }
    }

    /// Releases one reference to a drop target, whichever kind it was
    /// registered under.
    ///
    /// Returns `true` when the identifier left at least one registry
    /// outright. A stale collision target pointing at a fully unregistered
    /// drop persists until the next report.
    pub fn unregister_drop(&mut self, id: &K) -> bool {
        let exact = self.exact_drops.remove(id);
        let any = self.any_drops.remove(id);
        exact || any
    }

    /// Whether `drop_id` is the drop target the active drag currently
    /// resolves to.
    #[must_use]
    pub fn is_drop_colliding(&self, drop_id: &K) -> bool {
        self.collision_target.as_ref() == Some(drop_id)
    }

    /// Whether `drag_id` is the active drag and it resolved to some drop
    /// target at its last report.
    #[must_use]
    pub fn is_drag_colliding(&self, drag_id: &K) -> bool {
        self.drag_id.as_ref() == Some(drag_id) && self.collision_target.is_some()
    }

    /// Whether finalizing now would land `drag_id` on a target.
    ///
    /// Same answer as [`is_drag_colliding`](Self::is_drag_colliding), phrased
    /// for gesture-end call sites.
    #[must_use]
    pub fn can_drop(&self, drag_id: &K) -> bool {
        self.is_drag_colliding(drag_id)
    }
}

impl<K: Clone + PartialEq> Coordinator<K> {
    /// Records the in-flight drag and resolves its drop target.
    ///
    /// Called once per gesture sample with the drag element's identifier and
    /// its cumulative offset from the registered rectangle. Reporting a
    /// different identifier overwrites the session; there is one in-flight
    /// drag per coordinator. Reporting an identifier with no registered
    /// rectangle still records the session but resolves no target.
    ///
    /// Reporting `Vec2::ZERO` puts the dragged frame back at its registered
    /// rectangle, which is how a gesture-end reset reads.
    pub fn report_drag(&mut self, drag_id: K, offset: Vec2) {
        let target = collision::resolve_target(
            &drag_id,
            offset,
            &self.drags,
            &self.exact_drops,
            &self.any_drops,
        )
        .cloned();

        let changed = self.drag_id.as_ref() != Some(&drag_id)
            || self.drag_offset != Some(offset)
            || self.collision_target != target;

        self.drag_id = Some(drag_id);
        self.drag_offset = Some(offset);
        self.collision_target = target;
        if changed {
            self.bump_revision();
        }
    }

    /// Commits the drop for `drag_id` at gesture end.
    ///
    /// When `drag_id` is the active drag and it resolved to a target, that
    /// target becomes the dropped target and is returned. Otherwise the
    /// attempt failed: the dropped target becomes `None` and `None` is
    /// returned. Either way the collision target is left alone; clearing it
    /// takes a fresh report (typically the gesture-end reset to
    /// `Vec2::ZERO`).
    pub fn finalize_drop(&mut self, drag_id: &K) -> Option<&K> {
        let outcome = if self.is_drag_colliding(drag_id) {
            self.collision_target.clone()
        } else {
            None
        };
        if self.dropped_target != outcome {
            self.dropped_target = outcome;
            self.bump_revision();
        }
        self.dropped_target.as_ref()
    }
}

impl<K> Default for Coordinator<K> {
    fn default() -> Self {
        Self::new()
    }
}
