// Copyright 2025 the Dragover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragover Session: drag-and-drop coordination for declarative UIs.
//!
//! This crate is the coordination core of a drag-and-drop layer: it tracks the
//! screen rectangles of draggable elements and drop targets, resolves which
//! target an in-flight drag currently overlaps, and commits or clears the
//! outcome when the gesture ends. It contains no gesture recognition, no
//! animation, and no rendering: the host UI layer reports geometry and drag
//! offsets in, and reads resolved state back out to drive highlighting and
//! drop feedback.
//!
//! ## Where this fits
//!
//! The host toolkit owns the view tree and the pointer. As elements mount,
//! move, and unmount it mirrors their rectangles into a [`Coordinator`]; while
//! a drag gesture runs it reports the dragged element's identifier and
//! cumulative offset each frame; at gesture end it asks the coordinator to
//! finalize the drop. Every call is synchronous and total: lifecycle events
//! racing gesture callbacks degrade to "no collision" or a no-op, never to an
//! error.
//!
//! Rectangles are [`kurbo::Rect`] values in one shared coordinate space;
//! offsets are [`kurbo::Vec2`]. Identifiers are caller-supplied and only need
//! `PartialEq` (plus `Clone` where the coordinator stores one).
//!
//! ## Drop-target selection
//!
//! Two kinds of target compete for a drag ([`DropKind`]):
//!
//! - **Exact** targets accept only the drag element registered under their own
//!   identifier, and always win over any-targets when they overlap the dragged
//!   frame — regardless of distance.
//! - **Any** targets accept every drag element; among those overlapping the
//!   dragged frame, the one whose midpoint is nearest the dragged frame's
//!   midpoint wins.
//!
//! Overlap is strict: rectangles that merely share an edge or corner do not
//! collide. See [`intersects`].
//!
//! ## Minimal example
//!
//! ```rust
//! use dragover_session::{Coordinator, DropKind};
//! use kurbo::{Rect, Vec2};
//!
//! let mut dnd = Coordinator::new();
//! dnd.register_drag("card", Rect::new(0.0, 0.0, 50.0, 50.0));
//! dnd.register_drop("inbox", Rect::new(40.0, 40.0, 90.0, 90.0), DropKind::Any);
//!
//! // Pointer moved by (10, 10): the card now overlaps the inbox.
//! dnd.report_drag("card", Vec2::new(10.0, 10.0));
//! assert!(dnd.is_drop_colliding(&"inbox"));
//! assert!(dnd.can_drop(&"card"));
//!
//! // Gesture ended: commit the drop.
//! assert_eq!(dnd.finalize_drop(&"card"), Some(&"inbox"));
//! ```
//!
//! ## API overview
//!
//! - [`Coordinator`]: owns the drag/drop registries and the active drag
//!   session; the sole entry point for the host layer.
//! - [`DropKind`]: whether a drop target accepts only its identifier twin or
//!   any drag element.
//! - [`resolve_target`]: the pure resolution function, usable directly against
//!   externally owned registries.
//! - [`intersects`]: strict rectangle overlap.
//!
//! ## One drag at a time
//!
//! A coordinator tracks a single in-flight drag; reporting for a second
//! identifier overwrites the session. Independent drag-and-drop surfaces each
//! own their own coordinator. Concurrent multi-pointer drags would need the
//! session fields keyed by a gesture identifier instead — a deliberate
//! extension point, not something this crate multiplexes internally.
//!
//! This crate is `no_std`.

#![no_std]

mod collision;
mod coordinator;

pub use collision::{intersects, resolve_target};
pub use coordinator::{Coordinator, DropKind};
