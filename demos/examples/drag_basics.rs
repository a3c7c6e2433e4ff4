// Copyright 2025 the Dragover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-drop basics.
//!
//! Drive one drag gesture across two drop trays and commit the drop.
//!
//! Run:
//! - `cargo run -p dragover_demos --example drag_basics`

use dragover_session::{Coordinator, DropKind};
use kurbo::{Rect, Vec2};

fn main() {
    let mut dnd = Coordinator::new();

    // A card at the origin and two trays to its right.
    dnd.register_drag("card", Rect::new(0.0, 0.0, 50.0, 50.0));
    dnd.register_drop("near tray", Rect::new(70.0, 0.0, 120.0, 50.0), DropKind::Any);
    dnd.register_drop("far tray", Rect::new(140.0, 0.0, 190.0, 50.0), DropKind::Any);

    // Sweep the card rightwards, sampling the way a gesture recognizer would.
    for step in 0..8 {
        let offset = Vec2::new(f64::from(step) * 20.0, 0.0);
        dnd.report_drag("card", offset);
        match dnd.collision_target() {
            Some(target) => println!("offset {:>5.1}: over the {target}", offset.x),
            None => println!("offset {:>5.1}: over nothing", offset.x),
        }
    }

    // The gesture ends wherever the last sample left the card.
    match dnd.finalize_drop(&"card") {
        Some(target) => println!("dropped on the {target}"),
        None => println!("dropped on nothing"),
    }
}
