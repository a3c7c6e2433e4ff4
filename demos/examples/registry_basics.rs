// Copyright 2025 the Dragover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-counted registry basics.
//!
//! Walk the identity-reuse race: a replacement element registers before the
//! element it replaces is unregistered.
//!
//! Run:
//! - `cargo run -p dragover_demos --example registry_basics`

use dragover_registry::Registry;
use kurbo::Rect;

fn main() {
    let mut targets = Registry::new();

    // The original "inbox" mounts.
    targets.add("inbox", Rect::new(40.0, 40.0, 90.0, 90.0));
    println!("mounted:   refs = {}", targets.ref_count(&"inbox"));

    // A remount reuses the identifier before the original unmounts.
    targets.add("inbox", Rect::new(40.0, 40.0, 90.0, 90.0));
    println!("remounted: refs = {}", targets.ref_count(&"inbox"));

    // The original's teardown arrives late and must not evict the new element.
    targets.remove(&"inbox");
    println!(
        "teardown:  refs = {}, present = {}",
        targets.ref_count(&"inbox"),
        targets.contains(&"inbox")
    );

    // Only the replacement's own teardown clears the entry.
    targets.remove(&"inbox");
    println!(
        "unmounted: refs = {}, present = {}",
        targets.ref_count(&"inbox"),
        targets.contains(&"inbox")
    );
}
