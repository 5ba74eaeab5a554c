//! Randomized non-overlapping scatter.
//!
//! Items are thrown on a random angle and distance from the origin, with
//! rejection sampling against already-placed bounding boxes. Overlap is
//! minimized, not eliminated: after the attempt budget runs out the last
//! candidate is accepted anyway. The LCG is seeded from the item count, so
//! count-identical inputs scatter identically across runs.

use super::{Lcg, recenter};
use crate::constants::{SCATTER_BASE_RADIUS, SCATTER_MAX_ATTEMPTS, SCATTER_MAX_TILT_DEGREES};
use crate::geometry::Rect;
use crate::types::Item;
use std::f32::consts::TAU;
use tracing::trace;

pub(crate) fn arrange(mut items: Vec<Item>, gap: f32) -> Vec<Item> {
    let n = items.len();
    if n == 0 {
        return items;
    }

    let mut rng = Lcg::new(n as u64);
    let spread = SCATTER_BASE_RADIUS * (n as f32).sqrt();
    let mut placed: Vec<Rect> = Vec::with_capacity(n);

    for item in &mut items {
        let mut candidate = Rect::new(0.0, 0.0, item.w, item.h);
        let mut accepted = false;

        for _ in 0..SCATTER_MAX_ATTEMPTS {
            let angle = rng.next_f32() * TAU;
            let dist = rng.next_f32() * spread;
            candidate.x = angle.cos() * dist - item.w / 2.0;
            candidate.y = angle.sin() * dist - item.h / 2.0;

            let padded = candidate.inflate(gap);
            if !placed.iter().any(|r| padded.intersects(r)) {
                accepted = true;
                break;
            }
        }

        if !accepted {
            trace!(item = %item.id, "Scatter attempts exhausted, accepting overlap");
        }

        item.x = candidate.x;
        item.y = candidate.y;
        item.rotation = rng.next_range(-SCATTER_MAX_TILT_DEGREES, SCATTER_MAX_TILT_DEGREES);
        item.metadata.manually_positioned = false;
        placed.push(candidate);
    }

    recenter(&mut items);
    items
}
