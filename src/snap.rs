//! Magnetic grid snap.
//!
//! Pure functions correcting a proposed position or size toward the nearest
//! grid-aligned value when it is within tolerance. Callers must always feed
//! these candidates derived from the interaction session's *starting*
//! reference, never the previous frame's output, or the correction creeps.

use crate::constants::{
    GRID_GAP, GRID_SLOT_SIZE, SNAP_POSITION_TOLERANCE, SNAP_SIZE_TOLERANCE,
};
use crate::geometry::Point;

/// Outcome of snapping a candidate position, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnappedPoint {
    pub point: Point,
    pub snapped_x: bool,
    pub snapped_y: bool,
}

impl SnappedPoint {
    /// True when both axes landed on grid lines.
    pub fn on_grid(&self) -> bool {
        self.snapped_x && self.snapped_y
    }
}

/// Snap one axis value to the nearest multiple of `step` within `tolerance`.
pub fn snap_axis(value: f32, step: f32, tolerance: f32) -> Option<f32> {
    let nearest = (value / step).round() * step;
    if (value - nearest).abs() <= tolerance {
        Some(nearest)
    } else {
        None
    }
}

/// Snap a candidate drag position to the grid, each axis independently.
pub fn snap_position(candidate: Point) -> SnappedPoint {
    let sx = snap_axis(candidate.x, GRID_SLOT_SIZE, SNAP_POSITION_TOLERANCE);
    let sy = snap_axis(candidate.y, GRID_SLOT_SIZE, SNAP_POSITION_TOLERANCE);
    SnappedPoint {
        point: Point::new(sx.unwrap_or(candidate.x), sy.unwrap_or(candidate.y)),
        snapped_x: sx.is_some(),
        snapped_y: sy.is_some(),
    }
}

/// Snap a candidate extent to a whole number of grid cells.
///
/// An extent of `cells` cells spans `cells * slot - gap`. Returns the raw
/// value unchanged when the nearest cell extent is out of tolerance.
pub fn snap_extent(value: f32) -> f32 {
    let cells = ((value + GRID_GAP) / GRID_SLOT_SIZE).round().max(1.0);
    let snapped = cells * GRID_SLOT_SIZE - GRID_GAP;
    if (value - snapped).abs() <= SNAP_SIZE_TOLERANCE {
        snapped
    } else {
        value
    }
}

/// World-space extent of a footprint spanning `cells` cells with gap `gap`.
pub fn extent_for_cells(cells: u32, gap: f32) -> f32 {
    cells as f32 * crate::constants::GRID_CELL_SIZE + cells.saturating_sub(1) as f32 * gap
}
