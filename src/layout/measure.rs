//! Grid-cell measurement heuristics.
//!
//! The grid and bento arrangements work in whole cells. Rich notes get a
//! content-aware footprint; everything else reuses the cached footprint from
//! the last arrangement, or derives one from its current world size.

use crate::constants::{GRID_GAP, GRID_SLOT_SIZE};
use crate::types::{Item, ItemContent};

/// Footprint of an item in integer grid cells (columns, rows).
pub fn measure_cells(item: &Item) -> (u32, u32) {
    match &item.content {
        ItemContent::Note { text } => note_cells(text),
        _ => item
            .metadata
            .grid_cells
            .unwrap_or_else(|| footprint_cells(item)),
    }
}

/// Content-aware footprint for rich notes: longer text earns more cells.
fn note_cells(text: &str) -> (u32, u32) {
    let len = text.chars().count();
    if len <= 120 {
        (1, 1)
    } else if len <= 360 {
        (2, 1)
    } else if len <= 800 {
        (2, 2)
    } else {
        (3, 2)
    }
}

/// Derive a footprint from the item's current world size.
fn footprint_cells(item: &Item) -> (u32, u32) {
    let cols = ((item.w + GRID_GAP) / GRID_SLOT_SIZE).round().max(1.0) as u32;
    let rows = ((item.h + GRID_GAP) / GRID_SLOT_SIZE).round().max(1.0) as u32;
    (cols, rows)
}
