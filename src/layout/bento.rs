//! Bento packing: a greedy bin-packer over a fixed occupancy grid.
//!
//! Each item gets a candidate footprint from a small shape palette, chosen
//! by a position-dependent heuristic, then claims the first free row-major
//! slot that fully accommodates it. If the preferred shape fits nowhere,
//! progressively smaller palette shapes are tried; if nothing fits, the
//! item lands at the grid origin overlapping others (a recoverable visual
//! defect, not a failure).

use super::{Lcg, recenter};
use crate::constants::{BENTO_MAX_ROWS, GRID_CELL_SIZE};
use crate::snap::extent_for_cells;
use crate::types::Item;
use tracing::trace;

/// Candidate footprints, largest first.
const PALETTE: [(u32, u32); 4] = [(2, 2), (2, 1), (1, 2), (1, 1)];

pub(crate) fn arrange(mut items: Vec<Item>, gap: f32) -> Vec<Item> {
    let n = items.len();
    if n == 0 {
        return items;
    }

    let cols = ((2.5 * n as f32).sqrt().ceil() as usize + 2).max(4);
    let mut grid = Occupancy::new(cols);
    let mut rng = Lcg::new(n as u64);
    let slot = GRID_CELL_SIZE + gap;

    for (i, item) in items.iter_mut().enumerate() {
        let preferred = preferred_shape(i, &mut rng);
        let mut placed = false;

        for &shape in &PALETTE[preferred..] {
            if let Some((col, row)) = grid.first_fit(shape) {
                grid.claim(col, row, shape);
                place(item, col as f32 * slot, row as f32 * slot, shape, gap);
                placed = true;
                break;
            }
        }

        if !placed {
            // Pathologically dense grid: overlap at the origin.
            trace!(item = %item.id, "No bento slot available, overlapping at origin");
            place(item, 0.0, 0.0, (1, 1), gap);
        }
    }

    recenter(&mut items);
    items
}

/// Palette index preferred for the item at position `i`.
///
/// The first item and every fifth prefer the largest shape; every third
/// prefers one of the medium shapes, picked by the seeded LCG; everything
/// else starts from the smallest.
fn preferred_shape(i: usize, rng: &mut Lcg) -> usize {
    if i == 0 || i % 5 == 0 {
        0
    } else if i % 3 == 0 {
        1 + rng.next_index(2)
    } else {
        3
    }
}

fn place(item: &mut Item, x: f32, y: f32, shape: (u32, u32), gap: f32) {
    item.x = x;
    item.y = y;
    item.w = extent_for_cells(shape.0, gap);
    item.h = extent_for_cells(shape.1, gap);
    item.rotation = 0.0;
    item.metadata.grid_cells = Some(shape);
    item.metadata.manually_positioned = false;
}

/// Row-major occupancy bitmap, growing by rows up to `BENTO_MAX_ROWS`.
struct Occupancy {
    cols: usize,
    rows: Vec<Vec<bool>>,
}

impl Occupancy {
    fn new(cols: usize) -> Self {
        Self {
            cols,
            rows: Vec::new(),
        }
    }

    /// First top-left cell, scanning row-major, where `shape` fits entirely
    /// inside free cells.
    fn first_fit(&mut self, shape: (u32, u32)) -> Option<(usize, usize)> {
        let (w, h) = (shape.0 as usize, shape.1 as usize);
        if w > self.cols {
            return None;
        }
        for row in 0..BENTO_MAX_ROWS.saturating_sub(h - 1) {
            for col in 0..=(self.cols - w) {
                if self.fits(col, row, w, h) {
                    return Some((col, row));
                }
            }
        }
        None
    }

    fn fits(&mut self, col: usize, row: usize, w: usize, h: usize) -> bool {
        for r in row..row + h {
            self.ensure_row(r);
            for c in col..col + w {
                if self.rows[r][c] {
                    return false;
                }
            }
        }
        true
    }

    fn claim(&mut self, col: usize, row: usize, shape: (u32, u32)) {
        for r in row..row + shape.1 as usize {
            self.ensure_row(r);
            for c in col..col + shape.0 as usize {
                self.rows[r][c] = true;
            }
        }
    }

    fn ensure_row(&mut self, row: usize) {
        while self.rows.len() <= row {
            self.rows.push(vec![false; self.cols]);
        }
    }
}
