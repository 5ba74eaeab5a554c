//! Grid flow layout.
//!
//! Items are measured in whole cells and packed in reading order along the
//! flow axis, wrapping once the track-length heuristic is reached. Rows
//! advance by the tallest item in the row (columns by the widest), so every
//! band has a uniform extent.

use super::measure::measure_cells;
use super::{FlowDirection, recenter};
use crate::constants::GRID_CELL_SIZE;
use crate::snap::extent_for_cells;
use crate::types::Item;

pub(crate) fn arrange(mut items: Vec<Item>, flow: FlowDirection, gap: f32) -> Vec<Item> {
    let n = items.len();
    if n == 0 {
        return items;
    }

    let slot = GRID_CELL_SIZE + gap;
    match flow {
        FlowDirection::Horizontal => {
            // Track length in cells; rows wrap once the cursor would reach it.
            let track = (1.5 * n as f32).sqrt().ceil().max(1.0) as u32;
            let mut cursor = 0u32;
            let mut row_y = 0.0f32;
            let mut row_h_cells = 0u32;

            for item in &mut items {
                let (w_cells, h_cells) = measure_cells(item);
                if cursor > 0 && cursor + w_cells >= track {
                    row_y += row_h_cells as f32 * slot;
                    cursor = 0;
                    row_h_cells = 0;
                }
                place(item, cursor as f32 * slot, row_y, (w_cells, h_cells), gap);
                cursor += w_cells;
                row_h_cells = row_h_cells.max(h_cells);
            }
        }
        FlowDirection::Vertical => {
            let track = (2.5 * n as f32).sqrt().ceil().max(1.0) as u32;
            let mut cursor = 0u32;
            let mut col_x = 0.0f32;
            let mut col_w_cells = 0u32;

            for item in &mut items {
                let (w_cells, h_cells) = measure_cells(item);
                if cursor > 0 && cursor + h_cells >= track {
                    col_x += col_w_cells as f32 * slot;
                    cursor = 0;
                    col_w_cells = 0;
                }
                place(item, col_x, cursor as f32 * slot, (w_cells, h_cells), gap);
                cursor += h_cells;
                col_w_cells = col_w_cells.max(w_cells);
            }
        }
    }

    recenter(&mut items);
    items
}

fn place(item: &mut Item, x: f32, y: f32, cells: (u32, u32), gap: f32) {
    item.x = x;
    item.y = y;
    item.w = extent_for_cells(cells.0, gap);
    item.h = extent_for_cells(cells.1, gap);
    item.rotation = 0.0;
    item.metadata.grid_cells = Some(cells);
    item.metadata.manually_positioned = false;
}
