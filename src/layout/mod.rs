//! Auto-arrange layout engine.
//!
//! Pure functions over an item collection: sort, measure, and place items
//! into one of three arrangements. Independent of interaction state; the
//! engine wraps the results into geometry patches for the external store.
//!
//! All arrangements are deterministic: given the same input order and
//! options, re-invocation yields the same placements. The "random" parts
//! (scatter placement, bento shape choice) draw from a seeded LCG.
//!
//! ## Modules
//!
//! - `measure` - grid-cell footprint heuristics
//! - `grid` - reading-order flow layout
//! - `bento` - greedy bin-packing over a fixed shape palette
//! - `scatter` - rejection-sampled non-overlapping scatter
//! - `rng` - the shared seeded LCG

pub mod measure;

mod bento;
mod grid;
mod rng;
mod scatter;

pub(crate) use rng::Lcg;

use crate::constants::{GRID_GAP, SPACING_COMFORTABLE, SPACING_COMPACT, SPACING_SPACIOUS};
use crate::geometry::Rect;
use crate::types::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Which arrangement strategy a workspace view uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Grid,
    Bento,
    Random,
    #[default]
    Free,
}

impl LayoutKind {
    /// Grid-compatible modes get magnetic snapping during drag/resize.
    pub fn grid_compatible(self) -> bool {
        matches!(self, LayoutKind::Grid | LayoutKind::Bento)
    }
}

/// Sort key applied before placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Added,
    Updated,
    Name,
    Type,
}

/// Primary flow axis for the grid arrangement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Inter-item spacing preset, a multiplier on the base gap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSpacing {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

impl ItemSpacing {
    pub fn multiplier(self) -> f32 {
        match self {
            ItemSpacing::Compact => SPACING_COMPACT,
            ItemSpacing::Comfortable => SPACING_COMFORTABLE,
            ItemSpacing::Spacious => SPACING_SPACIOUS,
        }
    }
}

/// Per-view arrangement preferences, persisted by the caller and read here
/// at arrange time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPrefs {
    #[serde(default)]
    pub layout: LayoutKind,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub flow: FlowDirection,
    #[serde(default)]
    pub spacing: ItemSpacing,
}

/// Arrange the whole collection according to `prefs`.
///
/// `Free` layout leaves geometry untouched. All other strategies sort,
/// measure, and place; output geometry is centered on the world origin.
pub fn arrange(items: &[Item], prefs: &ViewPrefs) -> Vec<Item> {
    let gap = GRID_GAP * prefs.spacing.multiplier();
    let sorted = sorted_items(items, prefs.sort_by);
    debug!(
        count = items.len(),
        layout = ?prefs.layout,
        sort = ?prefs.sort_by,
        "Arranging items"
    );
    match prefs.layout {
        LayoutKind::Free => items.to_vec(),
        LayoutKind::Grid => grid::arrange(sorted, prefs.flow, gap),
        LayoutKind::Bento => bento::arrange(sorted, gap),
        LayoutKind::Random => scatter::arrange(sorted, gap),
    }
}

/// Arrange only the items in `scope`; everything else keeps its current
/// geometry and is concatenated back into the result untouched.
pub fn arrange_subset(items: &[Item], scope: &HashSet<ItemId>, prefs: &ViewPrefs) -> Vec<Item> {
    let (scoped, untouched): (Vec<Item>, Vec<Item>) =
        items.iter().cloned().partition(|i| scope.contains(&i.id));
    let mut arranged = arrange(&scoped, prefs);
    arranged.extend(untouched);
    arranged
}

/// Clone and stable-sort by the requested key; ties keep input order.
fn sorted_items(items: &[Item], key: SortKey) -> Vec<Item> {
    let mut sorted: Vec<Item> = items.to_vec();
    match key {
        SortKey::Added => sorted.sort_by_key(|i| i.metadata.added_at),
        SortKey::Updated => {
            sorted.sort_by_key(|i| std::cmp::Reverse(i.metadata.updated_at))
        }
        SortKey::Name => sorted.sort_by(|a, b| {
            a.content
                .display_name()
                .to_lowercase()
                .cmp(&b.content.display_name().to_lowercase())
        }),
        SortKey::Type => sorted.sort_by(|a, b| a.content.type_label().cmp(b.content.type_label())),
    }
    sorted
}

/// Shift all items so the arrangement's bounding box is centered on the
/// world origin.
pub(crate) fn recenter(items: &mut [Item]) {
    let mut rects = items.iter().map(Item::rect);
    let Some(first) = rects.next() else {
        return;
    };
    let bounds = rects.fold(first, |acc, r| acc.union(&r));
    let center = bounds.center();
    for item in items {
        item.x -= center.x;
        item.y -= center.y;
    }
}

/// Bounding box of the whole collection, if non-empty.
pub fn bounding_box(items: &[Item]) -> Option<Rect> {
    let mut rects = items.iter().map(Item::rect);
    let first = rects.next()?;
    Some(rects.fold(first, |acc, r| acc.union(&r)))
}
