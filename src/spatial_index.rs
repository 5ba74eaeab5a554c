//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for efficient hit testing on the
//! canvas. This reduces hit testing from O(n) to O(log n) for point queries
//! and keeps lasso-rectangle queries proportional to the result size.

use crate::geometry::Rect;
use crate::types::ItemId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a canvas item's bounding box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, rect: Rect) -> Self {
        Self {
            item_id,
            min_x: rect.x,
            min_y: rect.y,
            max_x: rect.x + rect.w,
            max_y: rect.y + rect.h,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index for canvas items using an R-tree.
/// Provides O(log n) point queries and range queries for hit testing.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spatial index from an iterator of item rectangles.
    pub fn from_items<I>(items: I) -> Self
    where
        I: Iterator<Item = (ItemId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(id, rect)| SpatialEntry::new(id, rect))
            .collect();

        let entries_map: HashMap<ItemId, SpatialEntry> = entries
            .iter()
            .map(|e| (e.item_id.clone(), e.clone()))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, item_id: ItemId, rect: Rect) {
        if let Some(old_entry) = self.entries.remove(&item_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(item_id.clone(), rect);
        self.tree.insert(entry.clone());
        self.entries.insert(item_id, entry);
    }

    pub fn remove(&mut self, item_id: &ItemId) -> bool {
        if let Some(entry) = self.entries.remove(item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, item_id: ItemId, rect: Rect) {
        self.insert(item_id, rect);
    }

    /// Query all items that contain the given point (in world coordinates).
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ItemId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.item_id.clone())
            .collect()
    }

    /// Query all items whose bounding box intersects a rectangular region.
    pub fn query_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<ItemId> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the whole index from scratch after bulk external mutation.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (ItemId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(id, rect)| SpatialEntry::new(id, rect))
            .collect();

        self.entries = entries
            .iter()
            .map(|e| (e.item_id.clone(), e.clone()))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
