//! Selection bookkeeping: an unordered set of item ids.

use crate::types::ItemId;
use std::collections::HashSet;

/// The set of currently selected items.
///
/// No ordering semantics; cleared on navigation or explicit deselect.
#[derive(Clone, Debug, Default)]
pub struct SelectionManager {
    selected: HashSet<ItemId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn insert(&mut self, id: ItemId) {
        self.selected.insert(id);
    }

    pub fn remove(&mut self, id: &ItemId) {
        self.selected.remove(id);
    }

    /// Add the id if absent, remove it if present (shift-click semantics).
    pub fn toggle(&mut self, id: ItemId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Collapse the selection to exactly one item.
    pub fn select_only(&mut self, id: ItemId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Replace the whole selection (lasso resolution).
    pub fn replace<I: IntoIterator<Item = ItemId>>(&mut self, ids: I) {
        self.selected = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.selected.iter()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.selected.iter().cloned().collect()
    }
}
