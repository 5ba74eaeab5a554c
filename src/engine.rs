//! The interaction engine: owns camera, selection, input state, and
//! connection bookkeeping for one workspace view.
//!
//! The item collection itself is owned by an external store. Every handler
//! reads items through a borrowed slice and communicates mutations as
//! [`Effect`]s carrying per-field [`ItemPatch`]es; the store applies them
//! with [`apply_item_patches`]. Patches never overwrite whole items, so a
//! concurrent content write (e.g. streaming generation into a note) is
//! never clobbered by a geometry commit.
//!
//! While a gesture is live, the engine does not touch item geometry at all:
//! the in-flight deltas live in the interaction session and are consulted
//! only by the presentation layer (see [`crate::scene`]). The single
//! durable outcome of a session is the patch batch emitted on pointer-up.

use crate::camera::{Camera, Inertia};
use crate::connections::{ConnectionError, ConnectionManager, Edge};
use crate::constants::MIN_ITEM_SIZE;
use crate::geometry::{Point, Rect, Size};
use crate::input::InputState;
use crate::layout::{self, LayoutKind, ViewPrefs};
use crate::perf::PerfMonitor;
use crate::profile_scope;
use crate::selection::SelectionManager;
use crate::spatial_index::SpatialIndex;
use crate::types::{Connection, ConnectionId, Item, ItemId};
use std::collections::HashSet;
use tracing::debug;

/// Where an authoring prompt should be scoped when opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptScope {
    /// Blank canvas prompt
    Blank,
    /// Anchored to a single item
    Item(ItemId),
    /// Operating on the current selection
    Selection(Vec<ItemId>),
}

/// Final geometry for one item produced by an arrangement.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub id: ItemId,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub rotation: f32,
    pub grid_cells: Option<(u32, u32)>,
}

/// A partial, per-field item mutation.
///
/// The external store applies these to whatever the collection looks like
/// at apply time; fields the patch does not name are left alone.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemPatch {
    Geometry {
        id: ItemId,
        x: Option<f32>,
        y: Option<f32>,
        w: Option<f32>,
        h: Option<f32>,
        rotation: Option<f32>,
    },
    ZIndex {
        id: ItemId,
        z_index: i64,
    },
    /// Mark the item as hand-placed after a drag/resize commit
    ManuallyPositioned {
        id: ItemId,
    },
    /// Bulk geometry from the layout engine; clears the hand-placed flag
    Placements(Vec<Placement>),
}

/// Everything the engine asks its embedder to do.
#[derive(Clone, Debug)]
pub enum Effect {
    /// Apply these patches to the item collection (functional update)
    Items(Vec<ItemPatch>),
    /// The camera changed; persist on a debounce
    Camera(Camera),
    /// The selection was replaced
    Selection(Vec<ItemId>),
    /// Dragged items were dropped onto a folder; the store owns the merge
    StackRequest {
        sources: Vec<ItemId>,
        target: ItemId,
    },
    ConnectionCreated(Connection),
    ConnectionDeleted(ConnectionId),
    /// Open an authoring prompt at a world position
    OpenPrompt {
        position: Point,
        scope: PromptScope,
    },
    /// Escape with nothing to cancel or deselect: leave this view
    NavigateUp,
}

/// Apply patches to a live item collection.
///
/// This is the functional-update half of the engine contract: the store
/// calls it with its *current* collection, which may have been mutated by
/// other collaborators since the patches were produced. Unknown ids are
/// skipped silently. Sizes are clamped defensively so degenerate geometry
/// never lands in the store.
pub fn apply_item_patches(items: &mut [Item], patches: &[ItemPatch]) {
    for patch in patches {
        match patch {
            ItemPatch::Geometry {
                id,
                x,
                y,
                w,
                h,
                rotation,
            } => {
                if let Some(item) = items.iter_mut().find(|i| i.id == *id) {
                    if let Some(x) = x {
                        item.x = *x;
                    }
                    if let Some(y) = y {
                        item.y = *y;
                    }
                    if let Some(w) = w {
                        item.w = w.max(MIN_ITEM_SIZE);
                    }
                    if let Some(h) = h {
                        item.h = h.max(MIN_ITEM_SIZE);
                    }
                    if let Some(rotation) = rotation {
                        item.rotation = *rotation;
                    }
                }
            }
            ItemPatch::ZIndex { id, z_index } => {
                if let Some(item) = items.iter_mut().find(|i| i.id == *id) {
                    item.z_index = *z_index;
                }
            }
            ItemPatch::ManuallyPositioned { id } => {
                if let Some(item) = items.iter_mut().find(|i| i.id == *id) {
                    item.metadata.manually_positioned = true;
                }
            }
            ItemPatch::Placements(placements) => {
                for p in placements {
                    if let Some(item) = items.iter_mut().find(|i| i.id == p.id) {
                        item.x = p.x;
                        item.y = p.y;
                        item.w = p.w.max(MIN_ITEM_SIZE);
                        item.h = p.h.max(MIN_ITEM_SIZE);
                        item.rotation = p.rotation;
                        if p.grid_cells.is_some() {
                            item.metadata.grid_cells = p.grid_cells;
                        }
                        item.metadata.manually_positioned = false;
                    }
                }
            }
        }
    }
}

/// The stateful core of one workspace view.
pub struct SpaceEngine {
    pub(crate) viewport: Size,
    pub(crate) camera: Camera,
    pub(crate) prefs: ViewPrefs,
    pub(crate) selection: SelectionManager,
    pub(crate) input: InputState,
    pub(crate) connections: ConnectionManager,
    pub(crate) index: SpatialIndex,
    pub(crate) inertia: Option<Inertia>,
    pub(crate) hovered_edge: Option<(ItemId, Edge)>,
    pub(crate) effects: Vec<Effect>,
    perf: PerfMonitor,
}

impl SpaceEngine {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            camera: Camera::default(),
            prefs: ViewPrefs::default(),
            selection: SelectionManager::new(),
            input: InputState::Idle,
            connections: ConnectionManager::new(),
            index: SpatialIndex::new(),
            inertia: None,
            hovered_edge: None,
            effects: Vec::new(),
            perf: PerfMonitor::new(),
        }
    }

    // ========================================================================
    // State access
    // ========================================================================

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Install a camera, clamping zoom. Restored values are never trusted.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera.clamped();
    }

    pub fn prefs(&self) -> ViewPrefs {
        self.prefs
    }

    pub fn set_prefs(&mut self, prefs: ViewPrefs) {
        self.prefs = prefs;
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn connections(&self) -> &ConnectionManager {
        &self.connections
    }

    /// The edge affordance currently shown while hovering, if any.
    pub fn hovered_edge(&self) -> Option<&(ItemId, Edge)> {
        self.hovered_edge.as_ref()
    }

    /// True while the camera is coasting after a pan release.
    pub fn is_coasting(&self) -> bool {
        self.inertia.is_some()
    }

    /// Drain the effects produced since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// World-space position for a screen point; used for file drops.
    pub fn drop_world_position(&self, screen: Point) -> Point {
        self.camera.screen_to_world(screen, self.viewport)
    }

    // ========================================================================
    // Item collection sync
    // ========================================================================

    /// Rebuild the spatial index after external mutation of the collection.
    pub fn sync_items(&mut self, items: &[Item]) {
        self.index.rebuild(items.iter().map(|i| (i.id.clone(), i.rect())));
    }

    /// Called in the same transaction as an external item deletion: prunes
    /// connections referencing the item and drops it from selection/index.
    pub fn item_deleted(&mut self, id: &ItemId) {
        for removed in self.connections.prune_item(id) {
            self.effects.push(Effect::ConnectionDeleted(removed));
        }
        self.index.remove(id);
        if self.selection.contains(id) {
            self.selection.remove(id);
            self.effects.push(Effect::Selection(self.selection.ids()));
        }
        if let Some((hover_id, _)) = &self.hovered_edge {
            if hover_id == id {
                self.hovered_edge = None;
            }
        }
    }

    // ========================================================================
    // Connections
    // ========================================================================

    pub fn create_connection(
        &mut self,
        from: &ItemId,
        to: &ItemId,
    ) -> Result<ConnectionId, ConnectionError> {
        let conn = self.connections.create(from, to)?;
        let id = conn.id.clone();
        self.effects.push(Effect::ConnectionCreated(conn));
        Ok(id)
    }

    pub fn delete_connection(&mut self, id: &ConnectionId) {
        if self.connections.remove(id).is_some() {
            self.effects.push(Effect::ConnectionDeleted(id.clone()));
        }
    }

    // ========================================================================
    // Arrangement
    // ========================================================================

    /// Arrange the whole collection with the current view preferences.
    pub fn arrange_items(&mut self, items: &[Item]) {
        profile_scope!("arrange_items");
        if self.prefs.layout == LayoutKind::Free {
            return;
        }
        let arranged = layout::arrange(items, &self.prefs);
        self.commit_arrangement(arranged);
    }

    /// Arrange only the selected items; everything else stays put.
    pub fn arrange_selection(&mut self, items: &[Item]) {
        profile_scope!("arrange_selection");
        if self.prefs.layout == LayoutKind::Free || self.selection.is_empty() {
            return;
        }
        let scope: HashSet<ItemId> = self.selection.iter().cloned().collect();
        let arranged = layout::arrange_subset(items, &scope, &self.prefs);
        let scoped: Vec<Item> = arranged
            .into_iter()
            .filter(|i| scope.contains(&i.id))
            .collect();
        self.commit_arrangement(scoped);
    }

    fn commit_arrangement(&mut self, arranged: Vec<Item>) {
        if arranged.is_empty() {
            return;
        }
        debug!(count = arranged.len(), "Committing arrangement");
        let placements: Vec<Placement> = arranged
            .iter()
            .map(|i| Placement {
                id: i.id.clone(),
                x: i.x,
                y: i.y,
                w: i.w,
                h: i.h,
                rotation: i.rotation,
                grid_cells: i.metadata.grid_cells,
            })
            .collect();
        for p in &placements {
            self.index
                .update(p.id.clone(), Rect::new(p.x, p.y, p.w, p.h));
        }
        self.effects
            .push(Effect::Items(vec![ItemPatch::Placements(placements)]));
    }

    // ========================================================================
    // Frame + keyboard
    // ========================================================================

    /// Ask the shell to open an authoring prompt scoped to the current
    /// selection (blank-canvas scope when nothing is selected). Invoked by
    /// the shell from its accelerators; affordance clicks and double-clicks
    /// route through the pointer handlers instead.
    pub fn request_selection_prompt(&mut self, position: Point) {
        let scope = if self.selection.is_empty() {
            PromptScope::Blank
        } else {
            PromptScope::Selection(self.selection.ids())
        };
        self.effects.push(Effect::OpenPrompt { position, scope });
    }

    /// Mark the start of a render frame for performance tracking.
    pub fn begin_frame(&mut self) {
        self.perf.begin_frame();
    }

    /// Mark the end of a render frame; returns the frame time in ms.
    pub fn end_frame(&mut self) -> Option<f64> {
        self.perf.end_frame()
    }

    pub fn perf_monitor(&self) -> &PerfMonitor {
        &self.perf
    }

    /// Advance the per-frame cooperative work (inertia decay). The embedder
    /// schedules one callback at a time and calls this from it.
    pub fn tick(&mut self) {
        if let Some(inertia) = &mut self.inertia {
            let alive = inertia.tick(&mut self.camera);
            self.effects.push(Effect::Camera(self.camera));
            if !alive {
                self.inertia = None;
            }
        }
    }

    /// Escape: cancel the active gesture, else clear the selection, else
    /// hand navigation back to the embedder.
    pub fn handle_escape(&mut self) {
        if !self.input.is_idle() {
            self.input.reset();
        } else if !self.selection.is_empty() {
            self.selection.clear();
            self.effects.push(Effect::Selection(Vec::new()));
        } else {
            self.effects.push(Effect::NavigateUp);
        }
    }

    pub(crate) fn cancel_inertia(&mut self) {
        self.inertia = None;
    }
}

// ============================================================================
// Hit-testing helpers
// ============================================================================

pub(crate) fn find_item<'a>(items: &'a [Item], id: &ItemId) -> Option<&'a Item> {
    items.iter().find(|i| i.id == *id)
}

/// Topmost item under a world point: highest z-index wins, insertion order
/// breaks ties. Candidates come from the spatial index in O(log n).
pub(crate) fn top_hit<'a>(
    items: &'a [Item],
    index: &SpatialIndex,
    world: Point,
) -> Option<&'a Item> {
    let candidates: HashSet<ItemId> = index.query_point(world.x, world.y).into_iter().collect();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| candidates.contains(&item.id))
        .max_by_key(|(idx, item)| (item.z_index, *idx))
        .map(|(_, item)| item)
}

/// Topmost stack/folder item under a world point, excluding `exclude`.
/// Used for drop targeting while dragging.
pub(crate) fn top_stack_hit(
    items: &[Item],
    index: &SpatialIndex,
    world: Point,
    exclude: &[ItemId],
) -> Option<ItemId> {
    let candidates: HashSet<ItemId> = index.query_point(world.x, world.y).into_iter().collect();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            item.is_stack() && candidates.contains(&item.id) && !exclude.contains(&item.id)
        })
        .max_by_key(|(idx, item)| (item.z_index, *idx))
        .map(|(_, item)| item.id.clone())
}

pub(crate) fn max_z(items: &[Item]) -> i64 {
    items.iter().map(|i| i.z_index).max().unwrap_or(0)
}
