//! Input state machine - unified state management for all pointer
//! interactions.
//!
//! A single tagged enum replaces scattered boolean flags, making impossible
//! state combinations unrepresentable. Each active variant carries its own
//! session payload: the snapshot taken at pointer-down plus the running
//! deltas. Sessions are transient; the only durable outcome is the patch
//! batch the engine emits on pointer-up.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning          (middle/right button, or left with space held)
//! Idle -> DraggingItems    (pointer down on an item body)
//! Idle -> Resizing         (pointer down on an item's resize corner)
//! Idle -> Lassoing         (left pointer down on empty canvas)
//! Idle -> ConnectingEdge   (pointer down on an edge affordance)
//!
//! Any -> Idle              (pointer up - finalizes the session)
//! ```

use crate::connections::Edge;
use crate::constants::{
    MAX_TILT_DEGREES, TILT_ACQUIRE_RATE, TILT_RELEASE_RATE, TILT_SETTLE_FRACTION,
    TILT_VELOCITY_FACTOR,
};
use crate::geometry::{Point, Size};
use crate::types::ItemId;
use std::collections::HashMap;

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Canvas panning (middle/right drag, or space+left drag)
    Panning {
        /// Last pointer position for delta calculation
        last_pos: Point,
        /// Last per-event delta; seeds inertia on release
        last_delta: Point,
    },

    /// Dragging one or more items together
    DraggingItems { session: DragSession },

    /// Resizing a single item from its corner handle
    Resizing { session: ResizeSession },

    /// Rubber-band selection on empty canvas
    Lassoing {
        /// Anchor corner in world space
        start: Point,
        /// Live corner in world space
        current: Point,
        /// Pointer-down position in screen space, for the click test
        down_screen: Point,
    },

    /// Drawing a connection from an item's edge affordance
    ConnectingEdge { session: ConnectSession },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_dragging_items(&self) -> bool {
        matches!(self, Self::DraggingItems { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    pub fn is_lassoing(&self) -> bool {
        matches!(self, Self::Lassoing { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, Self::ConnectingEdge { .. })
    }

    /// Reset to Idle, discarding any session
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        match self {
            Self::DraggingItems { session } => Some(session),
            _ => None,
        }
    }

    pub fn resize_session(&self) -> Option<&ResizeSession> {
        match self {
            Self::Resizing { session } => Some(session),
            _ => None,
        }
    }

    pub fn connect_session(&self) -> Option<&ConnectSession> {
        match self {
            Self::ConnectingEdge { session } => Some(session),
            _ => None,
        }
    }

    /// The live lasso rectangle corners (world space), if lassoing
    pub fn lasso_corners(&self) -> Option<(Point, Point)> {
        match self {
            Self::Lassoing { start, current, .. } => Some((*start, *current)),
            _ => None,
        }
    }
}

/// Session payload while dragging items.
///
/// All position math is anchored on the snapshots taken at pointer-down;
/// the live offset is recomputed from scratch every move so dropped frames
/// never accumulate error and snapping never creeps.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// The item under the cursor when the drag started
    pub primary: ItemId,
    /// Every item moving with this drag (primary included)
    pub ids: Vec<ItemId>,
    /// Pointer position at pointer-down, world space
    pub start_pointer_world: Point,
    /// Top-left of every moved item at pointer-down
    pub start_positions: HashMap<ItemId, Point>,
    /// Pointer position at the previous move event, screen space
    pub last_pointer_screen: Point,
    /// Effective offset applied to every moved item, snap included
    pub offset: Point,
    /// True while the primary item sits on a grid intersection
    pub snapped: bool,
    pub tilt: TiltTracker,
    /// Stack item currently under the cursor, for drop preview
    pub drop_target: Option<ItemId>,
}

impl DragSession {
    pub fn new(
        primary: ItemId,
        ids: Vec<ItemId>,
        start_positions: HashMap<ItemId, Point>,
        start_pointer_world: Point,
        pointer_screen: Point,
    ) -> Self {
        Self {
            primary,
            ids,
            start_pointer_world,
            start_positions,
            last_pointer_screen: pointer_screen,
            offset: Point::ZERO,
            snapped: false,
            tilt: TiltTracker::new(),
            drop_target: None,
        }
    }

    /// Live top-left for a moved item, or None if it is not part of the drag
    pub fn visual_position(&self, id: &ItemId) -> Option<Point> {
        self.start_positions.get(id).map(|start| *start + self.offset)
    }

    /// True once the pointer has actually displaced the items
    pub fn moved(&self) -> bool {
        self.offset.length() > f32::EPSILON
    }
}

/// Session payload while resizing a single item.
#[derive(Debug, Clone)]
pub struct ResizeSession {
    pub id: ItemId,
    /// The item's fixed top-left corner, world space
    pub origin: Point,
    pub start_size: Size,
    pub start_rotation: f32,
    /// Grid footprint at resize start, if the item had one cached
    pub start_cells: Option<(u32, u32)>,
    /// Pointer position at pointer-down, screen space
    pub start_pointer_screen: Point,
    /// Live candidate size, floor and snap already applied
    pub size: Size,
    /// Live candidate rotation from the corner angle
    pub rotation: f32,
}

/// Session payload while drawing a connection from an edge affordance.
#[derive(Debug, Clone)]
pub struct ConnectSession {
    pub from: ItemId,
    pub edge: Edge,
    /// The affordance midpoint, world space
    pub anchor: Point,
    /// Pointer-down position in screen space, for the click test
    pub down_screen: Point,
    /// Live cursor position, world space
    pub cursor: Point,
}

/// Smoothed tilt derived from horizontal pointer velocity.
///
/// Tilt is acquired quickly and shed slowly, and while the pointer keeps
/// moving in one direction the tilt never swings across zero: the target is
/// always on the same side as the motion, so the easing can only decay
/// toward it.
#[derive(Debug, Clone, Default)]
pub struct TiltTracker {
    tilt: f32,
}

impl TiltTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one move event's horizontal screen delta; returns the new tilt.
    pub fn update(&mut self, pointer_dx: f32) -> f32 {
        let target = (pointer_dx * TILT_VELOCITY_FACTOR).clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES);
        let rate = if target.abs() > self.tilt.abs() {
            TILT_ACQUIRE_RATE
        } else {
            TILT_RELEASE_RATE
        };
        self.tilt += (target - self.tilt) * rate;
        self.tilt = self.tilt.clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES);
        self.tilt
    }

    /// Current tilt in degrees
    pub fn value(&self) -> f32 {
        self.tilt
    }

    /// Rotation retained when the drag releases off-grid
    pub fn settle(&self) -> f32 {
        self.tilt * TILT_SETTLE_FRACTION
    }
}
