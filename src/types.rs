//! Core types for the driftspace canvas system.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: canvas items, their content payloads, the open metadata bag, and
//! logical connections between items.

use crate::constants::GRID_CELL_SIZE;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier of an item (UUID v4, assigned at creation).
pub type ItemId = String;

/// Stable identifier of a connection (UUID v4, assigned at creation).
pub type ConnectionId = String;

/// Identifier of a workspace view; opaque to this engine.
pub type SpaceId = String;

/// Milliseconds since the Unix epoch.
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// An item placed on the infinite canvas.
///
/// Each item has a unique ID, world-space geometry, and a content payload.
/// Geometry is mutated in place by the interaction engine and in bulk by the
/// layout engine; content is owned by external collaborators.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item
    pub id: ItemId,
    /// World-space x of the top-left corner
    pub x: f32,
    /// World-space y of the top-left corner
    pub y: f32,
    /// Width in world units, always > 0
    pub w: f32,
    /// Height in world units, always > 0
    pub h: f32,
    /// Rotation in degrees; interaction code biases this toward small values
    #[serde(default)]
    pub rotation: f32,
    /// Stacking order; strictly increases on bring-to-front
    #[serde(default)]
    pub z_index: i64,
    /// The content this item displays
    pub content: ItemContent,
    /// Auxiliary fields shared with external collaborators
    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl Item {
    /// Create an item at `position` with the content's default size.
    pub fn new(position: Point, content: ItemContent) -> Self {
        let size = content.default_size();
        let now = epoch_millis();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            x: position.x,
            y: position.y,
            w: size.w,
            h: size.h,
            rotation: 0.0,
            z_index: 0,
            content,
            metadata: ItemMetadata {
                added_at: now,
                updated_at: now,
                ..ItemMetadata::default()
            },
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    /// True for folder/stack items, the only valid drop-merge targets.
    pub fn is_stack(&self) -> bool {
        matches!(self.content, ItemContent::Stack { .. })
    }

    /// The nested collection id, present only for stack items.
    pub fn linked_space_id(&self) -> Option<&SpaceId> {
        match &self.content {
            ItemContent::Stack { space_id, .. } => Some(space_id),
            _ => None,
        }
    }
}

/// The closed set of item kinds.
///
/// Kind affects default sizing and which layout-measurement path applies,
/// not the interaction state machine itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Sticky,
    Note,
    Image,
    Video,
    Stack,
}

/// The content payload of a canvas item.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemContent {
    /// A sticky note: short text on a colored square
    Sticky {
        text: String,
        /// Background color as hex string (e.g. "#ffd866")
        color: String,
    },
    /// A rich note; measured content-aware by the layout engine
    Note { text: String },
    /// An image; `source` is an opaque blob reference resolved externally
    Image { source: String },
    /// A video; `source` is an opaque blob reference resolved externally
    Video { source: String },
    /// A folder/stack: portal to a nested, independent item collection
    Stack { space_id: SpaceId, title: String },
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::Sticky { .. } => ItemKind::Sticky,
            ItemContent::Note { .. } => ItemKind::Note,
            ItemContent::Image { .. } => ItemKind::Image,
            ItemContent::Video { .. } => ItemKind::Video,
            ItemContent::Stack { .. } => ItemKind::Stack,
        }
    }

    /// Default world-space size for freshly created items of this kind.
    pub fn default_size(&self) -> Size {
        match self {
            ItemContent::Sticky { .. } => Size::new(GRID_CELL_SIZE, GRID_CELL_SIZE),
            ItemContent::Note { .. } => Size::new(420.0, 200.0),
            ItemContent::Image { .. } => Size::new(800.0, 600.0),
            ItemContent::Video { .. } => Size::new(400.0, 300.0),
            ItemContent::Stack { .. } => Size::new(GRID_CELL_SIZE, GRID_CELL_SIZE),
        }
    }

    /// Human-readable name, used for name-sorted arrangement.
    pub fn display_name(&self) -> String {
        match self {
            ItemContent::Sticky { text, .. } | ItemContent::Note { text } => {
                text.lines().next().unwrap_or("").to_string()
            }
            ItemContent::Image { source } | ItemContent::Video { source } => source
                .rsplit('/')
                .next()
                .unwrap_or(source)
                .to_string(),
            ItemContent::Stack { title, .. } => title.clone(),
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            ItemContent::Sticky { .. } => "STICKY",
            ItemContent::Note { .. } => "NOTE",
            ItemContent::Image { .. } => "IMAGE",
            ItemContent::Video { .. } => "VIDEO",
            ItemContent::Stack { .. } => "STACK",
        }
    }
}

/// Auxiliary item fields mutated by external collaborators.
///
/// The engine treats everything here as opaque except `grid_cells` (written
/// by the layout engine) and `manually_positioned` (set after a
/// user-initiated drag or resize completes). Unknown fields round-trip
/// through `extra`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// When the item was created, millis since epoch
    #[serde(default)]
    pub added_at: u64,
    /// When the item was last touched, millis since epoch
    #[serde(default)]
    pub updated_at: u64,
    /// Cached grid footprint (columns, rows) from the last grid arrangement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_cells: Option<(u32, u32)>,
    /// Set once the user has dragged or resized the item by hand
    #[serde(default)]
    pub manually_positioned: bool,
    /// Collaborator-owned fields this engine never interprets
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An unordered logical edge between two items.
///
/// `{from, to}` and `{to, from}` are equivalent; the
/// [`ConnectionManager`](crate::connections::ConnectionManager) enforces
/// uniqueness over the unordered pair and rejects self-links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub from: ItemId,
    pub to: ItemId,
}

impl Connection {
    pub fn new(from: ItemId, to: ItemId) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from,
            to,
        }
    }

    /// True if this connection joins the same unordered pair.
    pub fn links(&self, a: &ItemId, b: &ItemId) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }

    /// True if either endpoint is `id`.
    pub fn touches(&self, id: &ItemId) -> bool {
        self.from == *id || self.to == *id
    }
}
