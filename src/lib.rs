//! driftspace - the direct-manipulation core of an infinite-canvas
//! workspace.
//!
//! This crate turns raw pointer input into consistent spatial state
//! (camera transform, item geometry, selection, connections) and computes
//! deterministic auto-arrangements for arbitrary item sets. It is a
//! library: rendering, persistence, content generation, and media handling
//! are external collaborators that consume the effects and visual lists
//! this engine produces.
//!
//! ## Architecture
//!
//! - [`types`] / [`geometry`] - the data model and math primitives
//! - [`camera`] - world/screen transform, zoom-to-cursor, pan inertia
//! - [`snap`] - magnetic grid snapping
//! - [`layout`] - grid flow, bento packing, and scatter arrangements
//! - [`input`] - the pointer interaction state machine
//! - [`engine`] - [`SpaceEngine`], the stateful core tying it together
//! - [`connections`] - connection bookkeeping and edge routing
//! - [`scene`] - visual item assembly for the presentation layer
//!
//! The engine is single-threaded and event-driven: all state mutates
//! synchronously in response to events delivered on one loop. The item
//! collection belongs to an external store; the engine only ever emits
//! per-field patches against it (see [`engine::apply_item_patches`]).

pub mod camera;
pub mod connections;
pub mod constants;
pub mod engine;
pub mod events;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod perf;
pub mod scene;
pub mod selection;
pub mod snap;
pub mod spatial_index;
pub mod types;

pub use camera::{Camera, Inertia};
pub use connections::{ConnectionError, ConnectionManager, Edge, RoutedConnection};
pub use engine::{Effect, ItemPatch, Placement, PromptScope, SpaceEngine, apply_item_patches};
pub use events::{Modifiers, PointerButton, PointerEvent, WheelDelta, WheelEvent};
pub use geometry::{Point, Rect, Size};
pub use input::InputState;
pub use layout::{FlowDirection, ItemSpacing, LayoutKind, SortKey, ViewPrefs};
pub use scene::VisualItem;
pub use selection::SelectionManager;
pub use types::{Connection, ConnectionId, Item, ItemContent, ItemId, ItemKind, ItemMetadata};
