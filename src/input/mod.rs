//! Pointer and scroll input handling for the canvas engine.
//!
//! This module implements the interaction state machine: how raw pointer
//! events become selection changes, item drags, resizes, lasso selections,
//! connection drawing, and camera movement.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine ([`InputState`]) to
//! track the current interaction mode. Exactly one mode is active at a
//! time; each carries its own session snapshot, and every transition back
//! to Idle discards the session after committing its final patches.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum, session payloads, tilt tracking
//! - `coords` - Screen/world coordinate conversion
//! - `pointer_down` - Selection, drag/resize/connect initiation
//! - `pointer_move` - Live session updates (nothing durable happens here)
//! - `pointer_up` - Session finalization and patch emission
//! - `transform` - Wheel panning and zoom-to-cursor

pub mod coords;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;
mod transform;

pub use state::{ConnectSession, DragSession, InputState, ResizeSession, TiltTracker};
