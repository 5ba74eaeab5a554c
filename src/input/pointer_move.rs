//! Pointer-move handling - live drag, resize, pan, lasso, and connect
//! updates.
//!
//! ## Performance Notes
//!
//! Pointer move fires continuously during interaction (60+ events per
//! second). Nothing here touches the authoritative item collection: drag
//! and resize deltas accumulate in the session and are consulted by the
//! presentation layer only, so a move costs no patch traffic at all.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::{
    MAX_TILT_DEGREES, MIN_ITEM_SIZE, RESIZE_ROTATION_DAMPING, RESIZE_ROTATION_OFFSET_DEGREES,
};
use crate::engine::{Effect, SpaceEngine, top_hit, top_stack_hit};
use crate::events::PointerEvent;
use crate::geometry::Size;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::state::InputState;
use crate::profile_scope;
use crate::snap::{snap_extent, snap_position};
use crate::types::Item;

impl SpaceEngine {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent, items: &[Item]) {
        profile_scope!("handle_pointer_move");

        let world = {
            let ctx = CoordinateContext::new(&self.camera, self.viewport);
            CoordinateConverter::screen_to_world(event.position, &ctx)
        };
        let zoom = self.camera.zoom;
        let grid_snap = self.prefs.layout.grid_compatible();

        match &mut self.input {
            InputState::Idle => {
                // Track which edge affordance faces the cursor while
                // hovering, so the shell can draw it.
                self.hovered_edge = top_hit(items, &self.index, world)
                    .map(|item| (item.id.clone(), crate::connections::nearest_edge(item.rect(), world)));
            }

            InputState::Panning {
                last_pos,
                last_delta,
            } => {
                let delta = event.position - *last_pos;
                *last_pos = event.position;
                *last_delta = delta;
                self.camera.x += delta.x;
                self.camera.y += delta.y;
                self.effects.push(Effect::Camera(self.camera));
            }

            InputState::DraggingItems { session } => {
                profile_scope!("item_drag");

                let pointer_dx = event.position.x - session.last_pointer_screen.x;
                session.last_pointer_screen = event.position;
                session.tilt.update(pointer_dx);

                // Offset is recomputed from the session snapshots every
                // move; the snap is anchored on the primary item.
                let raw = world - session.start_pointer_world;
                if grid_snap {
                    if let Some(start) = session.start_positions.get(&session.primary) {
                        let snapped = snap_position(*start + raw);
                        session.offset = snapped.point - *start;
                        session.snapped = snapped.on_grid();
                    } else {
                        session.offset = raw;
                        session.snapped = false;
                    }
                } else {
                    session.offset = raw;
                    session.snapped = false;
                }

                // Only an explicit folder target counts for drop-merge.
                session.drop_target = top_stack_hit(items, &self.index, world, &session.ids);
            }

            InputState::Resizing { session } => {
                profile_scope!("item_resize");

                let delta =
                    CoordinateConverter::delta_screen_to_world(event.position - session.start_pointer_screen, zoom);
                let mut w = (session.start_size.w + delta.x).max(MIN_ITEM_SIZE);
                let mut h = (session.start_size.h + delta.y).max(MIN_ITEM_SIZE);
                if grid_snap {
                    w = snap_extent(w);
                    h = snap_extent(h);
                }
                session.size = Size::new(w, h);

                // Rotation follows the angle from the fixed top-left corner
                // to the cursor, zeroed along the handle diagonal.
                let d = world - session.origin;
                let angle = d.y.atan2(d.x).to_degrees();
                session.rotation = ((angle - RESIZE_ROTATION_OFFSET_DEGREES)
                    * RESIZE_ROTATION_DAMPING)
                    .clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES);
            }

            InputState::Lassoing { current, .. } => {
                *current = world;
            }

            InputState::ConnectingEdge { session } => {
                session.cursor = world;
            }
        }
    }
}
