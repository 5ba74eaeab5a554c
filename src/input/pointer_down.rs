//! Pointer-down handling - selection, drag/resize/connect initiation.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during user interaction. Key optimizations:
//! - O(log n) hit testing via the R-tree spatial index
//! - One coordinate transform per event
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::connections::nearest_edge;
use crate::constants::{CONNECT_HANDLE_RADIUS, RESIZE_CORNER_SIZE, RESIZE_CORNER_TOLERANCE};
use crate::engine::{Effect, ItemPatch, PromptScope, SpaceEngine, find_item, max_z, top_hit};
use crate::events::{PointerButton, PointerEvent};
use crate::geometry::Point;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::state::{ConnectSession, DragSession, InputState, ResizeSession};
use crate::profile_scope;
use crate::types::Item;
use std::collections::HashMap;

impl SpaceEngine {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent, items: &[Item]) {
        profile_scope!("handle_pointer_down");

        // A new gesture always wins over a coasting camera.
        self.cancel_inertia();

        let world = {
            let ctx = CoordinateContext::new(&self.camera, self.viewport);
            CoordinateConverter::screen_to_world(event.position, &ctx)
        };

        // Middle/right button pans; so does left while space is held.
        let pans = matches!(event.button, PointerButton::Middle | PointerButton::Right)
            || (event.button == PointerButton::Left && event.modifiers.space);
        if pans {
            self.input = InputState::Panning {
                last_pos: event.position,
                last_delta: Point::ZERO,
            };
            return;
        }

        if let Some(item) = top_hit(items, &self.index, world) {
            let rect = item.rect();
            let item_id = item.id.clone();

            // Edge affordance first: starting a connection beats dragging.
            let edge = nearest_edge(rect, world);
            let anchor = edge.midpoint(rect);
            let anchor_screen = {
                let ctx = CoordinateContext::new(&self.camera, self.viewport);
                CoordinateConverter::world_to_screen(anchor, &ctx)
            };
            if event.position.distance(anchor_screen) <= CONNECT_HANDLE_RADIUS {
                self.hovered_edge = None;
                self.input = InputState::ConnectingEdge {
                    session: ConnectSession {
                        from: item_id,
                        edge,
                        anchor,
                        down_screen: event.position,
                        cursor: world,
                    },
                };
                return;
            }

            // Resize corner (bottom-right), hit-tested in screen space so
            // the handle keeps a usable size at any zoom.
            let corner_screen = {
                let ctx = CoordinateContext::new(&self.camera, self.viewport);
                CoordinateConverter::world_to_screen(Point::new(rect.max_x(), rect.max_y()), &ctx)
            };
            let corner_size = RESIZE_CORNER_SIZE * self.camera.zoom;
            let in_corner = event.position.x >= corner_screen.x - corner_size
                && event.position.x <= corner_screen.x + RESIZE_CORNER_TOLERANCE
                && event.position.y >= corner_screen.y - corner_size
                && event.position.y <= corner_screen.y + RESIZE_CORNER_TOLERANCE;
            if in_corner {
                self.input = InputState::Resizing {
                    session: ResizeSession {
                        id: item_id,
                        origin: rect.origin(),
                        start_size: rect.size(),
                        start_rotation: item.rotation,
                        start_cells: item.metadata.grid_cells,
                        start_pointer_screen: event.position,
                        size: rect.size(),
                        rotation: item.rotation,
                    },
                };
                return;
            }

            // Shift toggles membership instead of moving.
            if event.modifiers.shift {
                self.selection.toggle(item_id);
                self.effects.push(Effect::Selection(self.selection.ids()));
                return;
            }

            // Clicking an already-selected item keeps the group; anything
            // else collapses the selection to just this item.
            if !self.selection.contains(&item_id) {
                self.selection.select_only(item_id.clone());
                self.effects.push(Effect::Selection(self.selection.ids()));
            }

            // Bring to front: z strictly increases, ties broken by insertion.
            let occluded = items
                .iter()
                .any(|o| o.id != item_id && o.z_index >= item.z_index);
            if occluded {
                self.effects.push(Effect::Items(vec![ItemPatch::ZIndex {
                    id: item_id.clone(),
                    z_index: max_z(items) + 1,
                }]));
            }

            // Snapshot the starting geometry of every item being moved.
            // All subsequent delta math is based on these, never on the
            // previous frame's output.
            let ids = self.selection.ids();
            let mut start_positions = HashMap::new();
            for id in &ids {
                if let Some(moved) = find_item(items, id) {
                    start_positions.insert(id.clone(), Point::new(moved.x, moved.y));
                }
            }
            self.input = InputState::DraggingItems {
                session: DragSession::new(item_id, ids, start_positions, world, event.position),
            };
        } else {
            // Empty canvas: double-click opens a blank prompt, a plain
            // left press starts the lasso.
            if event.click_count >= 2 {
                self.effects.push(Effect::OpenPrompt {
                    position: world,
                    scope: PromptScope::Blank,
                });
                return;
            }
            self.input = InputState::Lassoing {
                start: world,
                current: world,
                down_screen: event.position,
            };
        }
    }
}
