//! Pointer-up handling - finalize the active session.
//!
//! Pointer-up is the only place a gesture becomes durable: the session's
//! final deltas are turned into patches for the external store, then the
//! state machine returns to Idle and the session is discarded.

use crate::camera::Inertia;
use crate::constants::{CONNECT_CLICK_THRESHOLD, INERTIA_MIN_VELOCITY, MIN_LASSO_SIZE};
use crate::engine::{Effect, ItemPatch, PromptScope, SpaceEngine, find_item, top_hit, top_stack_hit};
use crate::events::PointerEvent;
use crate::geometry::Rect;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::state::InputState;
use crate::types::Item;

impl SpaceEngine {
    pub fn handle_pointer_up(&mut self, event: &PointerEvent, items: &[Item]) {
        let world = {
            let ctx = CoordinateContext::new(&self.camera, self.viewport);
            CoordinateConverter::screen_to_world(event.position, &ctx)
        };

        let finished = std::mem::replace(&mut self.input, InputState::Idle);
        match finished {
            InputState::Idle => {}

            InputState::Panning { last_delta, .. } => {
                // The last per-frame delta becomes the coasting velocity;
                // a release from rest never starts the loop.
                if last_delta.x.abs() >= INERTIA_MIN_VELOCITY
                    || last_delta.y.abs() >= INERTIA_MIN_VELOCITY
                {
                    self.inertia = Some(Inertia::new(last_delta));
                }
            }

            InputState::DraggingItems { session } => {
                if !session.moved() {
                    return;
                }

                // Grid-aligned drops sit flat; free drops keep a fraction
                // of the accumulated tilt.
                let rotation = if session.snapped {
                    0.0
                } else {
                    session.tilt.settle()
                };

                let mut patches = Vec::with_capacity(session.ids.len() * 2);
                for id in &session.ids {
                    let Some(pos) = session.visual_position(id) else {
                        continue;
                    };
                    patches.push(ItemPatch::Geometry {
                        id: id.clone(),
                        x: Some(pos.x),
                        y: Some(pos.y),
                        w: None,
                        h: None,
                        rotation: Some(rotation),
                    });
                    patches.push(ItemPatch::ManuallyPositioned { id: id.clone() });
                    if let Some(item) = find_item(items, id) {
                        self.index
                            .update(id.clone(), Rect::new(pos.x, pos.y, item.w, item.h));
                    }
                }
                self.effects.push(Effect::Items(patches));

                // Dropping onto a folder merges; the store owns the merge
                // semantics, we only signal source + target.
                if let Some(target) = top_stack_hit(items, &self.index, world, &session.ids) {
                    self.effects.push(Effect::StackRequest {
                        sources: session.ids.clone(),
                        target,
                    });
                }
            }

            InputState::Resizing { session } => {
                self.effects.push(Effect::Items(vec![
                    ItemPatch::Geometry {
                        id: session.id.clone(),
                        x: None,
                        y: None,
                        w: Some(session.size.w),
                        h: Some(session.size.h),
                        rotation: Some(session.rotation),
                    },
                    ItemPatch::ManuallyPositioned {
                        id: session.id.clone(),
                    },
                ]));
                self.index.update(
                    session.id.clone(),
                    Rect::new(
                        session.origin.x,
                        session.origin.y,
                        session.size.w,
                        session.size.h,
                    ),
                );
            }

            InputState::Lassoing {
                start,
                current,
                down_screen,
            } => {
                // A lasso that never really moved is a deselect-all.
                if event.position.distance(down_screen) <= MIN_LASSO_SIZE {
                    self.selection.clear();
                    self.effects.push(Effect::Selection(Vec::new()));
                    return;
                }

                let lasso = Rect::from_corners(start, current);
                let mut ids = self.index.query_rect(
                    lasso.x,
                    lasso.y,
                    lasso.max_x(),
                    lasso.max_y(),
                );
                // The index query is envelope-based; re-check with the
                // strict overlap test so edge-touching items stay out.
                ids.retain(|id| {
                    find_item(items, id).is_some_and(|item| item.rect().intersects(&lasso))
                });
                self.selection.replace(ids.iter().cloned());
                self.effects.push(Effect::Selection(ids));
            }

            InputState::ConnectingEdge { session } => {
                // Down+up within a few pixels is a click on the affordance:
                // open the authoring prompt anchored at this edge.
                if event.position.distance(session.down_screen) <= CONNECT_CLICK_THRESHOLD {
                    self.effects.push(Effect::OpenPrompt {
                        position: session.anchor,
                        scope: PromptScope::Item(session.from.clone()),
                    });
                    return;
                }

                // Releasing over another item creates the connection;
                // anywhere else cancels without effect.
                if let Some(target) = top_hit(items, &self.index, world) {
                    if target.id != session.from {
                        if let Ok(conn) = self.connections.create(&session.from, &target.id) {
                            self.effects.push(Effect::ConnectionCreated(conn));
                        }
                    }
                }
            }
        }
    }
}
