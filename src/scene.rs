//! Scene assembly for the presentation layer.
//!
//! The renderer never reads interaction sessions directly: it asks this
//! module for a visual item list with the transient drag/resize overlay
//! already applied on top of authoritative geometry, culled to the
//! viewport. The overlay exists only while a session is live; the moment
//! pointer-up commits, authoritative state and visuals coincide again.

use crate::connections::RoutedConnection;
use crate::constants::CULLING_MARGIN;
use crate::engine::SpaceEngine;
use crate::geometry::{Point, Rect};
use crate::input::InputState;
use crate::types::{Item, ItemId, ItemKind};
use std::collections::HashMap;

/// One item as the renderer should draw it this frame.
#[derive(Clone, Debug)]
pub struct VisualItem {
    pub id: ItemId,
    /// World-space rectangle, session overlay applied
    pub rect: Rect,
    /// Degrees, session overlay applied
    pub rotation: f32,
    pub z_index: i64,
    pub kind: ItemKind,
    pub selected: bool,
    /// Part of the live drag/resize session
    pub active: bool,
    /// Currently hovered as a stack drop target
    pub drop_target: bool,
}

/// World-space rectangle of an item with any live session overlay applied.
fn overlay_geometry(item: &Item, input: &InputState) -> (Rect, f32, bool) {
    match input {
        InputState::DraggingItems { session } => {
            if let Some(pos) = session.visual_position(&item.id) {
                let rect = Rect::new(pos.x, pos.y, item.w, item.h);
                return (rect, session.tilt.value(), true);
            }
        }
        InputState::Resizing { session } if session.id == item.id => {
            let rect = Rect::new(
                session.origin.x,
                session.origin.y,
                session.size.w,
                session.size.h,
            );
            return (rect, session.rotation, true);
        }
        _ => {}
    }
    (item.rect(), item.rotation, false)
}

/// Assemble the draw list: overlay, cull, sort back-to-front.
pub fn visual_items(items: &[Item], engine: &SpaceEngine) -> Vec<VisualItem> {
    let viewport = engine.viewport();
    let camera = engine.camera();
    let margin = Point::new(CULLING_MARGIN, CULLING_MARGIN);
    let top_left = camera.screen_to_world(Point::ZERO - margin, viewport);
    let bottom_right = camera.screen_to_world(
        Point::new(viewport.w, viewport.h) + margin,
        viewport,
    );
    let view = Rect::from_corners(top_left, bottom_right);

    let drop_target = engine
        .input()
        .drag_session()
        .and_then(|s| s.drop_target.clone());

    let mut visuals: Vec<VisualItem> = items
        .iter()
        .filter_map(|item| {
            let (rect, rotation, active) = overlay_geometry(item, engine.input());
            if !rect.intersects(&view) {
                return None;
            }
            Some(VisualItem {
                id: item.id.clone(),
                rect,
                rotation,
                z_index: item.z_index,
                kind: item.kind(),
                selected: engine.selection().contains(&item.id),
                active,
                drop_target: drop_target.as_ref() == Some(&item.id),
            })
        })
        .collect();

    // Stable by z; insertion order already breaks ties.
    visuals.sort_by_key(|v| v.z_index);
    visuals
}

/// The live lasso rectangle in world space, if one is being drawn.
pub fn lasso_rect(engine: &SpaceEngine) -> Option<Rect> {
    engine
        .input()
        .lasso_corners()
        .map(|(a, b)| Rect::from_corners(a, b))
}

/// The rubber-band connection line, anchor to cursor, in world space.
pub fn connect_line(engine: &SpaceEngine) -> Option<(Point, Point)> {
    engine
        .input()
        .connect_session()
        .map(|s| (s.anchor, s.cursor))
}

/// Route every connection against this frame's visual geometry.
///
/// Routing is recomputed per frame from live (overlay-applied) rectangles,
/// never cached: endpoints follow items mid-drag.
pub fn routed_connections(items: &[Item], engine: &SpaceEngine) -> Vec<RoutedConnection> {
    let rects: HashMap<ItemId, Rect> = items
        .iter()
        .map(|item| {
            let (rect, _, _) = overlay_geometry(item, engine.input());
            (item.id.clone(), rect)
        })
        .collect();
    engine.connections().routed(&rects)
}
