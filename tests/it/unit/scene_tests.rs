//! Unit tests for scene assembly: session overlays, culling, and
//! per-frame connection routing.

use crate::helpers::{TestSpaceBuilder, sticky_at};
use driftspace::{Point, scene};

#[test]
fn test_drag_overlay_diverges_from_authoritative_state_only_in_session() {
    let mut space = TestSpaceBuilder::new()
        .with_sticky("a", (0.0, 0.0))
        .build();
    let id = space.items[0].id.clone();

    space.down(Point::new(100.0, 100.0));
    space.mv(Point::new(160.0, 100.0));

    // The authoritative item has not moved yet...
    assert_eq!(space.item(&id).x, 0.0);

    // ...but the visual list already shows the in-flight offset and tilt.
    let visuals = scene::visual_items(&space.items, &space.engine);
    let visual = visuals.iter().find(|v| v.id == id).unwrap();
    assert_eq!(visual.rect.x, 60.0);
    assert!(visual.active);
    assert!(visual.rotation > 0.0);

    // After release the overlay is gone and both views coincide.
    space.up(Point::new(160.0, 100.0));
    let visuals = scene::visual_items(&space.items, &space.engine);
    let visual = visuals.iter().find(|v| v.id == id).unwrap();
    assert_eq!(visual.rect.x, space.item(&id).x);
    assert!(!visual.active);
}

#[test]
fn test_offscreen_items_are_culled() {
    let space = TestSpaceBuilder::new()
        .with_sticky("near", (0.0, 0.0))
        .with_sticky("far", (50_000.0, 50_000.0))
        .build();
    let near = space.items[0].id.clone();

    let visuals = scene::visual_items(&space.items, &space.engine);
    assert_eq!(visuals.len(), 1);
    assert_eq!(visuals[0].id, near);
}

#[test]
fn test_visuals_sorted_by_z() {
    let mut space = TestSpaceBuilder::new()
        .with_sticky("bottom", (0.0, 0.0))
        .with_sticky("top", (50.0, 50.0))
        .build();
    let top = space.items[1].id.clone();

    // Clicking "top" raises it.
    space.down(Point::new(150.0, 150.0));
    space.up(Point::new(150.0, 150.0));

    let visuals = scene::visual_items(&space.items, &space.engine);
    assert_eq!(visuals.last().unwrap().id, top);
}

#[test]
fn test_routing_follows_live_drag_geometry() {
    let mut space = TestSpaceBuilder::new()
        .with_sticky("a", (0.0, 0.0))
        .with_sticky("b", (400.0, 0.0))
        .build();
    let a = space.items[0].id.clone();
    let b = space.items[1].id.clone();
    space.engine.create_connection(&a, &b).unwrap();
    space.pump();

    let before = scene::routed_connections(&space.items, &space.engine);
    assert_eq!(before[0].from, Point::new(200.0, 100.0));

    // Drag "a" down mid-session: the routed endpoint follows the overlay.
    space.down(Point::new(100.0, 100.0));
    space.mv(Point::new(100.0, 400.0));
    let during = scene::routed_connections(&space.items, &space.engine);
    assert_ne!(during[0].from, before[0].from);

    space.up(Point::new(100.0, 400.0));
}

#[test]
fn test_lasso_and_connect_visuals() {
    let mut space = TestSpaceBuilder::new()
        .with_item(sticky_at("a", (0.0, 0.0)))
        .build();

    assert!(scene::lasso_rect(&space.engine).is_none());
    space.down(Point::new(400.0, 400.0));
    space.mv(Point::new(500.0, 480.0));
    let lasso = scene::lasso_rect(&space.engine).unwrap();
    assert_eq!((lasso.w, lasso.h), (100.0, 80.0));
    space.up(Point::new(500.0, 480.0));

    // Edge affordance drag exposes the rubber band.
    space.down(Point::new(198.0, 100.0));
    space.mv(Point::new(320.0, 150.0));
    let (from, to) = scene::connect_line(&space.engine).unwrap();
    assert_eq!(from, Point::new(200.0, 100.0));
    assert_eq!(to, Point::new(320.0, 150.0));
    space.up(Point::new(320.0, 150.0));
}
