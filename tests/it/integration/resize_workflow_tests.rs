//! Resize sessions: corner grabs, size floors, magnetic size snap, and
//! corner-driven rotation.

use crate::helpers::TestSpaceBuilder;
use driftspace::constants::{GRID_GAP, GRID_SLOT_SIZE, MAX_TILT_DEGREES, MIN_ITEM_SIZE};
use driftspace::layout::{LayoutKind, ViewPrefs};
use driftspace::Point;

#[test]
fn test_corner_drag_resizes_from_snapshot() {
    let mut space = TestSpaceBuilder::new().with_sticky("a", (0.0, 0.0)).build();
    let id = space.items[0].id.clone();

    // Grab just inside the bottom-right corner, pull out by (100, 50).
    space.down(Point::new(195.0, 195.0));
    assert!(space.engine.input().is_resizing());
    space.mv(Point::new(295.0, 245.0));
    space.up(Point::new(295.0, 245.0));

    let item = space.item(&id);
    assert_eq!(item.w, 300.0);
    assert_eq!(item.h, 250.0);
    // Top-left corner stays fixed.
    assert_eq!((item.x, item.y), (0.0, 0.0));
    assert!(item.metadata.manually_positioned);
}

#[test]
fn test_resize_floors_at_half_a_cell() {
    let mut space = TestSpaceBuilder::new().with_sticky("a", (0.0, 0.0)).build();
    let id = space.items[0].id.clone();

    space.down(Point::new(195.0, 195.0));
    space.mv(Point::new(-400.0, -400.0));
    space.up(Point::new(-400.0, -400.0));

    let item = space.item(&id);
    assert_eq!(item.w, MIN_ITEM_SIZE);
    assert_eq!(item.h, MIN_ITEM_SIZE);
}

#[test]
fn test_resize_snaps_extent_in_grid_mode() {
    let mut space = TestSpaceBuilder::new()
        .with_sticky("a", (0.0, 0.0))
        .with_prefs(ViewPrefs {
            layout: LayoutKind::Grid,
            ..ViewPrefs::default()
        })
        .build();
    let id = space.items[0].id.clone();
    let two_cells = 2.0 * GRID_SLOT_SIZE - GRID_GAP;

    // Pull width to 415: five pixels inside the two-cell snap tolerance.
    space.down(Point::new(195.0, 195.0));
    space.mv(Point::new(410.0, 195.0));
    space.up(Point::new(410.0, 195.0));

    let item = space.item(&id);
    assert_eq!(item.w, two_cells);
    // Height barely moved and snaps back to one cell.
    assert_eq!(item.h, GRID_SLOT_SIZE - GRID_GAP);
}

#[test]
fn test_resize_rotation_follows_corner_angle_damped() {
    let mut space = TestSpaceBuilder::new().with_sticky("a", (0.0, 0.0)).build();
    let id = space.items[0].id.clone();

    // Pull straight right: the corner angle drops below the 45-degree
    // diagonal, rotating slightly counter-clockwise.
    space.down(Point::new(195.0, 195.0));
    space.mv(Point::new(295.0, 195.0));
    space.up(Point::new(295.0, 195.0));

    let item = space.item(&id);
    assert!(item.rotation < 0.0);
    assert!(item.rotation.abs() <= MAX_TILT_DEGREES);

    // Pulling along the diagonal keeps rotation near zero.
    let mut space = TestSpaceBuilder::new().with_sticky("b", (0.0, 0.0)).build();
    let id = space.items[0].id.clone();
    space.down(Point::new(195.0, 195.0));
    space.mv(Point::new(395.0, 395.0));
    space.up(Point::new(395.0, 395.0));
    assert!(space.item(&id).rotation.abs() < 0.5);
}

#[test]
fn test_resize_under_zoom_scales_pointer_delta() {
    let mut space = TestSpaceBuilder::new()
        .with_sticky("a", (0.0, 0.0))
        .with_camera(driftspace::Camera {
            x: 0.0,
            y: 0.0,
            zoom: 2.0,
        })
        .build();
    let id = space.items[0].id.clone();

    // 100 screen pixels of travel are 50 world units at 2x zoom.
    let corner = space.screen_at(Point::new(195.0, 195.0));
    space.down_screen(corner, driftspace::PointerButton::Left);
    assert!(space.engine.input().is_resizing());
    space.move_screen(Point::new(corner.x + 100.0, corner.y));
    space.up_screen(Point::new(corner.x + 100.0, corner.y));

    assert_eq!(space.item(&id).w, 250.0);
}
