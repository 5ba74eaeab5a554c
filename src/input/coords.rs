//! Coordinate conversion utilities for canvas interactions.
//!
//! Centralized converters so the screen/world formulas live in one place
//! instead of being repeated across the pointer handlers. The transform is
//! viewport-center anchored; see [`crate::camera`] for the math.

use crate::camera::Camera;
use crate::geometry::{Point, Size};

/// Context needed for coordinate conversions
pub struct CoordinateContext<'a> {
    pub camera: &'a Camera,
    pub viewport: Size,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(camera: &'a Camera, viewport: Size) -> Self {
        Self { camera, viewport }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to world position
    #[inline]
    pub fn screen_to_world(screen: Point, ctx: &CoordinateContext<'_>) -> Point {
        ctx.camera.screen_to_world(screen, ctx.viewport)
    }

    /// Convert world position to screen position
    #[inline]
    pub fn world_to_screen(world: Point, ctx: &CoordinateContext<'_>) -> Point {
        ctx.camera.world_to_screen(world, ctx.viewport)
    }

    /// Convert a delta from screen to world (for drag operations)
    #[inline]
    pub fn delta_screen_to_world(delta: Point, zoom: f32) -> Point {
        delta / zoom
    }

    /// Convert a delta from world to screen
    #[inline]
    pub fn delta_world_to_screen(delta: Point, zoom: f32) -> Point {
        delta * zoom
    }
}
