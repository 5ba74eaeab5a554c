//! Camera model: the pan/zoom transform between world and screen space,
//! plus the first-order inertia decay used after a pan release.
//!
//! The transform is anchored at the viewport center, so world origin renders
//! in the middle of the screen when the camera is at rest:
//!
//! ```text
//! screen = world * zoom + camera + viewport / 2
//! ```

use crate::constants::{DEFAULT_ZOOM, INERTIA_FRICTION, INERTIA_MIN_VELOCITY, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// The pan/zoom transform for one workspace view.
///
/// `x`/`y` are the pan offset in screen pixels; `zoom` is a scalar kept in
/// `[MIN_ZOOM, MAX_ZOOM]`. Externally-restored cameras must pass through
/// [`Camera::clamped`] before use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Camera {
    /// Return a copy with zoom forced into the legal range.
    pub fn clamped(mut self) -> Self {
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }

    /// Convert a screen-space point (pixels) to world coordinates.
    pub fn screen_to_world(&self, screen: Point, viewport: Size) -> Point {
        Point {
            x: (screen.x - viewport.w / 2.0 - self.x) / self.zoom,
            y: (screen.y - viewport.h / 2.0 - self.y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (pixels).
    pub fn world_to_screen(&self, world: Point, viewport: Size) -> Point {
        Point {
            x: world.x * self.zoom + self.x + viewport.w / 2.0,
            y: world.y * self.zoom + self.y + viewport.h / 2.0,
        }
    }

    /// Zoom by `delta`, keeping the world point under `cursor` stationary.
    ///
    /// The world point is resolved under the old transform, then the pan
    /// offset is re-derived so the same point maps back to `cursor` under
    /// the new zoom.
    pub fn zoom_to_cursor(&self, cursor: Point, delta: f32, viewport: Size) -> Camera {
        let new_zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        let anchor = self.screen_to_world(cursor, viewport);
        Camera {
            x: cursor.x - viewport.w / 2.0 - anchor.x * new_zoom,
            y: cursor.y - viewport.h / 2.0 - anchor.y * new_zoom,
            zoom: new_zoom,
        }
    }
}

/// Coasting state after a pan release.
///
/// The last observed per-frame pointer delta seeds the velocity; each frame
/// decays it and advances the camera until both components drop below the
/// stop threshold. Any new interaction must discard this immediately.
#[derive(Clone, Copy, Debug)]
pub struct Inertia {
    pub velocity: Point,
}

impl Inertia {
    pub fn new(velocity: Point) -> Self {
        Self { velocity }
    }

    /// Advance one frame. Returns `false` once the camera has settled.
    pub fn tick(&mut self, camera: &mut Camera) -> bool {
        self.velocity = self.velocity * INERTIA_FRICTION;
        camera.x += self.velocity.x;
        camera.y += self.velocity.y;
        self.velocity.x.abs() >= INERTIA_MIN_VELOCITY
            || self.velocity.y.abs() >= INERTIA_MIN_VELOCITY
    }
}
