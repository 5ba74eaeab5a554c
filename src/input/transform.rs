//! Wheel handling - canvas panning and zoom-to-cursor.

use crate::constants::{SCROLL_LINE_HEIGHT, ZOOM_LINE_STEP, ZOOM_WHEEL_STEP};
use crate::engine::{Effect, SpaceEngine};
use crate::events::{WheelDelta, WheelEvent};

impl SpaceEngine {
    pub fn handle_wheel(&mut self, event: &WheelEvent) {
        self.cancel_inertia();

        // Zoom with Command (platform) or Control held, anchored at the
        // cursor so the world point under it stays put.
        if event.modifiers.platform || event.modifiers.control {
            let delta = match event.delta {
                WheelDelta::Pixels(d) => -d.y * ZOOM_WHEEL_STEP,
                WheelDelta::Lines(d) => -d.y * ZOOM_LINE_STEP,
            };
            if delta.abs() > f32::EPSILON {
                self.camera = self
                    .camera
                    .zoom_to_cursor(event.position, delta, self.viewport);
                self.effects.push(Effect::Camera(self.camera));
            }
            return;
        }

        // Default: scroll pans the canvas.
        let delta = match event.delta {
            WheelDelta::Pixels(d) => d,
            WheelDelta::Lines(d) => d * SCROLL_LINE_HEIGHT,
        };
        self.camera.x += delta.x;
        self.camera.y += delta.y;
        self.effects.push(Effect::Camera(self.camera));
    }
}
