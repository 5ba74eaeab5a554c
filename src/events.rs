//! Input event types delivered by the embedding shell.
//!
//! The engine is toolkit-agnostic: the shell translates its native pointer,
//! wheel, and keyboard events into these structs. Positions are screen-space
//! pixels relative to the viewport top-left. Modifier state (including the
//! space-held pan modifier) is tracked by the shell and passed along with
//! every event.

use crate::geometry::Point;

/// Which pointer button an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Standard keyboard modifier flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    /// Cmd on macOS, Win elsewhere
    pub platform: bool,
    /// True while the space bar is held (pan modifier)
    pub space: bool,
}

/// A pointer-down/move/up event.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    /// 1 for a single click, 2 for a double click
    pub click_count: u32,
}

impl PointerEvent {
    pub fn new(position: Point, button: PointerButton) -> Self {
        Self {
            position,
            button,
            modifiers: Modifiers::default(),
            click_count: 1,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_click_count(mut self, count: u32) -> Self {
        self.click_count = count;
        self
    }
}

/// Scroll delta in the unit the platform reports.
#[derive(Clone, Copy, Debug)]
pub enum WheelDelta {
    Pixels(Point),
    Lines(Point),
}

/// A scroll-wheel / trackpad event.
#[derive(Clone, Copy, Debug)]
pub struct WheelEvent {
    pub position: Point,
    pub delta: WheelDelta,
    pub modifiers: Modifiers,
}
