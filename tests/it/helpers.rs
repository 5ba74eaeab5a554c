//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestSpace` - an engine plus an item collection, wired together the
//!   way an embedding shell would do it (effects applied after every event)
//! - `TestSpaceBuilder` - builder for seeding items with staggered
//!   timestamps
//! - Item constructors like `sticky_at()`, `stack_at()`, etc.

use driftspace::engine::apply_item_patches;
use driftspace::{
    Camera, Effect, Item, ItemContent, ItemId, Modifiers, Point, PointerButton, PointerEvent,
    Size, SpaceEngine, ViewPrefs,
};
use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber once for the whole binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub const VIEWPORT: Size = Size { w: 1280.0, h: 800.0 };

// ============================================================================
// Item constructors
// ============================================================================

pub fn sticky_at(text: &str, pos: (f32, f32)) -> Item {
    Item::new(
        Point::new(pos.0, pos.1),
        ItemContent::Sticky {
            text: text.to_string(),
            color: "#ffd866".to_string(),
        },
    )
}

pub fn note_at(text: &str, pos: (f32, f32)) -> Item {
    Item::new(
        Point::new(pos.0, pos.1),
        ItemContent::Note {
            text: text.to_string(),
        },
    )
}

pub fn image_at(source: &str, pos: (f32, f32)) -> Item {
    Item::new(
        Point::new(pos.0, pos.1),
        ItemContent::Image {
            source: source.to_string(),
        },
    )
}

pub fn stack_at(title: &str, pos: (f32, f32)) -> Item {
    Item::new(
        Point::new(pos.0, pos.1),
        ItemContent::Stack {
            space_id: format!("space-{title}"),
            title: title.to_string(),
        },
    )
}

/// A sticky with an explicit size, for geometry-sensitive tests.
pub fn sticky_sized(text: &str, pos: (f32, f32), size: (f32, f32)) -> Item {
    let mut item = sticky_at(text, pos);
    item.w = size.0;
    item.h = size.1;
    item
}

// ============================================================================
// TestSpace - engine + collection wired like an embedding shell
// ============================================================================

/// An engine plus the externally-owned item collection, with every emitted
/// effect applied immediately and logged for assertions.
pub struct TestSpace {
    pub engine: SpaceEngine,
    pub items: Vec<Item>,
    pub log: Vec<Effect>,
}

impl Default for TestSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSpace {
    pub fn new() -> Self {
        init_tracing();
        Self {
            engine: SpaceEngine::new(VIEWPORT),
            items: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Drain engine effects, apply item patches, and log everything.
    pub fn pump(&mut self) {
        for effect in self.engine.take_effects() {
            if let Effect::Items(patches) = &effect {
                apply_item_patches(&mut self.items, patches);
            }
            self.log.push(effect);
        }
    }

    pub fn item(&self, id: &ItemId) -> &Item {
        self.items
            .iter()
            .find(|i| i.id == *id)
            .unwrap_or_else(|| panic!("item {id} not found"))
    }

    /// Screen position of a world point under the current camera.
    pub fn screen_at(&self, world: Point) -> Point {
        self.engine
            .camera()
            .world_to_screen(world, self.engine.viewport())
    }

    // ------------------------------------------------------------------
    // World-space pointer API (screen position derived per call)
    // ------------------------------------------------------------------

    pub fn down(&mut self, world: Point) {
        self.down_with(world, PointerButton::Left, Modifiers::default(), 1);
    }

    pub fn down_with(
        &mut self,
        world: Point,
        button: PointerButton,
        modifiers: Modifiers,
        click_count: u32,
    ) {
        let event = PointerEvent::new(self.screen_at(world), button)
            .with_modifiers(modifiers)
            .with_click_count(click_count);
        self.engine.handle_pointer_down(&event, &self.items);
        self.pump();
    }

    pub fn mv(&mut self, world: Point) {
        let event = PointerEvent::new(self.screen_at(world), PointerButton::Left);
        self.engine.handle_pointer_move(&event, &self.items);
        self.pump();
    }

    pub fn up(&mut self, world: Point) {
        let event = PointerEvent::new(self.screen_at(world), PointerButton::Left);
        self.engine.handle_pointer_up(&event, &self.items);
        self.pump();
    }

    /// A full down-move-up drag between two world points.
    pub fn drag(&mut self, from: Point, to: Point) {
        self.down(from);
        self.mv(to);
        self.up(to);
    }

    // ------------------------------------------------------------------
    // Screen-space pointer API (for pan gestures, where the camera moves
    // underneath the pointer)
    // ------------------------------------------------------------------

    pub fn down_screen(&mut self, screen: Point, button: PointerButton) {
        let event = PointerEvent::new(screen, button);
        self.engine.handle_pointer_down(&event, &self.items);
        self.pump();
    }

    pub fn move_screen(&mut self, screen: Point) {
        let event = PointerEvent::new(screen, PointerButton::Left);
        self.engine.handle_pointer_move(&event, &self.items);
        self.pump();
    }

    pub fn up_screen(&mut self, screen: Point) {
        let event = PointerEvent::new(screen, PointerButton::Left);
        self.engine.handle_pointer_up(&event, &self.items);
        self.pump();
    }

    // ------------------------------------------------------------------
    // Assertions / queries
    // ------------------------------------------------------------------

    pub fn selection(&self) -> Vec<ItemId> {
        let mut ids = self.engine.selection().ids();
        ids.sort();
        ids
    }

    pub fn stack_requests(&self) -> Vec<(Vec<ItemId>, ItemId)> {
        self.log
            .iter()
            .filter_map(|e| match e {
                Effect::StackRequest { sources, target } => {
                    Some((sources.clone(), target.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<&Effect> {
        self.log
            .iter()
            .filter(|e| matches!(e, Effect::OpenPrompt { .. }))
            .collect()
    }
}

// ============================================================================
// TestSpaceBuilder
// ============================================================================

/// Builder seeding a `TestSpace` with items whose `added_at`/`updated_at`
/// timestamps are staggered in insertion order, so `SortKey::Added` tests
/// are deterministic.
pub struct TestSpaceBuilder {
    items: Vec<Item>,
    prefs: Option<ViewPrefs>,
    camera: Option<Camera>,
}

impl Default for TestSpaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSpaceBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            prefs: None,
            camera: None,
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_sticky(self, text: &str, pos: (f32, f32)) -> Self {
        let item = sticky_at(text, pos);
        self.with_item(item)
    }

    /// Add N stickies at (i * spacing, 0).
    pub fn with_n_stickies(mut self, count: usize, spacing: f32) -> Self {
        for i in 0..count {
            self.items
                .push(sticky_at(&format!("Item {i}"), (i as f32 * spacing, 0.0)));
        }
        self
    }

    pub fn with_prefs(mut self, prefs: ViewPrefs) -> Self {
        self.prefs = Some(prefs);
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn build(self) -> TestSpace {
        let mut space = TestSpace::new();
        if let Some(prefs) = self.prefs {
            space.engine.set_prefs(prefs);
        }
        if let Some(camera) = self.camera {
            space.engine.set_camera(camera);
        }
        for (i, mut item) in self.items.into_iter().enumerate() {
            item.metadata.added_at = 1_000 * (i as u64 + 1);
            item.metadata.updated_at = item.metadata.added_at;
            space.items.push(item);
        }
        space.engine.sync_items(&space.items);
        space
    }
}

/// Stagger timestamps on a plain item list (for pure layout tests).
pub fn staggered(mut items: Vec<Item>) -> Vec<Item> {
    for (i, item) in items.iter_mut().enumerate() {
        item.metadata.added_at = 1_000 * (i as u64 + 1);
        item.metadata.updated_at = item.metadata.added_at;
    }
    items
}
