//! Unit tests for model serialization.

use crate::helpers::{stack_at, sticky_at};
use driftspace::layout::{LayoutKind, ViewPrefs};
use driftspace::{Item, ItemKind};

#[test]
fn test_item_round_trips_through_json() {
    let item = sticky_at("hello", (12.5, -40.0));
    let json = serde_json::to_string(&item).unwrap();
    let back: Item = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, item.id);
    assert_eq!((back.x, back.y, back.w, back.h), (12.5, -40.0, 200.0, 200.0));
    assert_eq!(back.kind(), ItemKind::Sticky);
}

#[test]
fn test_unknown_metadata_fields_survive() {
    let mut item = stack_at("projects", (0.0, 0.0));
    item.metadata.extra.insert(
        "generatedBy".to_string(),
        serde_json::Value::String("assistant".to_string()),
    );

    let json = serde_json::to_string(&item).unwrap();
    let back: Item = serde_json::from_str(&json).unwrap();

    assert_eq!(
        back.metadata.extra.get("generatedBy"),
        Some(&serde_json::Value::String("assistant".to_string()))
    );
    assert_eq!(back.linked_space_id(), item.linked_space_id());
}

#[test]
fn test_view_prefs_deserialize_with_defaults() {
    let prefs: ViewPrefs = serde_json::from_str(r#"{"layout":"grid"}"#).unwrap();
    assert_eq!(prefs.layout, LayoutKind::Grid);
    // Missing fields fall back to defaults.
    assert_eq!(prefs, ViewPrefs {
        layout: LayoutKind::Grid,
        ..ViewPrefs::default()
    });
}
