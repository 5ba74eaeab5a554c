//! Unit tests for connection bookkeeping and routing.

use driftspace::{ConnectionError, ConnectionManager, Connection, Point, Rect};
use std::collections::HashMap;

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item-{i}")).collect()
}

#[test]
fn test_unordered_pair_uniqueness() {
    let [a, b] = [ids(2)[0].clone(), ids(2)[1].clone()];
    let mut manager = ConnectionManager::new();

    manager.create(&a, &b).unwrap();
    assert_eq!(manager.create(&b, &a), Err(ConnectionError::Duplicate));
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_remove_by_id() {
    let [a, b] = [ids(2)[0].clone(), ids(2)[1].clone()];
    let mut manager = ConnectionManager::new();

    let conn = manager.create(&a, &b).unwrap();
    assert!(manager.remove(&conn.id).is_some());
    assert!(manager.is_empty());
    assert!(manager.remove(&conn.id).is_none());
}

#[test]
fn test_prune_item_removes_every_reference() {
    let ids = ids(4);
    let mut manager = ConnectionManager::new();
    manager.create(&ids[0], &ids[1]).unwrap();
    manager.create(&ids[0], &ids[2]).unwrap();
    manager.create(&ids[2], &ids[3]).unwrap();

    let removed = manager.prune_item(&ids[0]);
    assert_eq!(removed.len(), 2);
    assert_eq!(manager.len(), 1);
    assert!(manager.iter().all(|c| !c.touches(&ids[0])));
}

#[test]
fn test_restore_drops_invalid_entries() {
    let ids = ids(2);
    let dup_a = Connection::new(ids[0].clone(), ids[1].clone());
    let dup_b = Connection::new(ids[1].clone(), ids[0].clone());
    let self_link = Connection::new(ids[0].clone(), ids[0].clone());

    let manager = ConnectionManager::restore(vec![dup_a, dup_b, self_link]);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_routed_skips_dangling_endpoints() {
    let ids = ids(3);
    let mut manager = ConnectionManager::new();
    manager.create(&ids[0], &ids[1]).unwrap();
    manager.create(&ids[1], &ids[2]).unwrap();

    // Only two of three items still resolve.
    let mut rects = HashMap::new();
    rects.insert(ids[0].clone(), Rect::new(0.0, 0.0, 100.0, 100.0));
    rects.insert(ids[1].clone(), Rect::new(300.0, 0.0, 100.0, 100.0));

    let routed = manager.routed(&rects);
    assert_eq!(routed.len(), 1);
    assert_eq!(routed[0].from_item, ids[0]);
}

#[test]
fn test_routing_picks_facing_edges() {
    let ids = ids(2);
    let mut manager = ConnectionManager::new();
    manager.create(&ids[0], &ids[1]).unwrap();

    // Mostly-vertical separation routes bottom -> top.
    let mut rects = HashMap::new();
    rects.insert(ids[0].clone(), Rect::new(0.0, 0.0, 100.0, 100.0));
    rects.insert(ids[1].clone(), Rect::new(40.0, 400.0, 100.0, 100.0));

    let routed = manager.routed(&rects);
    assert_eq!(routed[0].from, Point::new(50.0, 100.0));
    assert_eq!(routed[0].to, Point::new(90.0, 400.0));
}
