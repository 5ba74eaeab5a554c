//! Connection bookkeeping and edge routing.
//!
//! Connections are unordered logical edges between two items. This module
//! owns the uniqueness invariants (no self-links, no duplicate unordered
//! pairs, no dangling endpoints after an item is deleted) and the
//! nearest-edge routing the rendering layer asks for every frame.

use crate::geometry::{Point, Rect};
use crate::types::{Connection, ConnectionId, ItemId};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Why a connection could not be created.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("connection endpoints must be two distinct items")]
    SelfLink,
    #[error("an equivalent connection between these items already exists")]
    Duplicate,
}

/// One of the four item edges a connection can anchor to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Midpoint of this edge on the given rectangle.
    pub fn midpoint(self, rect: Rect) -> Point {
        match self {
            Edge::Left => Point::new(rect.x, rect.y + rect.h / 2.0),
            Edge::Right => Point::new(rect.max_x(), rect.y + rect.h / 2.0),
            Edge::Top => Point::new(rect.x + rect.w / 2.0, rect.y),
            Edge::Bottom => Point::new(rect.x + rect.w / 2.0, rect.max_y()),
        }
    }
}

/// The edge affordance facing `toward`, bucketed into 90-degree quadrants
/// around the rectangle center.
pub fn nearest_edge(rect: Rect, toward: Point) -> Edge {
    let d = toward - rect.center();
    if d.x.abs() >= d.y.abs() {
        if d.x >= 0.0 { Edge::Right } else { Edge::Left }
    } else if d.y >= 0.0 {
        Edge::Bottom
    } else {
        Edge::Top
    }
}

/// Deterministic nearest-edge-pair routing between two rectangles.
///
/// Horizontal vs vertical is decided by comparing |dx| against |dy| between
/// the centers; the matching left/right or top/bottom midpoints are
/// returned. Recomputed from live geometry every frame, never cached.
pub fn route(a: Rect, b: Rect) -> (Point, Point) {
    let d = b.center() - a.center();
    if d.x.abs() >= d.y.abs() {
        if d.x >= 0.0 {
            (Edge::Right.midpoint(a), Edge::Left.midpoint(b))
        } else {
            (Edge::Left.midpoint(a), Edge::Right.midpoint(b))
        }
    } else if d.y >= 0.0 {
        (Edge::Bottom.midpoint(a), Edge::Top.midpoint(b))
    } else {
        (Edge::Top.midpoint(a), Edge::Bottom.midpoint(b))
    }
}

/// A connection resolved to world-space endpoints for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutedConnection {
    pub id: ConnectionId,
    pub from_item: ItemId,
    pub to_item: ItemId,
    pub from: Point,
    pub to: Point,
}

/// Owns the connection list for one workspace view.
#[derive(Clone, Debug, Default)]
pub struct ConnectionManager {
    connections: Vec<Connection>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted connection list, dropping entries that violate
    /// the invariants (defensive: external stores are not trusted).
    pub fn restore(connections: Vec<Connection>) -> Self {
        let mut manager = Self::new();
        for conn in connections {
            if conn.from == conn.to {
                continue;
            }
            if manager.find_pair(&conn.from, &conn.to).is_none() {
                manager.connections.push(conn);
            }
        }
        manager
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn get(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == *id)
    }

    /// The existing connection joining this unordered pair, if any.
    pub fn find_pair(&self, a: &ItemId, b: &ItemId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.links(a, b))
    }

    /// Create a connection, enforcing the uniqueness invariants.
    pub fn create(&mut self, from: &ItemId, to: &ItemId) -> Result<Connection, ConnectionError> {
        if from == to {
            return Err(ConnectionError::SelfLink);
        }
        if self.find_pair(from, to).is_some() {
            return Err(ConnectionError::Duplicate);
        }
        let conn = Connection::new(from.clone(), to.clone());
        self.connections.push(conn.clone());
        Ok(conn)
    }

    /// Remove by connection id.
    pub fn remove(&mut self, id: &ConnectionId) -> Option<Connection> {
        let pos = self.connections.iter().position(|c| c.id == *id)?;
        Some(self.connections.remove(pos))
    }

    /// Remove every connection referencing `item_id`.
    ///
    /// Must run in the same transaction as the item deletion; a connection
    /// with a missing endpoint is an invariant violation, not a rendering
    /// detail.
    pub fn prune_item(&mut self, item_id: &ItemId) -> Vec<ConnectionId> {
        let mut removed = Vec::new();
        self.connections.retain(|c| {
            if c.touches(item_id) {
                removed.push(c.id.clone());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            debug!(item = %item_id, count = removed.len(), "Pruned connections for deleted item");
        }
        removed
    }

    /// Resolve every connection against live item rectangles.
    ///
    /// Connections whose endpoints cannot be resolved are skipped without
    /// error; the deletion path is the authoritative invariant keeper.
    pub fn routed(&self, rects: &HashMap<ItemId, Rect>) -> Vec<RoutedConnection> {
        self.connections
            .iter()
            .filter_map(|c| {
                let a = rects.get(&c.from)?;
                let b = rects.get(&c.to)?;
                let (from, to) = route(*a, *b);
                Some(RoutedConnection {
                    id: c.id.clone(),
                    from_item: c.from.clone(),
                    to_item: c.to.clone(),
                    from,
                    to,
                })
            })
            .collect()
    }
}
