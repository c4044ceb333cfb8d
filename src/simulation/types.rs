//! Type definitions shared across the simulation.
//!
//! Contains the small data structures passed between modules:
//! - `Point`: 2D position in simulation units
//! - `Disc`: obstacle snapshot used by line-of-sight checks
//! - `BodyId`: arena index identifying a celestial body
//! - `Edge`: weighted connectivity candidate between two satellites

/// Simple 2D point in simulation units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// A disc-shaped obstacle (center + radius) that blocks line-of-sight.
///
/// Snapshot of an obstructing body's live position and radius, taken at the
/// moment an edge check runs. Satellites never appear here; only the sun and
/// planets obstruct.
#[derive(Debug, Clone, Copy)]
pub struct Disc {
    pub center: Point,
    pub radius: f64,
}

/// Index of a body in the [`BodyArena`](crate::simulation::bodies::BodyArena).
///
/// Bodies reference their orbital parent by `BodyId` instead of holding a
/// pointer, so the parent/child tree carries no lifetime coupling. A parent's
/// index is always smaller than its children's indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Weighted connectivity edge between two satellites.
///
/// Edges are transient: the full candidate set is rebuilt from live positions
/// on every MST recomputation and never mutated in place.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a: BodyId,
    pub b: BodyId,
    /// Euclidean distance between the endpoints at computation time.
    pub weight: f64,
}

impl Edge {
    /// The endpoint opposite to `id`, or `None` if `id` is not an endpoint.
    pub fn other(&self, id: BodyId) -> Option<BodyId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}
