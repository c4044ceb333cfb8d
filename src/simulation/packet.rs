//! Packet transit engine: messages moving hop by hop along a resolved path.
//!
//! A packet commits to its path at creation and keeps it for its entire
//! lifetime, even if the MST is replaced mid-transit. Hops are satellites and
//! keep orbiting, so only the *coordinates* of the current hop are re-sampled
//! each tick; the hop identities never change.

use super::bodies::BodyArena;
use super::types::{BodyId, Point};

/// Transit states. `Arrived` is terminal; there is no retry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketState {
    InTransit,
    Arrived,
}

/// Hands out monotonically increasing packet ids.
///
/// Owned by the simulation so id assignment stays an explicit, injected
/// component rather than hidden global state.
#[derive(Debug, Default)]
pub struct PacketIdGenerator {
    next: u64,
}

impl PacketIdGenerator {
    pub fn new() -> Self {
        PacketIdGenerator::default()
    }

    pub fn next_id(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

/// One message in transit across the satellite network.
#[derive(Debug, Clone)]
pub struct Packet {
    pub id: u64,
    pub origin: BodyId,
    pub destination: BodyId,
    /// Committed hop sequence from origin to destination inclusive. Never
    /// recomputed after creation (stale-path semantics).
    path: Vec<BodyId>,
    /// Cursor into `path`: the next hop not yet reached.
    path_index: usize,
    /// Live position, mutated every tick.
    pub position: Point,
    state: PacketState,
}

impl Packet {
    /// Bind a packet to a resolved path. The path must be non-empty; creation
    /// that cannot bind a path is a routing failure handled by the caller,
    /// never a live packet.
    pub fn new(
        id: u64,
        origin: BodyId,
        destination: BodyId,
        path: Vec<BodyId>,
        origin_position: Point,
    ) -> Self {
        debug_assert!(!path.is_empty());
        Packet {
            id,
            origin,
            destination,
            path,
            path_index: 0,
            position: origin_position,
            state: PacketState::InTransit,
        }
    }

    pub fn state(&self) -> PacketState {
        self.state
    }

    pub fn is_arrived(&self) -> bool {
        self.state == PacketState::Arrived
    }

    pub fn path(&self) -> &[BodyId] {
        &self.path
    }

    /// Move the packet toward its current hop by one tick's travel distance.
    ///
    /// The hop's position is re-read from the arena first, since satellites
    /// move between ticks. If the hop is within reach, the packet snaps onto
    /// it and the cursor advances; any travel-distance surplus is dropped
    /// rather than carried into the next leg, matching the reference
    /// transit semantics (this slightly delays arrivals on multi-hop paths).
    pub fn update(&mut self, arena: &BodyArena, speed: f64, dt: f64, speed_modifier: f64) {
        if self.state == PacketState::Arrived {
            return;
        }
        if self.path_index >= self.path.len() {
            self.state = PacketState::Arrived;
            return;
        }

        let target = arena.position_of(self.path[self.path_index]);
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;
        let remaining = (dx * dx + dy * dy).sqrt();
        let travel = speed * speed_modifier * dt;

        if remaining <= travel {
            self.position = target;
            self.path_index += 1;
            if self.path_index >= self.path.len() {
                self.state = PacketState::Arrived;
            }
        } else {
            let ratio = travel / remaining;
            self.position.x += dx * ratio;
            self.position.y += dy * ratio;
        }
    }
}
