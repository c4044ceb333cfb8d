//! Central simulation driver composing motion, topology, and transit.
//!
//! High-level flow each tick:
//! 1) Advance every body's orbital position in dependency order.
//! 2) Recompute the MST when the recalculation interval has elapsed
//!    (interval measured in raw tick time, unaffected by the speed modifier;
//!    per-tick motion is small relative to the interval, so recomputing
//!    every tick would be wasted work).
//! 3) Let each satellite probabilistically originate a packet toward a
//!    uniformly chosen reachable peer, binding its path at that instant.
//! 4) Move every in-flight packet, then drop arrived packets the same tick.
//!
//! The driver owns all mutable state (arena, edge set, packets, RNG, id
//! generator, counters); it is single-threaded and nothing here blocks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::scene::Scene;

use super::bodies::{Body, BodyArena, BodyKind, Orbit};
use super::packet::{Packet, PacketIdGenerator};
use super::routing;
use super::types::{BodyId, Disc, Edge};

/// Planet radii get a small per-body variation, as a cosmetic touch that also
/// perturbs obstacle sizes. Floored so a small configured radius stays valid.
const PLANET_RADIUS_VARIATION: f64 = 1.0;
const MIN_PLANET_RADIUS: f64 = 0.1;

/// Observable counters for the external collaborator (runner/UI).
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationStats {
    /// Packets a satellite elected to originate (including failed bindings).
    pub packets_generated: u64,
    /// Packets that reached their destination and were removed.
    pub packets_arrived: u64,
    /// Packets dropped because path resolution returned an empty sequence.
    pub routing_failures: u64,
    /// MST recomputations performed, including the one at construction.
    pub mst_recalculations: u64,
}

/// The simulation: a small network of orbiting satellites routing packets
/// over a periodically rebuilt minimum spanning tree.
pub struct Simulation {
    arena: BodyArena,
    satellites: Vec<BodyId>,
    /// Sun + planets; the bodies whose discs block line-of-sight.
    obstacle_ids: Vec<BodyId>,
    mst_edges: Vec<Edge>,
    packets: Vec<Packet>,
    packet_ids: PacketIdGenerator,
    rng: StdRng,

    tick_delta: f64,
    packet_speed: f64,
    generation_probability: f64,
    mst_interval: f64,

    speed_modifiers: Vec<f64>,
    speed_index: usize,
    paused: bool,
    sim_time: f64,
    since_mst: f64,
    stats: SimulationStats,
}

impl Simulation {
    /// Build the scene and compute the initial MST so the network is
    /// routable from tick 0.
    ///
    /// All randomness (orbital phases, satellite spin directions, packet
    /// generation and destination choice) flows through the one RNG seeded
    /// here, so equal seeds give bit-identical runs.
    pub fn new(scene: &Scene, speed_modifiers: Vec<f64>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut arena = BodyArena::new();
        let mut satellites = Vec::new();
        let mut obstacle_ids = Vec::new();

        let sun = arena.insert(Body::fixed("Sun", BodyKind::Sun, scene.sun_radius));
        obstacle_ids.push(sun);

        let mut satellite_counter = 0u32;
        for (i, planet_cfg) in scene.planets.iter().enumerate() {
            let planet_name = format!("Planet_{}", i + 1);
            let radius = (planet_cfg.radius + rng.gen_range(-1.0..1.0) * PLANET_RADIUS_VARIATION)
                .max(MIN_PLANET_RADIUS);
            let planet = arena.insert(Body::orbiting(
                planet_name.clone(),
                BodyKind::Planet,
                radius,
                Orbit {
                    parent: sun,
                    radius: planet_cfg.orbit_radius,
                    angular_velocity: planet_cfg.angular_velocity,
                    angle: rng.gen_range(0.0..std::f64::consts::TAU),
                },
            ));
            obstacle_ids.push(planet);

            for _ in 0..planet_cfg.satellites {
                satellite_counter += 1;
                let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                let satellite = arena.insert(Body::orbiting(
                    format!("{}_Sat_{}", planet_name, satellite_counter),
                    BodyKind::Satellite,
                    scene.satellite_radius,
                    Orbit {
                        parent: planet,
                        radius: planet_cfg.orbit_radius * scene.satellite_orbit_radius_factor,
                        angular_velocity: planet_cfg.angular_velocity
                            * scene.satellite_angular_velocity_factor
                            * direction,
                        angle: rng.gen_range(0.0..std::f64::consts::TAU),
                    },
                ));
                satellites.push(satellite);
            }
        }

        log::info!(
            "Initialized {} planets and {} satellites.",
            scene.planets.len(),
            satellites.len()
        );

        let speed_modifiers = if speed_modifiers.is_empty() {
            vec![1.0]
        } else {
            speed_modifiers
        };

        let mut simulation = Simulation {
            arena,
            satellites,
            obstacle_ids,
            mst_edges: Vec::new(),
            packets: Vec::new(),
            packet_ids: PacketIdGenerator::new(),
            rng,
            tick_delta: scene.tick_delta,
            packet_speed: scene.packet_speed,
            generation_probability: scene.packet_generation_probability,
            mst_interval: scene.mst_recalculation_interval,
            speed_modifiers,
            speed_index: 0,
            paused: false,
            sim_time: 0.0,
            since_mst: 0.0,
            stats: SimulationStats::default(),
        };
        simulation.recalculate_mst();
        simulation
    }

    /// Advance the simulation by one tick.
    ///
    /// No-op while paused: motion, topology, and packets all stay frozen.
    /// The MST timer accumulates the raw tick delta (not the speed-scaled
    /// one), so the recomputation cadence matches the external tick pacing
    /// regardless of the speed modifier, as in a wall-clock interval.
    pub fn advance_tick(&mut self) {
        if self.paused {
            return;
        }
        let dt = self.tick_delta;
        let speed = self.speed_modifiers[self.speed_index];
        self.sim_time += dt;

        self.arena.advance_all(dt, speed);

        self.since_mst += dt;
        if self.since_mst >= self.mst_interval {
            self.recalculate_mst();
            self.since_mst = 0.0;
        }

        self.generate_packets();

        for packet in &mut self.packets {
            packet.update(&self.arena, self.packet_speed, dt, speed);
        }

        let arena = &self.arena;
        let stats = &mut self.stats;
        self.packets.retain(|packet| {
            if packet.is_arrived() {
                stats.packets_arrived += 1;
                log::info!(
                    "Packet {} arrived: {} -> {}",
                    packet.id,
                    arena.name_of(packet.origin),
                    arena.name_of(packet.destination)
                );
                false
            } else {
                true
            }
        });
    }

    /// Rebuild the MST from live satellite and obstacle positions.
    fn recalculate_mst(&mut self) {
        let obstacles: Vec<Disc> = self
            .obstacle_ids
            .iter()
            .map(|&id| {
                let body = self.arena.get(id);
                Disc {
                    center: body.position,
                    radius: body.radius,
                }
            })
            .collect();
        self.mst_edges = routing::build_mst(&self.satellites, &self.arena, &obstacles);
        self.stats.mst_recalculations += 1;
        log::debug!(
            "MST recalculated: {} edges over {} satellites",
            self.mst_edges.len(),
            self.satellites.len()
        );
    }

    /// Let each satellite elect to originate a packet this tick.
    ///
    /// The destination is drawn uniformly from the satellites reachable over
    /// the current MST (excluding the origin); if none are reachable, the
    /// satellite stays silent. A resolved empty path is counted and logged as
    /// a routing failure and the packet never enters the active set.
    fn generate_packets(&mut self) {
        for i in 0..self.satellites.len() {
            let origin = self.satellites[i];
            if !self.rng.gen_bool(self.generation_probability) {
                continue;
            }

            let peers: Vec<BodyId> = routing::reachable_from(origin, &self.mst_edges)
                .into_iter()
                .filter(|&id| id != origin)
                .collect();
            if peers.is_empty() {
                continue;
            }
            let destination = peers[self.rng.gen_range(0..peers.len())];

            let id = self.packet_ids.next_id();
            self.stats.packets_generated += 1;
            let path = routing::find_path(origin, destination, &self.mst_edges);
            if path.is_empty() {
                self.stats.routing_failures += 1;
                log::warn!(
                    "Packet {} generated but no path found on MST: {} -> {}",
                    id,
                    self.arena.name_of(origin),
                    self.arena.name_of(destination)
                );
                continue;
            }

            log::info!(
                "Packet {} generated: {} -> {} (path length: {})",
                id,
                self.arena.name_of(origin),
                self.arena.name_of(destination),
                path.len()
            );
            self.packets.push(Packet::new(
                id,
                origin,
                destination,
                path,
                self.arena.position_of(origin),
            ));
        }
    }

    /// Toggle the pause gate and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!(
            "Simulation {}.",
            if self.paused { "paused" } else { "resumed" }
        );
        self.paused
    }

    /// Select a speed modifier by index; out-of-range indices clamp to the
    /// last entry.
    pub fn set_speed_index(&mut self, index: usize) {
        self.speed_index = index.min(self.speed_modifiers.len() - 1);
        log::info!("Simulation speed changed to: {}x", self.speed_modifier());
    }

    /// Cycle to the next entry in the speed modifier table.
    pub fn cycle_speed(&mut self) {
        self.set_speed_index((self.speed_index + 1) % self.speed_modifiers.len());
    }

    pub fn speed_modifier(&self) -> f64 {
        self.speed_modifiers[self.speed_index]
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Elapsed simulated time in raw (unscaled) tick units.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn bodies(&self) -> &BodyArena {
        &self.arena
    }

    pub fn satellites(&self) -> &[BodyId] {
        &self.satellites
    }

    pub fn mst_edges(&self) -> &[Edge] {
        &self.mst_edges
    }

    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }
}
