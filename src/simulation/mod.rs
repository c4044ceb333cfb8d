//! Orbital network simulation core.
//!
//! This module provides the complete simulation of a small network of
//! orbiting satellites routing packets over a periodically rebuilt minimum
//! spanning tree. It integrates:
//! - Kinematic orbital motion over an arena of bodies
//! - Obstacle-aware candidate-edge filtering (line-of-sight past discs)
//! - Kruskal MST construction over a union-find structure
//! - BFS path resolution restricted to the current tree
//! - A packet transit state machine moving messages at finite speed
//!
//! ## Module Organization
//!
//! - `types`: Shared data structures (Point, Disc, BodyId, Edge)
//! - `geometry`: Distance and segment–disc intersection logic
//! - `union_find`: Generic disjoint-set used by the MST builder
//! - `bodies`: Body arena and dependency-ordered orbital motion
//! - `routing`: MST construction, path resolution, reachability
//! - `packet`: Packet state machine and id generation
//! - `network`: The tick driver composing all of the above
//!
//! ## Public API
//!
//! The main entry point is [`Simulation`]: build one from a validated scene
//! and call `advance_tick` at a fixed cadence.

pub mod bodies;
pub mod geometry;
pub mod network;
pub mod packet;
pub mod routing;
pub mod types;
pub mod union_find;

pub use network::{Simulation, SimulationStats};
pub use types::{BodyId, Disc, Edge, Point};
