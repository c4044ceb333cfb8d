//! Orbital node model: the body arena and kinematic motion.
//!
//! Bodies (sun, planets, satellites) live in a flat arena and reference their
//! orbital parent by index, never by pointer. The arena enforces that a
//! parent's index is strictly smaller than its children's, which makes plain
//! in-order iteration the dependency order (sun, then planets, then
//! satellites): every body reads its parent's already-updated position for
//! the current tick, so there is no one-tick lag anywhere in the hierarchy.

use std::f64::consts::TAU;

use super::types::{BodyId, Point};

/// Role of a body in the scene. Behavioral differences are limited to whether
/// the body obstructs line-of-sight (sun, planets) and whether it participates
/// in the network (satellites).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Planet,
    Satellite,
}

/// Orbit parameters for a body circling a parent.
#[derive(Debug, Clone)]
pub struct Orbit {
    /// Arena index of the orbited body. The parent never owns or knows its
    /// children; it only has to outlive them, which the arena guarantees.
    pub parent: BodyId,
    /// Orbit radius in simulation units. Zero means the body is pinned to its
    /// parent's position.
    pub radius: f64,
    /// Signed angular velocity in radians per simulated time unit. Negative
    /// values orbit clockwise.
    pub angular_velocity: f64,
    /// Current orbital angle, kept in [0, 2π).
    pub angle: f64,
}

/// A celestial body: position source for everything downstream.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    /// Body radius, used as the obstacle radius in collision checks.
    pub radius: f64,
    /// Live position, derived from the orbit each tick. A body without an
    /// orbit stays wherever it was created (the sun, at the origin).
    pub position: Point,
    pub orbit: Option<Orbit>,
}

impl Body {
    /// A stationary body anchored at the origin.
    pub fn fixed(name: impl Into<String>, kind: BodyKind, radius: f64) -> Self {
        Body {
            name: name.into(),
            kind,
            radius,
            position: Point::ORIGIN,
            orbit: None,
        }
    }

    /// A body orbiting a parent. Its initial position is resolved when it is
    /// inserted into the arena.
    pub fn orbiting(name: impl Into<String>, kind: BodyKind, radius: f64, orbit: Orbit) -> Self {
        Body {
            name: name.into(),
            kind,
            radius,
            position: Point::ORIGIN,
            orbit: Some(orbit),
        }
    }
}

/// Flat arena owning every body in the scene.
///
/// Bodies are created once at initialization and never removed during a run.
#[derive(Debug, Default)]
pub struct BodyArena {
    bodies: Vec<Body>,
}

impl BodyArena {
    pub fn new() -> Self {
        BodyArena { bodies: Vec::new() }
    }

    /// Insert a body and return its id.
    ///
    /// The body's initial position is computed immediately from its orbit
    /// parameters, equivalent to an advance with dt = 0.
    ///
    /// # Panics
    ///
    /// Panics if the body's orbit references a parent at an equal or larger
    /// index. Parents must be inserted before their children; this is what
    /// makes in-order iteration a valid dependency order.
    pub fn insert(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        if let Some(orbit) = &body.orbit {
            assert!(
                orbit.parent.0 < id.0,
                "body {:?} orbits a parent not yet in the arena",
                body.name
            );
        }
        self.bodies.push(body);
        self.reposition(id.0);
        id
    }

    pub fn get(&self, id: BodyId) -> &Body {
        &self.bodies[id.0]
    }

    pub fn position_of(&self, id: BodyId) -> Point {
        self.bodies[id.0].position
    }

    pub fn name_of(&self, id: BodyId) -> &str {
        &self.bodies[id.0].name
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Advance every body by one tick of simulated time.
    ///
    /// Orbiting bodies increment their angle by
    /// `angular_velocity * speed_modifier * dt`, wrap it into [0, 2π), and
    /// re-derive their position from the parent's position. Bodies with no
    /// orbit or a zero orbit radius stay where they are. Iteration order is
    /// arena order, so each parent has already moved when its children
    /// read it.
    pub fn advance_all(&mut self, dt: f64, speed_modifier: f64) {
        for i in 0..self.bodies.len() {
            let parent_position = match &self.bodies[i].orbit {
                Some(orbit) if orbit.radius > 0.0 => self.bodies[orbit.parent.0].position,
                _ => continue,
            };
            let body = &mut self.bodies[i];
            if let Some(orbit) = body.orbit.as_mut() {
                orbit.angle =
                    (orbit.angle + orbit.angular_velocity * speed_modifier * dt).rem_euclid(TAU);
                body.position = Point {
                    x: parent_position.x + orbit.radius * orbit.angle.cos(),
                    y: parent_position.y + orbit.radius * orbit.angle.sin(),
                };
            }
        }
    }

    /// Derive a single body's position from its current angle and parent.
    fn reposition(&mut self, index: usize) {
        let parent_position = match &self.bodies[index].orbit {
            Some(orbit) if orbit.radius > 0.0 => self.bodies[orbit.parent.0].position,
            _ => return,
        };
        let body = &mut self.bodies[index];
        if let Some(orbit) = body.orbit.as_ref() {
            body.position = Point {
                x: parent_position.x + orbit.radius * orbit.angle.cos(),
                y: parent_position.y + orbit.radius * orbit.angle.sin(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbit(parent: BodyId, radius: f64, angular_velocity: f64, angle: f64) -> Orbit {
        Orbit {
            parent,
            radius,
            angular_velocity,
            angle,
        }
    }

    #[test]
    fn fixed_body_never_moves() {
        let mut arena = BodyArena::new();
        let sun = arena.insert(Body::fixed("Sun", BodyKind::Sun, 20.0));
        for _ in 0..10 {
            arena.advance_all(0.016, 1.0);
        }
        assert_eq!(arena.position_of(sun), Point::ORIGIN);
    }

    #[test]
    fn initial_position_resolved_at_insert() {
        let mut arena = BodyArena::new();
        let sun = arena.insert(Body::fixed("Sun", BodyKind::Sun, 20.0));
        let planet = arena.insert(Body::orbiting(
            "Planet_1",
            BodyKind::Planet,
            5.0,
            orbit(sun, 100.0, 0.01, 0.0),
        ));
        let pos = arena.position_of(planet);
        assert!((pos.x - 100.0).abs() < 1e-9);
        assert!(pos.y.abs() < 1e-9);
    }

    #[test]
    fn advance_integrates_angle_and_wraps() {
        let mut arena = BodyArena::new();
        let sun = arena.insert(Body::fixed("Sun", BodyKind::Sun, 20.0));
        let planet = arena.insert(Body::orbiting(
            "Planet_1",
            BodyKind::Planet,
            5.0,
            orbit(sun, 100.0, TAU - 0.1, 0.2),
        ));
        // One full dt at speed 1 pushes the angle past 2π; it must wrap
        arena.advance_all(1.0, 1.0);
        let angle = arena.get(planet).orbit.as_ref().unwrap().angle;
        assert!((0.0..TAU).contains(&angle));
        assert!((angle - 0.1).abs() < 1e-9);
    }

    #[test]
    fn negative_angular_velocity_wraps_into_range() {
        let mut arena = BodyArena::new();
        let sun = arena.insert(Body::fixed("Sun", BodyKind::Sun, 20.0));
        let planet = arena.insert(Body::orbiting(
            "Planet_1",
            BodyKind::Planet,
            5.0,
            orbit(sun, 100.0, -1.0, 0.5),
        ));
        arena.advance_all(1.0, 1.0);
        let angle = arena.get(planet).orbit.as_ref().unwrap().angle;
        assert!((0.0..TAU).contains(&angle));
        assert!((angle - (0.5f64 - 1.0).rem_euclid(TAU)).abs() < 1e-9);
    }

    #[test]
    fn speed_modifier_scales_motion() {
        let mut arena = BodyArena::new();
        let sun = arena.insert(Body::fixed("Sun", BodyKind::Sun, 20.0));
        let planet = arena.insert(Body::orbiting(
            "Planet_1",
            BodyKind::Planet,
            5.0,
            orbit(sun, 100.0, 1.0, 0.0),
        ));
        arena.advance_all(0.5, 0.1);
        let angle = arena.get(planet).orbit.as_ref().unwrap().angle;
        assert!((angle - 0.05).abs() < 1e-12);
    }

    #[test]
    fn zero_orbit_radius_is_stationary() {
        let mut arena = BodyArena::new();
        let sun = arena.insert(Body::fixed("Sun", BodyKind::Sun, 20.0));
        let pinned = arena.insert(Body::orbiting(
            "Planet_1",
            BodyKind::Planet,
            5.0,
            orbit(sun, 0.0, 1.0, 0.3),
        ));
        let before = arena.position_of(pinned);
        arena.advance_all(1.0, 1.0);
        assert_eq!(arena.position_of(pinned), before);
    }

    #[test]
    fn child_reads_parent_position_updated_this_tick() {
        let mut arena = BodyArena::new();
        let sun = arena.insert(Body::fixed("Sun", BodyKind::Sun, 20.0));
        let planet = arena.insert(Body::orbiting(
            "Planet_1",
            BodyKind::Planet,
            5.0,
            orbit(sun, 100.0, 1.0, 0.0),
        ));
        let satellite = arena.insert(Body::orbiting(
            "Planet_1_Sat_1",
            BodyKind::Satellite,
            3.0,
            orbit(planet, 10.0, 2.0, 0.0),
        ));
        arena.advance_all(1.0, 1.0);
        // The satellite must be derived from the planet's position for this
        // tick, not last tick's (100, 0).
        let planet_pos = arena.position_of(planet);
        assert!((planet_pos.x - 100.0 * 1.0f64.cos()).abs() < 1e-9);
        assert!((planet_pos.y - 100.0 * 1.0f64.sin()).abs() < 1e-9);
        let sat_pos = arena.position_of(satellite);
        assert!((sat_pos.x - (planet_pos.x + 10.0 * 2.0f64.cos())).abs() < 1e-9);
        assert!((sat_pos.y - (planet_pos.y + 10.0 * 2.0f64.sin())).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn insert_rejects_forward_parent_reference() {
        let mut arena = BodyArena::new();
        arena.insert(Body::orbiting(
            "Planet_1",
            BodyKind::Planet,
            5.0,
            orbit(BodyId(5), 100.0, 1.0, 0.0),
        ));
    }
}
