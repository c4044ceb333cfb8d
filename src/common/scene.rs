//! Scene loading, parsing, and validation logic.
//!
//! A scene describes the celestial bodies and the network tuning parameters:
//! the sun, the planets (each with its satellite count), orbital factors,
//! and packet/MST settings. Scenes are plain JSON files validated before the
//! simulation starts; once a scene passes validation, the simulation core
//! never fails at runtime.

use anyhow::Context;
use serde::Deserialize;
use std::fs;

/// Error type for scene loading failures.
#[derive(Debug)]
pub enum SceneLoadError {
    FileReadError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::FileReadError(msg) => write!(f, "Failed to read file: {}", msg),
            SceneLoadError::ParseError(msg) => write!(f, "Failed to parse JSON: {}", msg),
            SceneLoadError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// One planet and the satellites it carries.
#[derive(Debug, Deserialize, Clone)]
pub struct PlanetConfig {
    /// Orbit radius around the sun, in simulation units.
    pub orbit_radius: f64,
    /// Angular velocity in radians per simulated time unit.
    pub angular_velocity: f64,
    /// Planet body radius; also its obstacle radius.
    pub radius: f64,
    /// Number of satellites orbiting this planet.
    pub satellites: u32,
}

/// Root structure describing the entire scene.
#[derive(Debug, Deserialize, Clone)]
pub struct Scene {
    /// Sun body radius; the sun is anchored at the origin and obstructs.
    pub sun_radius: f64,
    /// All planets in the scene. May be empty (sun-only scene, no network).
    pub planets: Vec<PlanetConfig>,
    /// Satellite orbit radius relative to its planet's orbit radius.
    pub satellite_orbit_radius_factor: f64,
    /// Satellite angular speed relative to its planet's (spin direction is
    /// randomized per satellite).
    pub satellite_angular_velocity_factor: f64,
    /// Body radius shared by all satellites.
    pub satellite_radius: f64,
    /// Packet travel speed in simulation units per time unit.
    pub packet_speed: f64,
    /// Per-satellite, per-tick probability of originating a packet.
    pub packet_generation_probability: f64,
    /// Interval between MST recomputations, in raw tick time units.
    pub mst_recalculation_interval: f64,
    /// Fixed simulated time delta per tick.
    pub tick_delta: f64,
}

/// Parse a scene from a JSON string and validate it.
pub fn parse_scene(data: &str) -> Result<Scene, SceneLoadError> {
    let scene: Scene = serde_json::from_str(data)
        .context("Invalid JSON format")
        .map_err(|e| SceneLoadError::ParseError(e.to_string()))?;

    validate_scene(&scene).map_err(SceneLoadError::ValidationError)?;

    Ok(scene)
}

/// Load, parse, and validate a scene from a file.
pub fn load_scene(path: &str) -> Result<Scene, SceneLoadError> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))
        .map_err(|e| SceneLoadError::FileReadError(e.to_string()))?;

    parse_scene(&data)
}

/// Validate scene configuration to reject malformed inputs.
///
/// Checks for values that would produce a nonsensical or unbounded
/// simulation: non-positive radii or intervals, probabilities outside [0, 1],
/// and satellite counts large enough to make the O(n²) pairwise edge
/// enumeration a problem.
///
/// # Returns
///
/// `Ok(())` if validation passes, `Err(String)` with a description otherwise.
pub fn validate_scene(scene: &Scene) -> Result<(), String> {
    const MAX_SATELLITES: u64 = 1024;

    if scene.sun_radius <= 0.0 {
        return Err("sun_radius must be positive".to_string());
    }
    if scene.satellite_orbit_radius_factor <= 0.0 {
        return Err("satellite_orbit_radius_factor must be positive".to_string());
    }
    if scene.satellite_angular_velocity_factor <= 0.0 {
        return Err("satellite_angular_velocity_factor must be positive".to_string());
    }
    if scene.satellite_radius <= 0.0 {
        return Err("satellite_radius must be positive".to_string());
    }
    if scene.packet_speed <= 0.0 {
        return Err("packet_speed must be positive".to_string());
    }
    if !(0.0..=1.0).contains(&scene.packet_generation_probability) {
        return Err(format!(
            "packet_generation_probability {} outside range 0-1",
            scene.packet_generation_probability
        ));
    }
    if scene.mst_recalculation_interval <= 0.0 {
        return Err("mst_recalculation_interval must be positive".to_string());
    }
    if scene.tick_delta <= 0.0 {
        return Err("tick_delta must be positive".to_string());
    }

    let mut total_satellites: u64 = 0;
    for (idx, planet) in scene.planets.iter().enumerate() {
        if planet.orbit_radius <= 0.0 {
            return Err(format!("Planet {} orbit_radius must be positive", idx));
        }
        if planet.radius <= 0.0 {
            return Err(format!("Planet {} radius must be positive", idx));
        }
        if !planet.angular_velocity.is_finite() {
            return Err(format!("Planet {} angular_velocity must be finite", idx));
        }
        total_satellites += u64::from(planet.satellites);
    }
    if total_satellites > MAX_SATELLITES {
        return Err(format!(
            "Satellite count {} exceeds maximum of {}",
            total_satellites, MAX_SATELLITES
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_scene_json() -> &'static str {
        r#"{
            "sun_radius": 20.0,
            "planets": [
                { "orbit_radius": 150.0, "angular_velocity": 0.01, "radius": 5.0, "satellites": 2 },
                { "orbit_radius": 270.0, "angular_velocity": 0.006, "radius": 5.0, "satellites": 2 }
            ],
            "satellite_orbit_radius_factor": 0.2,
            "satellite_angular_velocity_factor": 2.0,
            "satellite_radius": 3.0,
            "packet_speed": 5.0,
            "packet_generation_probability": 0.01,
            "mst_recalculation_interval": 5.0,
            "tick_delta": 0.016
        }"#
    }

    #[test]
    fn parse_valid_scene() {
        let scene = parse_scene(valid_scene_json()).unwrap();
        assert_eq!(scene.planets.len(), 2);
        assert_eq!(scene.planets[0].satellites, 2);
        assert!((scene.tick_delta - 0.016).abs() < 1e-12);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let result = parse_scene("{ not json");
        assert!(matches!(result, Err(SceneLoadError::ParseError(_))));
    }

    #[test]
    fn validation_rejects_bad_probability() {
        let mut scene = parse_scene(valid_scene_json()).unwrap();
        scene.packet_generation_probability = 1.5;
        let err = validate_scene(&scene).unwrap_err();
        assert!(err.contains("packet_generation_probability"));
    }

    #[test]
    fn validation_rejects_non_positive_values() {
        let base = parse_scene(valid_scene_json()).unwrap();

        let mut scene = base.clone();
        scene.sun_radius = 0.0;
        assert!(validate_scene(&scene).is_err());

        let mut scene = base.clone();
        scene.packet_speed = -1.0;
        assert!(validate_scene(&scene).is_err());

        let mut scene = base.clone();
        scene.planets[0].orbit_radius = 0.0;
        assert!(validate_scene(&scene).is_err());

        let mut scene = base;
        scene.tick_delta = 0.0;
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn validation_caps_satellite_count() {
        let mut scene = parse_scene(valid_scene_json()).unwrap();
        scene.planets[0].satellites = 2000;
        let err = validate_scene(&scene).unwrap_err();
        assert!(err.contains("Satellite count"));
    }

    #[test]
    fn empty_planet_list_is_valid() {
        let mut scene = parse_scene(valid_scene_json()).unwrap();
        scene.planets.clear();
        assert!(validate_scene(&scene).is_ok());
    }
}
