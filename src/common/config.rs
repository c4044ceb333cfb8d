//! Runner configuration loading.
//!
//! Settings that belong to the external tick driver rather than the scene:
//! the speed modifier table, the fixed tick pacing delay, an optional tick
//! budget, the RNG seed, and the stats reporting interval. Loaded from a
//! `config.toml` colocated with the scene file; every field is optional and
//! falls back to a default.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for the headless runner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Speed modifier table cycled by the driver. Scales motion and packet
    /// travel without changing the tick rate.
    pub speed_modifiers: Vec<f64>,
    /// Fixed delay between ticks in milliseconds. Zero disables pacing for
    /// batch runs.
    pub tick_delay_ms: u64,
    /// Number of ticks to run before exiting. Unset runs until interrupted.
    pub ticks: Option<u64>,
    /// RNG seed for reproducible runs. Unset draws a fresh seed (logged).
    pub seed: Option<u64>,
    /// Emit a stats log line every this many ticks. Zero disables.
    pub stats_interval_ticks: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            speed_modifiers: vec![1.0, 0.1, 0.01],
            tick_delay_ms: 16,
            ticks: None,
            seed: None,
            stats_interval_ticks: 500,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(RunnerConfig)` if the file was successfully loaded and parsed
    /// * `Err(String)` with a descriptive error message otherwise
    pub fn load(config_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: RunnerConfig =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))?;

        if config.speed_modifiers.is_empty() {
            return Err("speed_modifiers must not be empty".to_string());
        }
        if config.speed_modifiers.iter().any(|&m| m <= 0.0) {
            return Err("speed_modifiers must all be positive".to_string());
        }

        Ok(config)
    }

    /// Derive the config path from a scene file path.
    ///
    /// Replaces the scene filename with "config.toml" in the same directory.
    pub fn config_path_from_scene(scene_path: &str) -> PathBuf {
        let scene = Path::new(scene_path);
        scene.parent().unwrap_or(Path::new(".")).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = RunnerConfig::default();
        assert_eq!(config.speed_modifiers, vec![1.0, 0.1, 0.01]);
        assert_eq!(config.tick_delay_ms, 16);
        assert!(config.ticks.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: RunnerConfig = toml::from_str("seed = 42\nticks = 1000\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.ticks, Some(1000));
        assert_eq!(config.tick_delay_ms, 16);
        assert_eq!(config.speed_modifiers, vec![1.0, 0.1, 0.01]);
    }

    #[test]
    fn config_path_derivation() {
        let path = RunnerConfig::config_path_from_scene("scenes/solar_system.json");
        assert_eq!(path, PathBuf::from("scenes/config.toml"));
        let path = RunnerConfig::config_path_from_scene("scene.json");
        assert_eq!(path, PathBuf::from("config.toml"));
    }
}
