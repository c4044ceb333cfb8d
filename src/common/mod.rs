//! Configuration shared between the simulation core and the runner.

pub mod config;
pub mod scene;

pub use config::RunnerConfig;
pub use scene::{Scene, SceneLoadError};
