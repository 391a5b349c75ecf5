pub mod boid;
pub mod config;
pub mod flock;
pub mod render;
pub mod vecmath;

// Re-export key types for easier use by dependent crates
pub use boid::{BehaviorParams, Boid};
pub use config::{BehaviorConfig, PopulationConfig, RunConfig, SimulationConfig, WorldBounds, WorldConfig};
pub use flock::{Flock, Snapshot};
pub use render::{DrawSurface, NullSurface, RecordingSurface};
pub use vecmath::Vec2;
