use crate::boid::BehaviorParams;
use crate::vecmath::Vec2;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Configuration for the world the flock lives in.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct WorldConfig {
    #[serde(default = "default_world_width")]
    pub width: f32,
    #[serde(default = "default_world_height")]
    pub height: f32,
}

// Configuration for the initial population.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PopulationConfig {
    #[serde(default = "default_count")]
    pub count: u32,
    /// Seed for the initial placement RNG. Same seed, same flock.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Visual scale of each boid's triangle. Does not affect physics.
    #[serde(default = "default_size")]
    pub size: f32,
}

// Behavior weights shared by every boid in the flock.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BehaviorConfig {
    #[serde(default = "default_perception_radius")]
    pub perception_radius: f32,
    #[serde(default = "default_max_speed")]
    pub max_speed: f32,
    #[serde(default = "default_max_force")]
    pub max_force: f32,
    #[serde(default = "default_alignment_weight")]
    pub alignment_weight: f32,
    #[serde(default = "default_cohesion_weight")]
    pub cohesion_weight: f32,
    #[serde(default = "default_separation_weight")]
    pub separation_weight: f32,
}

// Driver settings: how long to run and what to record.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RunConfig {
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    /// Record a snapshot every this many ticks.
    #[serde(default = "default_snapshot_interval")]
    pub snapshot_interval: u32,
    /// If set, the driver writes the recorded snapshots here as JSON.
    #[serde(default)]
    pub output_path: Option<String>,
}

fn default_world_width() -> f32 {
    800.0
}

fn default_world_height() -> f32 {
    600.0
}

fn default_count() -> u32 {
    300
}

fn default_seed() -> u64 {
    42
}

fn default_size() -> f32 {
    7.0
}

fn default_perception_radius() -> f32 {
    100.0
}

fn default_max_speed() -> f32 {
    5.0
}

fn default_max_force() -> f32 {
    1.0
}

fn default_alignment_weight() -> f32 {
    0.2
}

fn default_cohesion_weight() -> f32 {
    0.5
}

fn default_separation_weight() -> f32 {
    2.0
}

fn default_ticks() -> u32 {
    1000
}

fn default_snapshot_interval() -> u32 {
    60
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: default_world_width(),
            height: default_world_height(),
        }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        PopulationConfig {
            count: default_count(),
            seed: default_seed(),
            size: default_size(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            perception_radius: default_perception_radius(),
            max_speed: default_max_speed(),
            max_force: default_max_force(),
            alignment_weight: default_alignment_weight(),
            cohesion_weight: default_cohesion_weight(),
            separation_weight: default_separation_weight(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            ticks: default_ticks(),
            snapshot_interval: default_snapshot_interval(),
            output_path: None,
        }
    }
}

/// The rectangular toroidal domain the flock moves in.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        WorldBounds { width, height }
    }

    /// Wraps a position into `[0, width) x [0, height)` (toroidal topology).
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.rem_euclid(self.width), p.y.rem_euclid(self.height))
    }
}

// Main simulation configuration structure, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SimulationConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub population: PopulationConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl SimulationConfig {
    /// Loads the simulation configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e))?;
        let config: SimulationConfig = toml::from_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML from '{}': {}", path_ref.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Fails fast on configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.population.count == 0 {
            anyhow::bail!("population.count must be greater than 0.");
        }
        if !(self.world.width > 0.0) || !(self.world.height > 0.0) {
            anyhow::bail!(
                "world dimensions must be positive, got {}x{}.",
                self.world.width,
                self.world.height
            );
        }
        if !(self.population.size > 0.0) {
            anyhow::bail!("population.size must be positive.");
        }
        if !(self.behavior.perception_radius > 0.0) {
            anyhow::bail!("behavior.perception_radius must be positive.");
        }
        if !(self.behavior.max_speed > 0.0) {
            anyhow::bail!("behavior.max_speed must be positive.");
        }
        if !(self.behavior.max_force > 0.0) {
            anyhow::bail!("behavior.max_force must be positive.");
        }
        if self.behavior.alignment_weight < 0.0
            || self.behavior.cohesion_weight < 0.0
            || self.behavior.separation_weight < 0.0
        {
            anyhow::bail!("behavior weights must not be negative.");
        }
        Ok(())
    }

    /// Converts the behavior section into the per-boid parameter block.
    pub fn behavior_params(&self) -> BehaviorParams {
        BehaviorParams {
            perception_radius: self.behavior.perception_radius,
            max_speed: self.behavior.max_speed,
            max_force: self.behavior.max_force,
            alignment_weight: self.behavior.alignment_weight,
            cohesion_weight: self.behavior.cohesion_weight,
            separation_weight: self.behavior.separation_weight,
        }
    }

    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world.width, self.world.height)
    }
}
