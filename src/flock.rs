use crate::boid::Boid;
use crate::config::{SimulationConfig, WorldBounds};
use crate::render::{DrawSurface, NullSurface};
use crate::vecmath::Vec2;
use anyhow::Result;
use log::debug;
use rand::distr::Uniform;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// A record of the flock's state and summary metrics at one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The tick at which the snapshot was taken.
    pub tick: u64,
    /// The number of boids in the flock.
    pub population: u32,
    /// Mean velocity magnitude over the flock.
    pub average_speed: f32,
    /// Direction of the flock's mean velocity, in `[0, 2*pi)`.
    pub average_heading: f32,
    /// The world the snapshot was taken in.
    pub world: WorldBounds,
    /// Full per-boid kinematic state.
    pub boids: Vec<Boid>,
}

/// Owns the population and drives the simulation tick.
///
/// The population is fixed at construction: boids are never added or removed
/// while the simulation runs.
pub struct Flock {
    boids: Vec<Boid>,
    world: WorldBounds,
    tick_count: u64,
}

impl Flock {
    /// Builds a flock from configuration, seeding the population uniformly
    /// over the world with small random velocities.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let world = config.world_bounds();
        let params = config.behavior_params();
        let mut rng = StdRng::seed_from_u64(config.population.seed);
        let x_dist = Uniform::new(0.0f32, world.width)?;
        let y_dist = Uniform::new(0.0f32, world.height)?;
        let v_dist = Uniform::new(-1.0f32, 1.0f32)?;

        let boids = (0..config.population.count)
            .map(|_| {
                let position = Vec2::new(rng.sample(x_dist), rng.sample(y_dist));
                let velocity = Vec2::new(rng.sample(v_dist), rng.sample(v_dist));
                Boid::new(position, velocity, config.population.size, params)
            })
            .collect();

        debug!(
            "Placed {} boids in a {}x{} world (seed {}).",
            config.population.count, world.width, world.height, config.population.seed
        );

        Ok(Flock {
            boids,
            world,
            tick_count: 0,
        })
    }

    /// Builds a flock from an explicit population. Used by tests and by
    /// callers replaying a recorded snapshot.
    pub fn from_boids(world: WorldBounds, boids: Vec<Boid>) -> Result<Self> {
        if boids.is_empty() {
            anyhow::bail!("A flock needs at least one boid.");
        }
        if !(world.width > 0.0) || !(world.height > 0.0) {
            anyhow::bail!(
                "World dimensions must be positive, got {}x{}.",
                world.width,
                world.height
            );
        }
        Ok(Flock {
            boids,
            world,
            tick_count: 0,
        })
    }

    /// Runs one tick, rendering through `surface`.
    ///
    /// For each boid in index order: draw, advance, then recompute its
    /// steering from the flock. Drawing first means every frame shows the
    /// pose computed at the end of the previous tick. The pass is a single
    /// sequential sweep, so a boid's steering sees the already-advanced
    /// state of every boid earlier in iteration order within the same tick.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear();
        for i in 0..self.boids.len() {
            self.boids[i].draw(surface);
            self.boids[i].advance(&self.world);
            let force = self.boids[i].steering(&self.boids, i);
            self.boids[i].acceleration = force;
        }
        self.tick_count += 1;
    }

    /// Runs one tick without rendering.
    pub fn step(&mut self) {
        self.tick(&mut NullSurface);
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn world(&self) -> WorldBounds {
        self.world
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Captures the current state and summary metrics.
    pub fn snapshot(&self) -> Snapshot {
        let population = self.boids.len() as u32;
        let total_speed: f32 = self.boids.iter().map(|b| b.velocity.length()).sum();
        let mean_velocity = self
            .boids
            .iter()
            .fold(Vec2::zero(), |acc, b| acc + b.velocity)
            / population as f32;

        Snapshot {
            tick: self.tick_count,
            population,
            average_speed: total_speed / population as f32,
            average_heading: mean_velocity.angle(),
            world: self.world,
            boids: self.boids.clone(),
        }
    }
}
