use crate::config::WorldBounds;
use crate::render::DrawSurface;
use crate::vecmath::Vec2;
use serde::{Deserialize, Serialize};

/// Neighbors closer than this contribute nothing to separation; pushing away
/// from a coincident neighbor has no defined direction and dividing by the
/// distance would flood the flock with NaN.
pub const DISTANCE_EPSILON: f32 = 1e-6;

/// Behavior weights for one boid. Fixed after construction.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorParams {
    pub perception_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub separation_weight: f32,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        BehaviorParams {
            perception_radius: 100.0,
            max_speed: 5.0,
            max_force: 1.0,
            alignment_weight: 0.2,
            cohesion_weight: 0.5,
            separation_weight: 2.0,
        }
    }
}

/// One flocking agent: kinematic state plus its behavior weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Steering force for the upcoming tick. Recomputed (replaced, not
    /// accumulated) by the flock pass after every move.
    pub acceleration: Vec2,
    /// Cached from the velocity's angle; used only for rendering orientation.
    pub heading: f32,
    /// Visual scale of the drawn triangle. Does not affect physics.
    pub size: f32,
    pub params: BehaviorParams,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, params: BehaviorParams) -> Self {
        Boid {
            position,
            velocity,
            acceleration: Vec2::zero(),
            heading: velocity.angle(),
            size,
            params,
        }
    }

    /// Advances the boid by one tick.
    ///
    /// Speed is pinned to exactly `max_speed` every tick; steering only ever
    /// changes direction. This is designed behavior carried over from the
    /// source simulation, not an integration bug. The acceleration is added
    /// to the velocity *after* the position update, so a new steering force
    /// first shows up in the trajectory on the following tick. A zero-length
    /// velocity stays zero (the boid holds still until steered).
    pub fn advance(&mut self, world: &WorldBounds) {
        self.acceleration = self.acceleration.limit(self.params.max_force);
        self.velocity = self.velocity.with_magnitude(self.params.max_speed);
        self.position = self.position + self.velocity;
        self.velocity = self.velocity + self.acceleration;
        self.heading = self.velocity.angle();
        self.position = world.wrap(self.position);
    }

    /// Computes the steering force from the three flocking rules over all
    /// other boids strictly within `perception_radius`.
    ///
    /// The running alignment/cohesion averages are seeded with the boid's own
    /// velocity and position (`count` starts at 1), so with no neighbors both
    /// rules cancel to zero: average minus self is the zero vector. The
    /// separation sum is divided by the neighbor count alone.
    pub fn steering(&self, flock: &[Boid], self_index: usize) -> Vec2 {
        let mut avg_vel = self.velocity;
        let mut avg_pos = self.position;
        let mut separation = Vec2::zero();
        let mut count = 1u32;

        for (i, other) in flock.iter().enumerate() {
            if i == self_index {
                continue;
            }
            let d = self.position.dist(other.position);
            if d >= self.params.perception_radius {
                continue;
            }
            count += 1;
            avg_vel = avg_vel + other.velocity;
            avg_pos = avg_pos + other.position;
            if d > DISTANCE_EPSILON {
                separation = separation + (self.position - other.position) / (d * 0.9);
            }
        }

        if count > 1 {
            avg_vel = avg_vel / count as f32;
            avg_pos = avg_pos / count as f32;
            separation = separation / (count - 1) as f32;
        }

        let alignment = (avg_vel - self.velocity).limit(self.params.alignment_weight);
        let cohesion = (avg_pos - self.position).limit(self.params.cohesion_weight);
        let separation = separation.limit(self.params.separation_weight);

        alignment + cohesion + separation
    }

    /// Hands the boid's triangle footprint to the render surface: an arrow
    /// shape with side parameter `size`, nose on the +x axis, rotated by the
    /// cached heading and translated to the current position.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let a = self.size;
        let r3 = 3.0f32.sqrt();
        let tail_x = -a / (2.0 * r3);
        let local = [
            Vec2::new(tail_x, -a / 2.0),
            Vec2::new(tail_x, a / 2.0),
            Vec2::new(2.0 * a / r3, 0.0),
        ];
        let [p1, p2, p3] = local.map(|p| p.rotated(self.heading) + self.position);
        surface.fill_triangle(p1, p2, p3);
    }
}
