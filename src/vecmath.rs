use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A simple 2D vector struct.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2.
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    /// Creates a zero vector.
    pub fn zero() -> Self {
        Vec2 { x: 0.0, y: 0.0 }
    }

    /// Calculates the squared length (magnitude) of the vector.
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Calculates the length (magnitude) of the vector.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector (unit vector).
    /// Returns a zero vector if the original vector's length is zero.
    pub fn normalize_or_zero(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 1e-12 {
            let inv_len = 1.0 / len_sq.sqrt();
            Vec2 { x: self.x * inv_len, y: self.y * inv_len }
        } else {
            Vec2::zero()
        }
    }

    /// Returns the direction of the vector in `[0, 2*pi)`, measured
    /// counterclockwise from the +x axis. The zero vector maps to 0.
    pub fn angle(&self) -> f32 {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        // atan2 is quadrant-correct and handles x == 0; wrap (-pi, pi] into [0, 2*pi).
        self.y.atan2(self.x).rem_euclid(TAU)
    }

    /// Calculates the squared distance to another vector (point).
    pub fn distance_squared(&self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Calculates the distance to another vector (point).
    pub fn dist(&self, other: Vec2) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Scales the vector by a scalar value.
    pub fn scale(&self, scalar: f32) -> Self {
        Vec2 { x: self.x * scalar, y: self.y * scalar }
    }

    /// Rescales the vector to exactly `max` if its length exceeds `max`,
    /// otherwise returns it unchanged. Idempotent.
    pub fn limit(&self, max: f32) -> Self {
        let len_sq = self.length_squared();
        if len_sq > max * max {
            self.scale(max / len_sq.sqrt())
        } else {
            *self
        }
    }

    /// Returns a vector with the same direction but length `mag`.
    /// A zero-length vector stays the zero vector.
    pub fn with_magnitude(&self, mag: f32) -> Self {
        self.normalize_or_zero().scale(mag)
    }

    /// Returns the vector rotated counterclockwise by `theta` radians.
    pub fn rotated(&self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

// Implement standard operators for convenience
impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self { x: self.x * scalar, y: self.y * scalar }
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, scalar: f32) -> Self {
        Self { x: self.x / scalar, y: self.y / scalar }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const TOL: f32 = 1e-5;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < TOL, "expected {b}, got {a}");
    }

    #[test]
    fn angle_on_axes() {
        assert_close(Vec2::new(1.0, 0.0).angle(), 0.0);
        assert_close(Vec2::new(0.0, 1.0).angle(), FRAC_PI_2);
        assert_close(Vec2::new(-1.0, 0.0).angle(), PI);
        assert_close(Vec2::new(0.0, -1.0).angle(), 3.0 * FRAC_PI_2);
    }

    #[test]
    fn angle_in_range_for_all_quadrants() {
        for v in [
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
        ] {
            let theta = v.angle();
            assert!((0.0..TAU).contains(&theta), "angle {theta} out of range");
        }
        // Quadrant spot checks.
        assert_close(Vec2::new(1.0, 1.0).angle(), PI / 4.0);
        assert_close(Vec2::new(-1.0, -1.0).angle(), 5.0 * PI / 4.0);
        assert_close(Vec2::new(1.0, -1.0).angle(), 7.0 * PI / 4.0);
    }

    #[test]
    fn angle_of_zero_vector_is_zero() {
        assert_eq!(Vec2::zero().angle(), 0.0);
    }

    #[test]
    fn normalize_zero_vector_yields_zero() {
        assert_eq!(Vec2::zero().normalize_or_zero(), Vec2::zero());
        assert_eq!(Vec2::zero().with_magnitude(5.0), Vec2::zero());
    }

    #[test]
    fn normalize_produces_unit_length() {
        let v = Vec2::new(3.0, -4.0).normalize_or_zero();
        assert_close(v.length(), 1.0);
    }

    #[test]
    fn limit_is_idempotent() {
        let v = Vec2::new(30.0, 40.0);
        let once = v.limit(5.0);
        let twice = once.limit(5.0);
        assert_close(once.length(), 5.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn limit_leaves_short_vectors_unchanged() {
        let v = Vec2::new(1.0, 1.0);
        assert_eq!(v.limit(5.0), v);
    }

    #[test]
    fn with_magnitude_sets_exact_length() {
        let v = Vec2::new(10.0, 0.0).with_magnitude(2.5);
        assert_eq!(v, Vec2::new(2.5, 0.0));
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert_close(v.x, 0.0);
        assert_close(v.y, 1.0);
    }

    #[test]
    fn dist_matches_euclidean_norm() {
        assert_close(Vec2::new(1.0, 1.0).dist(Vec2::new(4.0, 5.0)), 5.0);
    }
}
