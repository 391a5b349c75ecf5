use crate::vecmath::Vec2;

/// The drawing boundary the simulation core renders through. The core only
/// supplies geometry in world coordinates; the collaborator behind this trait
/// owns rasterization.
pub trait DrawSurface {
    /// Wipes the previous frame.
    fn clear(&mut self);
    /// Draws one filled triangle with the given world-space corners.
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2);
}

/// Surface that discards every call. Used for headless runs.
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self) {}

    fn fill_triangle(&mut self, _a: Vec2, _b: Vec2, _c: Vec2) {}
}

/// Surface that records the draw calls of the current frame. Used by tests to
/// assert on rendered geometry and call order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Triangles drawn since the last `clear`.
    pub triangles: Vec<[Vec2; 3]>,
    /// Number of `clear` calls seen.
    pub clears: u32,
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.clears += 1;
        self.triangles.clear();
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.triangles.push([a, b, c]);
    }
}
