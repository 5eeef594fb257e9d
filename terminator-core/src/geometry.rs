/// Geometry primitives for the point-cloud cube
use nalgebra::Point3;

/// Number of vertices in the cube.
pub const VERTEX_COUNT: usize = 8;

/// A fixed set of vertices stored as parallel coordinate arrays.
///
/// The arrays are never mutated once built; every frame derives its
/// transformed coordinates from them.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexSet {
    xs: [f32; VERTEX_COUNT],
    ys: [f32; VERTEX_COUNT],
    zs: [f32; VERTEX_COUNT],
}

impl VertexSet {
    pub fn new(
        xs: [f32; VERTEX_COUNT],
        ys: [f32; VERTEX_COUNT],
        zs: [f32; VERTEX_COUNT],
    ) -> Self {
        Self { xs, ys, zs }
    }

    /// The cube viewed by the terminal: x and y in {1, -1}, front face at
    /// depth 3, back face at depth 4.
    pub fn cube() -> Self {
        Self::new(
            [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0],
            [3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0],
        )
    }

    pub fn xs(&self) -> &[f32; VERTEX_COUNT] {
        &self.xs
    }

    pub fn ys(&self) -> &[f32; VERTEX_COUNT] {
        &self.ys
    }

    pub fn zs(&self) -> &[f32; VERTEX_COUNT] {
        &self.zs
    }

    /// Vertex `index` as a point, or `None` past the end.
    pub fn point(&self, index: usize) -> Option<Point3<f32>> {
        if index >= VERTEX_COUNT {
            return None;
        }
        Some(Point3::new(self.xs[index], self.ys[index], self.zs[index]))
    }

    pub fn points(&self) -> impl Iterator<Item = Point3<f32>> + '_ {
        (0..VERTEX_COUNT).filter_map(move |i| self.point(i))
    }
}

impl Default for VertexSet {
    fn default() -> Self {
        Self::cube()
    }
}
