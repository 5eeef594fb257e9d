/// Per-frame geometry pipeline: rotate, project, rasterize
use crate::geometry::{VertexSet, VERTEX_COUNT};
use crate::projection::project;
use crate::raster::FrameBuffer;
use crate::transform::{rotate_plane, CameraState};

/// Screen-plane coordinates of every vertex for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertices {
    pub xs: [f32; VERTEX_COUNT],
    pub ys: [f32; VERTEX_COUNT],
}

/// Rotate the vertices by the camera angles and project them.
///
/// The horizontal look rotates the x/z plane by `theta_x`; the vertical look
/// then rotates y against the already rotated z by `theta_y`. Both screen
/// axes are divided by the doubly rotated depth.
pub fn project_vertices(vertices: &VertexSet, camera: &CameraState) -> ProjectedVertices {
    let (x_rotated, z_rotated) = rotate_plane(vertices.xs(), vertices.zs(), camera.theta_x);
    let (y_rotated, z_rotated) = rotate_plane(vertices.ys(), &z_rotated, camera.theta_y);

    ProjectedVertices {
        xs: project(&x_rotated, &z_rotated, camera.z),
        ys: project(&y_rotated, &z_rotated, camera.z),
    }
}

/// Compute one complete frame into `buffer`, returning the number of
/// visible vertices.
pub fn render_frame(vertices: &VertexSet, camera: &CameraState, buffer: &mut FrameBuffer) -> usize {
    let projected = project_vertices(vertices, camera);
    buffer.rasterize(&projected.xs, &projected.ys, camera)
}
