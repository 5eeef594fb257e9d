//! TERMINATOR Core Library - Geometry, projection and rasterization
//!
//! This library holds the pure per-frame logic for the terminal cube viewer:
//! the fixed vertex set, camera state, plane rotation, perspective projection
//! and point rasterization onto a 60x60 character grid.

pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod transform;

// Re-export commonly used types
pub use geometry::{VertexSet, VERTEX_COUNT};
pub use pipeline::{project_vertices, render_frame, ProjectedVertices};
pub use raster::{FrameBuffer, BLANK, HEIGHT, MARKER, WIDTH};
pub use transform::{rotate_plane, CameraCommand, CameraState};
