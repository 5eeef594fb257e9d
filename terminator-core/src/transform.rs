/// Plane rotations and camera state
use nalgebra::{Rotation2, Vector2};

/// Horizontal/vertical pan per key press, in screen cells.
pub const PAN_STEP: i32 = 5;
/// Depth change per key press.
pub const DOLLY_STEP: f32 = 0.5;
/// Angle change per key press, in radians.
pub const TURN_STEP: f32 = 0.1;

/// Rotate every pair `(a[i], b[i])` in their shared plane by `theta`.
///
/// Returns `(a', b')` where `a' = a cos θ - b sin θ` and
/// `b' = a sin θ + b cos θ`.
pub fn rotate_plane<const N: usize>(
    a: &[f32; N],
    b: &[f32; N],
    theta: f32,
) -> ([f32; N], [f32; N]) {
    let rotation = Rotation2::new(theta);
    let mut a_out = [0.0; N];
    let mut b_out = [0.0; N];

    for (i, (&ai, &bi)) in a.iter().zip(b.iter()).enumerate() {
        let rotated = rotation * Vector2::new(ai, bi);
        a_out[i] = rotated.x;
        b_out[i] = rotated.y;
    }

    (a_out, b_out)
}

/// A discrete camera adjustment triggered by one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    PanLeft,
    PanRight,
    Raise,
    Lower,
    Advance,
    Retreat,
    TurnRight,
    TurnLeft,
    TiltUp,
    TiltDown,
}

/// Camera translation and rotation, accumulated across frames.
///
/// Angles are in radians and are never wrapped or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    pub x: i32,
    pub y: i32,
    pub z: f32,
    /// Horizontal look angle (rotation in the x/z plane)
    pub theta_x: f32,
    /// Vertical look angle (rotation in the y/z plane)
    pub theta_y: f32,
}

impl CameraState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single command.
    ///
    /// Offsets saturate at the `i32` limits instead of overflowing.
    pub fn apply(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::PanLeft => self.x = self.x.saturating_sub(PAN_STEP),
            CameraCommand::PanRight => self.x = self.x.saturating_add(PAN_STEP),
            CameraCommand::Raise => self.y = self.y.saturating_add(PAN_STEP),
            CameraCommand::Lower => self.y = self.y.saturating_sub(PAN_STEP),
            CameraCommand::Advance => self.z -= DOLLY_STEP,
            CameraCommand::Retreat => self.z += DOLLY_STEP,
            CameraCommand::TurnRight => self.theta_x += TURN_STEP,
            CameraCommand::TurnLeft => self.theta_x -= TURN_STEP,
            CameraCommand::TiltUp => self.theta_y += TURN_STEP,
            CameraCommand::TiltDown => self.theta_y -= TURN_STEP,
        }
    }
}
