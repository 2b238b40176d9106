use std::fmt;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::{add_quats, axis_to_quat, project_to_sphere};

/// Radius of the virtual ball in normalized device coordinates.
pub const TRACKBALL_SIZE: f32 = 0.8;

/// Cross products shorter than this carry no usable rotation axis.
const MIN_AXIS_LENGTH_SQUARED: f32 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackballError {
    /// The ball radius must be finite and strictly positive.
    InvalidRadius(f32),
}

impl fmt::Display for TrackballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackballError::InvalidRadius(r) => write!(f, "invalid trackball radius: {}", r),
        }
    }
}

impl std::error::Error for TrackballError {}

/// Virtual trackball: a sphere in the middle of the viewport, deformed
/// into a hyperbolic sheet towards the edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrackballConfig")]
pub struct Trackball {
    radius: f32,
}

#[derive(Deserialize)]
struct TrackballConfig {
    radius: f32,
}

impl TryFrom<TrackballConfig> for Trackball {
    type Error = TrackballError;

    fn try_from(config: TrackballConfig) -> Result<Self, Self::Error> {
        Trackball::new(config.radius)
    }
}

impl Trackball {
    pub fn new(radius: f32) -> Result<Self, TrackballError> {
        if radius.is_finite() && radius > 0.0 {
            Ok(Self { radius })
        } else {
            Err(TrackballError::InvalidRadius(radius))
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Lift a 2D point onto the deformed ball.
    pub fn project(&self, p: Vec2) -> Vec3 {
        p.extend(project_to_sphere(self.radius, p.x, p.y))
    }

    /// Incremental rotation carrying the pointer from `prev` to `cur`.
    ///
    /// Both points are expected in [-1, 1]. The axis is `p2 × p1` and the
    /// angle comes from the chord between the two lifted points.
    pub fn rotation(&self, prev: Vec2, cur: Vec2) -> Quat {
        if prev == cur {
            // Zero rotation
            return Quat::IDENTITY;
        }

        let p1 = self.project(prev);
        let p2 = self.project(cur);

        let axis = p2.cross(p1);
        if axis.length_squared() < MIN_AXIS_LENGTH_SQUARED {
            return Quat::IDENTITY;
        }

        // Clamp keeps asin defined when rounding pushes the chord past the diameter
        let t = ((p1 - p2).length() / (2.0 * self.radius)).clamp(-1.0, 1.0);
        let phi = 2.0 * t.asin();

        axis_to_quat(axis, phi)
    }
}

impl Default for Trackball {
    fn default() -> Self {
        Self {
            radius: TRACKBALL_SIZE,
        }
    }
}

/// Rotation for a pointer moving from (p1x, p1y) to (p2x, p2y) on a ball of
/// radius [`TRACKBALL_SIZE`].
pub fn trackball(p1x: f32, p1y: f32, p2x: f32, p2y: f32) -> Quat {
    Trackball::default().rotation(Vec2::new(p1x, p1y), Vec2::new(p2x, p2y))
}

/// Accumulated orientation of one trackball interaction, together with the
/// renormalization counter that belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackballSession {
    pub orientation: Quat,
    pub renorm_count: u32,
}

impl TrackballSession {
    pub fn new() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            renorm_count: 0,
        }
    }

    /// Fold an incremental rotation into the orientation: the increment
    /// is applied first, then the orientation accumulated so far.
    pub fn fold(&mut self, increment: Quat) -> Quat {
        let (orientation, renorm_count) = add_quats(increment, self.orientation, self.renorm_count);
        self.orientation = orientation;
        self.renorm_count = renorm_count;
        orientation
    }

    /// Run the trackball for one pointer step and fold the result in.
    pub fn rotate(&mut self, trackball: &Trackball, prev: Vec2, cur: Vec2) -> Quat {
        self.fold(trackball.rotation(prev, cur))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TrackballSession {
    fn default() -> Self {
        Self::new()
    }
}
