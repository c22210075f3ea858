use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::math::{
    transforms::{rotation_x, rotation_y},
    Matrix4x4, Point3, Vec3,
};

/// Camera state, mutated freely by the input side between frames.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vec3<f32>,
    /// Euler angles in degrees, only consumed in [CameraMode::Free].
    pub rotation: Vec3<f32>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 2.0, -10.0),
            target: Point3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            rotation: Vec3::zeros(),
        }
    }
}

/// How the view matrix is derived from the camera state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Display, EnumString)]
pub enum CameraMode {
    /// Look at the stored target. Orbit control also runs in this mode since
    /// it only moves the position around the target.
    Target,
    /// Look along the forward axis rotated by the camera's Euler angles.
    Free,
}

impl Default for CameraMode {
    fn default() -> Self {
        Self::Target
    }
}

/// Builds the camera-to-world orientation matrix for a camera at `position`
/// looking at `target`.
///
/// `up` is re-orthogonalized against the forward axis with one Gram-Schmidt
/// step. `up` parallel to forward degenerates to a zero-length up before
/// normalization; callers must avoid it.
pub fn point_at(position: Point3<f32>, target: Point3<f32>, up: Vec3<f32>) -> Matrix4x4<f32> {
    let forward = (target - position).normalized();
    debug_assert!(up.cross(forward).len_sqr() > f32::EPSILON);

    let new_up = (up - forward * up.dot(forward)).normalized();
    let new_right = new_up.cross(forward);

    Matrix4x4::new([
        [new_right.x, new_right.y, new_right.z, 0.0],
        [new_up.x, new_up.y, new_up.z, 0.0],
        [forward.x, forward.y, forward.z, 0.0],
        [position.x, position.y, position.z, 1.0],
    ])
}

impl Camera {
    /// Builds the world-to-view matrix for this `Camera`.
    ///
    /// The point-at matrix is rigid so the cheap inverse is valid.
    pub fn view_matrix(&self, mode: CameraMode) -> Matrix4x4<f32> {
        let target = match mode {
            CameraMode::Target => self.target,
            CameraMode::Free => {
                let forward = (self.target - self.position).normalized();
                let rot = &rotation_x(self.rotation.x) * &rotation_y(self.rotation.y);
                self.position + &rot * forward
            }
        };
        point_at(self.position, target, self.up).rigid_inverse()
    }
}
