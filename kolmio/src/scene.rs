use crate::{
    camera::{Camera, CameraMode},
    math::Vec3,
    mesh::Mesh,
};

/// The single directional light.
///
/// Only the normalized direction of the position is used for shading; there
/// is no falloff.
#[derive(Copy, Clone, Debug)]
pub struct Light {
    pub position: Vec3<f32>,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, -1.0),
        }
    }
}

/// Everything a frame is rendered from: objects, one camera and one light.
///
/// The input side owns mutation between frames; the pipeline only reads.
pub struct Scene {
    pub objects: Vec<Mesh>,
    pub camera: Camera,
    pub camera_mode: CameraMode,
    pub light: Light,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            camera: Camera::default(),
            camera_mode: CameraMode::default(),
            light: Light::default(),
        }
    }
}

impl Scene {
    pub fn has_object(&self, name: &str) -> bool {
        self.objects.iter().any(|o| o.name == name)
    }

    pub fn add_object(&mut self, mesh: Mesh) {
        self.objects.push(mesh);
    }

    /// Removes the named object, returning it if it was in the scene.
    pub fn remove_object(&mut self, name: &str) -> Option<Mesh> {
        let index = self.objects.iter().position(|o| o.name == name)?;
        Some(self.objects.remove(index))
    }
}
