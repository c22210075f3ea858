use serde::{Deserialize, Serialize};

use crate::{
    math::{transforms::perspective, Matrix4x4, Point3, Vec3, Vec4},
    scene::Scene,
};

/// Projection parameters for the raster pipeline.
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct RasterSettings {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

/// One visible face after projection: three screen-space points and the flat
/// shading intensity of the whole face.
///
/// The z components are the remapped depths used for ordering; surfaces
/// ignore them.
#[derive(Copy, Clone, Debug)]
pub struct ProjectedFace {
    pub verts: [Point3<f32>; 3],
    pub intensity: f32,
}

impl ProjectedFace {
    /// The depth ordering key. Screen z decreases monotonically with view
    /// depth because the screen remap negates it.
    pub fn mean_depth(&self) -> f32 {
        (self.verts[0].z + self.verts[1].z + self.verts[2].z) / 3.0
    }
}

/// The per-frame transform pipeline.
///
/// Stateless apart from the settings and the projection matrix derived from
/// them; every projection is a pure function of the scene passed in.
pub struct Rasterizer {
    settings: RasterSettings,
    projection: Matrix4x4<f32>,
}

impl Rasterizer {
    pub fn new(settings: RasterSettings) -> Self {
        Self {
            settings,
            projection: Self::projection_matrix(&settings),
        }
    }

    fn projection_matrix(settings: &RasterSettings) -> Matrix4x4<f32> {
        perspective(
            settings.fov.to_radians(),
            settings.height as f32 / settings.width as f32,
            settings.znear,
            settings.zfar,
        )
    }

    pub fn settings(&self) -> RasterSettings {
        self.settings
    }

    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.settings.width = width;
        self.settings.height = height;
        self.projection = Self::projection_matrix(&self.settings);
    }

    /// Transforms, culls, shades and depth-orders every face of every object.
    ///
    /// Faces come out back to front for painter's algorithm presentation.
    /// Ordering by mean depth is an approximation: intersecting or very large
    /// triangles can come out in the wrong order, there is no per-pixel test.
    pub fn project_scene(&self, scene: &Scene) -> Vec<ProjectedFace> {
        let view = scene.camera.view_matrix(scene.camera_mode);
        let light_direction = scene.light.position.normalized();
        let eye = Vec3::from(scene.camera.position);

        let flip = Vec4::new(-1.0, -1.0, -1.0, 1.0);
        let center = Vec4::new(1.0, 1.0, 0.0, 0.0);
        let half_screen = Vec4::new(
            0.5 * self.settings.width as f32,
            0.5 * self.settings.height as f32,
            1.0,
            1.0,
        );

        let mut faces = Vec::new();
        for object in &scene.objects {
            let world = object.world_matrix();
            let vertices = object.vertices();

            for face in object.faces() {
                let world_verts = [
                    &world * Vec4::from(vertices[face[0]]),
                    &world * Vec4::from(vertices[face[1]]),
                    &world * Vec4::from(vertices[face[2]]),
                ];

                let v0 = world_verts[0].xyz();
                let v1 = world_verts[1].xyz();
                let v2 = world_verts[2].xyz();
                let normal = (v1 - v0).cross(v2 - v0).normalized();

                // Strictly less than: a face exactly edge on is culled
                let camera_ray = v0 - eye;
                if normal.dot(camera_ray) >= 0.0 {
                    continue;
                }

                // Flat shading from the world-space normal, before view and
                // projection touch the face
                let intensity =
                    (((light_direction.dot(normal) + 1.0) / 2.0) * 230.0).clamp(0.0, 255.0);

                let verts = world_verts.map(|vert| {
                    let clip = &self.projection * (&view * vert);
                    let screen = (clip.perspective_divided().mul_comp(flip) + center)
                        .mul_comp(half_screen);
                    Point3::new(screen.x, screen.y, screen.z)
                });

                faces.push(ProjectedFace { verts, intensity });
            }
        }

        // Ascending screen z is far to near, see ProjectedFace::mean_depth
        faces.sort_by(|a, b| a.mean_depth().total_cmp(&b.mean_depth()));
        faces
    }
}
