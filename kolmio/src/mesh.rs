use crate::{
    math::{
        transforms::{rotation_x, rotation_y, rotation_z, translation},
        Matrix4x4, Point3, Vec3,
    },
    Result,
};

/// A polygonal object in the scene.
///
/// Vertices are model-space positions, faces index into them. Position and
/// rotation are mutated through the setters, which rebuild the cached
/// matrices synchronously; nothing is recomputed lazily.
pub struct Mesh {
    pub name: String,
    vertices: Vec<Point3<f32>>,
    faces: Vec<[usize; 3]>,
    position: Vec3<f32>,
    /// Euler angles in degrees per axis.
    rotation: Vec3<f32>,
    translation_matrix: Matrix4x4<f32>,
    rotation_x_matrix: Matrix4x4<f32>,
    rotation_y_matrix: Matrix4x4<f32>,
    rotation_z_matrix: Matrix4x4<f32>,
}

impl Mesh {
    /// Creates a new `Mesh` at the origin with no rotation.
    ///
    /// Every face index is validated against the vertex count; an
    /// out-of-range index is a data error, not something the pipeline checks
    /// per frame.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Point3<f32>>,
        faces: Vec<[usize; 3]>,
    ) -> Result<Self> {
        for (i, face) in faces.iter().enumerate() {
            for &index in face {
                if index >= vertices.len() {
                    return Err(format!(
                        "Face {} references vertex {} but there are only {} vertices",
                        i,
                        index,
                        vertices.len()
                    )
                    .into());
                }
            }
        }

        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            translation_matrix: translation(Vec3::zeros()),
            rotation_x_matrix: rotation_x(0.0),
            rotation_y_matrix: rotation_y(0.0),
            rotation_z_matrix: rotation_z(0.0),
        })
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn position(&self) -> Vec3<f32> {
        self.position
    }

    pub fn rotation(&self) -> Vec3<f32> {
        self.rotation
    }

    /// Sets the position per axis, `None` leaving an axis unchanged, and
    /// rebuilds the translation matrix.
    pub fn set_position(&mut self, x: Option<f32>, y: Option<f32>, z: Option<f32>) {
        self.position = Vec3::new(
            x.unwrap_or(self.position.x),
            y.unwrap_or(self.position.y),
            z.unwrap_or(self.position.z),
        );
        self.translation_matrix = translation(self.position);
    }

    /// Sets the rotation in degrees per axis, `None` leaving an axis
    /// unchanged. Only the matrices of the supplied axes are rebuilt.
    pub fn set_rotation(&mut self, x: Option<f32>, y: Option<f32>, z: Option<f32>) {
        if let Some(x) = x {
            self.rotation.x = x;
            self.rotation_x_matrix = rotation_x(x);
        }
        if let Some(y) = y {
            self.rotation.y = y;
            self.rotation_y_matrix = rotation_y(y);
        }
        if let Some(z) = z {
            self.rotation.z = z;
            self.rotation_z_matrix = rotation_z(z);
        }
    }

    /// Composes the model-to-world matrix: rotate around local axes in
    /// x, y, z order, then translate. The order is part of the semantics.
    pub fn world_matrix(&self) -> Matrix4x4<f32> {
        &(&(&self.rotation_x_matrix * &self.rotation_y_matrix) * &self.rotation_z_matrix)
            * &self.translation_matrix
    }
}
