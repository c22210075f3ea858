use std::{path::Path, time::Instant};

use crate::{
    kolmio_debug, kolmio_error, kolmio_info,
    math::Point3,
    mesh::Mesh,
    Result,
};

/// Vertex and face lists parsed out of model text, before validation.
pub struct ModelData {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<[usize; 3]>,
}

/// Parses the line-based model format.
///
/// Records are whitespace-delimited with a leading tag: `v x y z` for a
/// vertex, `f i j k` for a triangle of 1-based vertex indices, stored
/// 0-based. Anything else, including malformed records, is skipped. The
/// lenient policy keeps partial models loadable; the skip count is only
/// debug-logged.
pub fn parse(source: &str) -> ModelData {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    let mut skipped = 0usize;

    for line in source.lines() {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => {
                let coords: Vec<f32> = fields
                    .take(3)
                    .filter_map(|t| t.parse().ok())
                    .filter(|c: &f32| !c.is_nan())
                    .collect();
                if coords.len() == 3 {
                    vertices.push(Point3::new(coords[0], coords[1], coords[2]));
                } else {
                    skipped += 1;
                }
            }
            Some("f") => {
                let indices: Vec<usize> = fields
                    .take(3)
                    .filter_map(|t| t.parse::<usize>().ok())
                    .filter(|&i| i > 0)
                    .collect();
                if indices.len() == 3 {
                    // 1-based in the format
                    faces.push([indices[0] - 1, indices[1] - 1, indices[2] - 1]);
                } else {
                    skipped += 1;
                }
            }
            Some(_) => skipped += 1,
            None => (),
        }
    }

    if skipped > 0 {
        kolmio_debug!("model: Skipped {} unrecognized lines", skipped);
    }

    ModelData { vertices, faces }
}

/// Loads a model file into a [Mesh] named after the file stem.
///
/// Face indices are validated here so the pipeline can assume they are in
/// range. On failure no mesh exists and the caller must not add anything to
/// the scene.
pub fn load(path: &Path) -> Result<Mesh> {
    let load_start = Instant::now();

    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            kolmio_error!("model: Could not read '{}'", path.to_string_lossy());
            return Err(e.into());
        }
    };

    let data = parse(&source);
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".into());

    let mesh = Mesh::new(name, data.vertices, data.faces)?;
    kolmio_info!(
        "model: Loaded '{}' with {} vertices and {} faces in {:.2}s",
        mesh.name,
        mesh.vertices().len(),
        mesh.faces().len(),
        (load_start.elapsed().as_micros() as f32) * 1e-6
    );

    Ok(mesh)
}
