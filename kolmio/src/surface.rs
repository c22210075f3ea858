use image::RgbImage;
use std::path::Path;

use crate::{math::Point3, Result};

/// An RGB color with one byte per channel. Shading only produces grays but
/// the surface contract is plain RGB.
pub type Rgb8 = [u8; 3];

/// Converts a clamped shading intensity into a gray fill color.
pub fn grayscale(intensity: f32) -> Rgb8 {
    let v = intensity.clamp(0.0, 255.0) as u8;
    [v, v, v]
}

/// The presentation seam: anything that can clear itself and fill a convex
/// polygon given screen-space vertices.
///
/// The z components of the vertices are ignored; they only exist for depth
/// ordering upstream.
pub trait DrawSurface {
    fn clear(&mut self, width: u32, height: u32);
    fn fill_polygon(&mut self, verts: &[Point3<f32>; 3], fill: Rgb8, stroke: Rgb8);
}

/// A [DrawSurface] over an in-memory pixel buffer, for headless rendering
/// and image output.
pub struct ImageSurface {
    image: RgbImage,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb8) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, image::Rgb(color));
        }
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb8) {
        for x in x0..=x1 {
            self.put_pixel(x, y, color);
        }
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb8) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
        for i in 0..=(steps as i32) {
            let t = i as f32 / steps;
            self.put_pixel(
                (from.0 + dx * t).round() as i32,
                (from.1 + dy * t).round() as i32,
                color,
            );
        }
    }
}

impl DrawSurface for ImageSurface {
    fn clear(&mut self, width: u32, height: u32) {
        if self.image.width() != width || self.image.height() != height {
            self.image = RgbImage::new(width, height);
        } else {
            for pixel in self.image.pixels_mut() {
                *pixel = image::Rgb([0, 0, 0]);
            }
        }
    }

    // Scanline fill: intersect each pixel row with the polygon edges and fill
    // between the intersection pairs
    fn fill_polygon(&mut self, verts: &[Point3<f32>; 3], fill: Rgb8, stroke: Rgb8) {
        let points = [
            (verts[0].x, verts[0].y),
            (verts[1].x, verts[1].y),
            (verts[2].x, verts[2].y),
        ];

        let min_y = points.iter().fold(f32::MAX, |m, p| m.min(p.1));
        let max_y = points.iter().fold(f32::MIN, |m, p| m.max(p.1));
        let min_y = (min_y as i32).max(0);
        let max_y = (max_y as i32).min(self.image.height() as i32 - 1);

        let mut intersections = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            intersections.clear();
            let yf = y as f32 + 0.5;

            for i in 0..points.len() {
                let (x1, y1) = points[i];
                let (x2, y2) = points[(i + 1) % points.len()];
                if (y1 <= yf && y2 > yf) || (y2 <= yf && y1 > yf) {
                    intersections.push(x1 + (yf - y1) / (y2 - y1) * (x2 - x1));
                }
            }

            intersections.sort_unstable_by(f32::total_cmp);
            for pair in intersections.chunks_exact(2) {
                self.hline(pair[0] as i32, pair[1] as i32, y, fill);
            }
        }

        for i in 0..points.len() {
            self.line(points[i], points[(i + 1) % points.len()], stroke);
        }
    }
}
