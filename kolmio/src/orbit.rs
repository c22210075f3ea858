use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::{
    camera::Camera,
    kolmio_debug, kolmio_trace,
    math::{Point3, Vec2},
};

/// Tunables for [OrbitController].
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct OrbitSettings {
    /// Angle change per pointer pixel, in radians.
    pub sensitivity: f32,
    /// Distance range the zoom target is clamped to.
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the remaining distance covered per zoom step.
    pub zoom_lerp: f32,
    /// Distance to target under which the zoom snaps and stops.
    pub zoom_threshold: f32,
    /// Base wheel step and the extra speed per wheel delta unit.
    pub zoom_speed: f32,
    pub zoom_acceleration: f32,
    /// Minimum drift before [OrbitController::sync_radius] takes effect.
    pub resync_threshold: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            sensitivity: 0.005,
            min_distance: 0.01,
            max_distance: 50.0,
            zoom_lerp: 0.15,
            zoom_threshold: 0.01,
            zoom_speed: 0.8,
            zoom_acceleration: 0.05,
            resync_threshold: 0.1,
        }
    }
}

// Keep elevation just shy of the poles so up never goes parallel to forward
const MAX_PHI: f32 = FRAC_PI_2 - 0.1;

/// Spherical-coordinate camera control around a fixed target.
///
/// The radius is the single source of truth for the camera distance: drags
/// never touch it and reposition the camera from the unchanged radius, while
/// zooming interpolates it towards a clamped target distance. External moves
/// that change the true distance must be followed by [Self::sync_radius] or
/// the next drag snaps back to the stale radius.
#[derive(Clone, Debug)]
pub struct OrbitController {
    settings: OrbitSettings,
    target: Point3<f32>,
    theta: f32,
    phi: f32,
    radius: f32,
    zoom_target: f32,
    zooming: bool,
}

impl OrbitController {
    /// Creates a controller orbiting `target`, with angles and radius derived
    /// from the camera's current position.
    pub fn new(camera: &Camera, target: Point3<f32>, settings: OrbitSettings) -> Self {
        let offset = camera.position - target;
        let radius = offset.len();
        debug_assert!(radius > 0.0);

        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).asin();
        kolmio_debug!(
            "orbit: Initialized at distance {:.3}, theta {:.3}, phi {:.3}",
            radius,
            theta,
            phi
        );

        Self {
            settings,
            target,
            theta,
            phi,
            radius,
            zoom_target: radius,
            zooming: false,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    pub fn is_zooming(&self) -> bool {
        self.zooming
    }

    /// Recomputes the camera position from the spherical state.
    fn apply(&self, camera: &mut Camera) {
        camera.position = Point3::new(
            self.target.x + self.radius * self.theta.sin() * self.phi.cos(),
            self.target.y + self.radius * self.phi.sin(),
            self.target.z + self.radius * self.theta.cos() * self.phi.cos(),
        );
        camera.target = self.target;
    }

    /// Applies a pointer drag. Azimuth accumulates freely, elevation is
    /// clamped short of the poles, the radius is untouched.
    pub fn drag(&mut self, delta: Vec2<f32>, camera: &mut Camera) {
        self.theta -= delta.x * self.settings.sensitivity;
        self.phi = (self.phi + delta.y * self.settings.sensitivity).clamp(-MAX_PHI, MAX_PHI);
        self.apply(camera);
    }

    /// Applies a wheel step to the zoom target distance. Fast scrolling
    /// accelerates the step; the target stays inside the distance range.
    pub fn wheel(&mut self, delta: f32) {
        let step = self.settings.zoom_speed + delta.abs() * self.settings.zoom_acceleration;
        let amount = if delta < 0.0 { -step } else { step };
        self.zoom_target = (self.zoom_target + amount)
            .clamp(self.settings.min_distance, self.settings.max_distance);
        self.zooming = true;
        kolmio_trace!("orbit: Zoom target {:.3}", self.zoom_target);
    }

    /// Advances the smooth zoom one step, moving the camera along its current
    /// direction from the target.
    ///
    /// Returns `true` while the interpolation is still in flight. Within the
    /// threshold the radius snaps to the target and the zoom stops emitting
    /// position updates.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.zooming {
            return false;
        }

        let diff = self.zoom_target - self.radius;
        if diff.abs() < self.settings.zoom_threshold {
            self.radius = self.zoom_target;
            self.zooming = false;
            kolmio_debug!("orbit: Zoom finished at distance {:.3}", self.radius);
            return false;
        }

        self.radius += diff * self.settings.zoom_lerp;
        let direction = (camera.position - self.target).normalized();
        camera.position = self.target + direction * self.radius;
        camera.target = self.target;
        true
    }

    /// Resynchronizes the radius after the camera was moved by something else
    /// than this controller, e.g. a keyboard dolly.
    pub fn sync_radius(&mut self, camera: &Camera) {
        let distance = (camera.position - self.target).len();
        if (distance - self.radius).abs() > self.settings.resync_threshold {
            self.radius = distance;
            if !self.zooming {
                self.zoom_target = distance;
            }
            kolmio_debug!("orbit: Distance resynced to {:.3}", self.radius);
        }
    }
}
