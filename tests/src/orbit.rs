#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use kolmio::{
        camera::Camera,
        math::{Point3, Vec2},
        orbit::{OrbitController, OrbitSettings},
    };

    fn camera_at(position: Point3<f32>) -> Camera {
        Camera {
            position,
            ..Camera::default()
        }
    }

    #[test]
    fn initializes_from_camera() {
        let camera = camera_at(Point3::new(0.0, 2.0, -10.0));
        let orbit = OrbitController::new(&camera, Point3::zeros(), OrbitSettings::default());

        assert_abs_diff_eq!(orbit.radius(), 104.0f32.sqrt(), epsilon = 1e-5);
        assert!(!orbit.is_zooming());
    }

    #[test]
    fn drag_preserves_radius() {
        let mut camera = camera_at(Point3::new(0.0, 2.0, -10.0));
        let mut orbit = OrbitController::new(&camera, Point3::zeros(), OrbitSettings::default());
        let radius = orbit.radius();

        for delta in [
            Vec2::new(120.0, -45.0),
            Vec2::new(-300.0, 80.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(-1.0, 700.0),
        ] {
            orbit.drag(delta, &mut camera);
            assert_abs_diff_eq!(
                (camera.position - camera.target).len(),
                radius,
                epsilon = 1e-3
            );
        }
        assert_eq!(orbit.radius(), radius);
    }

    #[test]
    fn drag_keeps_looking_at_the_target() {
        let target = Point3::new(1.0, 0.0, 2.0);
        let mut camera = camera_at(Point3::new(1.0, 0.0, -8.0));
        let mut orbit = OrbitController::new(&camera, target, OrbitSettings::default());

        orbit.drag(Vec2::new(55.0, -20.0), &mut camera);
        assert_abs_diff_eq!(camera.target, target);
    }

    #[test]
    fn elevation_is_clamped() {
        let mut camera = camera_at(Point3::new(0.0, 0.0, -10.0));
        let mut orbit = OrbitController::new(&camera, Point3::zeros(), OrbitSettings::default());

        orbit.drag(Vec2::new(0.0, 1e6), &mut camera);
        assert!(orbit.phi() < std::f32::consts::FRAC_PI_2);
        // Up stays usable, no pole flip
        assert!((camera.position - camera.target).normalized().y < 1.0);

        orbit.drag(Vec2::new(0.0, -1e7), &mut camera);
        assert!(orbit.phi() > -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn zoom_converges_and_stops() {
        let settings = OrbitSettings::default();
        let mut camera = camera_at(Point3::new(0.0, 0.0, -10.0));
        let mut orbit = OrbitController::new(&camera, Point3::zeros(), settings);

        orbit.wheel(-120.0);
        assert!(orbit.is_zooming());

        let mut steps = 0;
        while orbit.update(&mut camera) {
            steps += 1;
            assert!(steps < 1000, "zoom interpolation did not converge");
        }

        // Snapped to the target distance and quiescent
        assert!(!orbit.is_zooming());
        assert_abs_diff_eq!(
            (camera.position - camera.target).len(),
            orbit.radius(),
            epsilon = 2.0 * settings.zoom_threshold
        );

        let before = camera.position;
        assert!(!orbit.update(&mut camera));
        assert_eq!(camera.position, before);
    }

    #[test]
    fn zoom_target_is_clamped() {
        let settings = OrbitSettings::default();
        let mut camera = camera_at(Point3::new(0.0, 0.0, -10.0));
        let mut orbit = OrbitController::new(&camera, Point3::zeros(), settings);

        for _ in 0..100 {
            orbit.wheel(500.0);
        }
        while orbit.update(&mut camera) {}
        assert_abs_diff_eq!(orbit.radius(), settings.max_distance, epsilon = 1e-4);

        for _ in 0..100 {
            orbit.wheel(-500.0);
        }
        while orbit.update(&mut camera) {}
        assert_abs_diff_eq!(orbit.radius(), settings.min_distance, epsilon = 1e-4);
    }

    #[test]
    fn dolly_requires_resync() {
        let mut camera = camera_at(Point3::new(0.0, 0.0, -10.0));
        let mut orbit = OrbitController::new(&camera, Point3::zeros(), OrbitSettings::default());

        // External dolly towards the target
        let forward = (camera.target - camera.position).normalized();
        camera.position += forward * 3.0;

        // Without a resync the next drag snaps back to the stale radius
        let mut stale = orbit.clone();
        let mut snapped = camera;
        stale.drag(Vec2::new(5.0, 5.0), &mut snapped);
        assert_abs_diff_eq!(
            (snapped.position - snapped.target).len(),
            10.0,
            epsilon = 1e-3
        );

        // With a resync the new distance is kept
        orbit.sync_radius(&camera);
        orbit.drag(Vec2::new(5.0, 5.0), &mut camera);
        assert_abs_diff_eq!(
            (camera.position - camera.target).len(),
            7.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn small_drift_is_not_resynced() {
        let mut camera = camera_at(Point3::new(0.0, 0.0, -10.0));
        let mut orbit = OrbitController::new(&camera, Point3::zeros(), OrbitSettings::default());

        camera.position.z += 0.05;
        orbit.sync_radius(&camera);
        assert_eq!(orbit.radius(), 10.0);
    }
}
