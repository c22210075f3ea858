#[cfg(test)]
mod tests {
    use kolmio::{
        math::{Point3, Vec3},
        mesh::Mesh,
        pipeline::{RasterSettings, Rasterizer},
        scene::Scene,
    };

    // A triangle in the xy-plane wound so its normal faces negative z,
    // towards the default camera side
    fn facing_triangle(name: &str) -> Mesh {
        Mesh::new(
            name,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    // The classic twelve-triangle cube, centered on the origin with unit
    // sides, wound so every normal points out of the cube
    fn unit_cube() -> Mesh {
        let vertices = vec![
            Point3::new(-0.5, -0.5, -0.5),
            Point3::new(-0.5, 0.5, -0.5),
            Point3::new(0.5, 0.5, -0.5),
            Point3::new(0.5, -0.5, -0.5),
            Point3::new(-0.5, -0.5, 0.5),
            Point3::new(-0.5, 0.5, 0.5),
            Point3::new(0.5, 0.5, 0.5),
            Point3::new(0.5, -0.5, 0.5),
        ];
        let faces = vec![
            // south
            [0, 1, 2],
            [0, 2, 3],
            // east
            [3, 2, 6],
            [3, 6, 7],
            // north
            [7, 6, 5],
            [7, 5, 4],
            // west
            [4, 5, 1],
            [4, 1, 0],
            // top
            [1, 5, 6],
            [1, 6, 2],
            // bottom
            [7, 4, 0],
            [7, 0, 3],
        ];
        Mesh::new("cube", vertices, faces).unwrap()
    }

    fn head_on_scene() -> Scene {
        let mut scene = Scene::default();
        scene.camera.position = Point3::new(0.0, 0.0, -10.0);
        scene.camera.target = Point3::zeros();
        scene
    }

    #[test]
    fn edge_on_face_is_culled() {
        // Normal is exactly perpendicular to the camera ray: dot == 0 culls
        let mut scene = head_on_scene();
        scene.add_object(
            Mesh::new(
                "edge-on",
                vec![
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(0.0, 0.0, 1.0),
                    Point3::new(0.0, 1.0, 0.0),
                ],
                vec![[0, 1, 2]],
            )
            .unwrap(),
        );

        let rasterizer = Rasterizer::new(RasterSettings::default());
        assert!(rasterizer.project_scene(&scene).is_empty());

        // Nudged off the camera axis the same face becomes visible
        scene.objects[0].set_position(Some(0.1), None, None);
        assert_eq!(rasterizer.project_scene(&scene).len(), 1);
    }

    #[test]
    fn back_face_is_culled() {
        let mut scene = head_on_scene();
        let mut mesh = facing_triangle("away");
        // Turned away from the camera
        mesh.set_rotation(None, Some(180.0), None);
        scene.add_object(mesh);

        let rasterizer = Rasterizer::new(RasterSettings::default());
        assert!(rasterizer.project_scene(&scene).is_empty());
    }

    #[test]
    fn faces_come_out_far_to_near() {
        let mut scene = head_on_scene();

        let mut far = facing_triangle("far");
        far.set_position(Some(-2.0), None, Some(8.0));
        let mut mid = facing_triangle("mid");
        mid.set_position(None, None, Some(5.0));
        let mut near = facing_triangle("near");
        near.set_position(Some(2.0), None, Some(2.0));

        // Insert out of depth order
        scene.add_object(mid);
        scene.add_object(near);
        scene.add_object(far);

        let rasterizer = Rasterizer::new(RasterSettings::default());
        let faces = rasterizer.project_scene(&scene);
        assert_eq!(faces.len(), 3);

        // Depth keys are ordered back to front
        assert!(faces[0].mean_depth() <= faces[1].mean_depth());
        assert!(faces[1].mean_depth() <= faces[2].mean_depth());

        // The screen flip mirrors x, so the face at negative world x lands on
        // the right half of the screen. Drawn first means farthest.
        let width = RasterSettings::default().width as f32;
        let centroid_x =
            |i: usize| (faces[i].verts[0].x + faces[i].verts[1].x + faces[i].verts[2].x) / 3.0;
        assert!(centroid_x(0) > width / 2.0, "far face should be drawn first");
        assert!(centroid_x(2) < width / 2.0, "near face should be drawn last");
    }

    #[test]
    fn intensity_is_flat_and_clamped() {
        let mut scene = head_on_scene();
        scene.add_object(facing_triangle("lit"));
        // Light shining straight at the face from the camera side
        scene.light.position = Vec3::new(0.0, 0.0, -3.0);

        let rasterizer = Rasterizer::new(RasterSettings::default());
        let faces = rasterizer.project_scene(&scene);
        assert_eq!(faces.len(), 1);

        // Full alignment: ((1 + 1) / 2) * 230
        assert!((faces[0].intensity - 230.0).abs() < 1e-3);

        // Opposed light bottoms out at zero
        scene.light.position = Vec3::new(0.0, 0.0, 3.0);
        let faces = rasterizer.project_scene(&scene);
        assert!(faces[0].intensity.abs() < 1e-3);
        assert!(faces[0].intensity >= 0.0);
    }

    #[test]
    fn unit_cube_head_on() {
        // A unit cube at the origin, camera at (0,0,-10) looking at it with a
        // 45 degree vertical fov and 0.1/1000 planes. The cube is turned so
        // three of its sides strictly face the camera.
        let mut scene = head_on_scene();
        let mut cube = unit_cube();
        cube.set_rotation(Some(35.0), Some(35.0), None);
        scene.add_object(cube);

        let settings = RasterSettings::default();
        assert_eq!(settings.fov, 45.0);
        assert_eq!(settings.znear, 0.1);
        assert_eq!(settings.zfar, 1000.0);

        let rasterizer = Rasterizer::new(settings);
        let faces = rasterizer.project_scene(&scene);

        // Exactly six of the twelve triangles survive culling
        assert_eq!(faces.len(), 6);

        // Every projected vertex lands on the screen
        let (width, height) = (settings.width as f32, settings.height as f32);
        for face in &faces {
            for vert in &face.verts {
                assert!(vert.x >= 0.0 && vert.x <= width, "x out of range: {}", vert.x);
                assert!(vert.y >= 0.0 && vert.y <= height, "y out of range: {}", vert.y);
            }
        }

        // Painter order puts the frontmost faces last
        for pair in faces.windows(2) {
            assert!(pair[0].mean_depth() <= pair[1].mean_depth());
        }
    }

    #[test]
    fn projection_is_a_pure_function_of_the_scene() {
        let mut scene = head_on_scene();
        let mut cube = unit_cube();
        cube.set_rotation(Some(20.0), Some(-40.0), None);
        scene.add_object(cube);

        let rasterizer = Rasterizer::new(RasterSettings::default());
        let first = rasterizer.project_scene(&scene);
        let second = rasterizer.project_scene(&scene);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.intensity, b.intensity);
            for (va, vb) in a.verts.iter().zip(b.verts.iter()) {
                assert_eq!(va, vb);
            }
        }
    }
}
