#[cfg(test)]
mod tests {
    use kolmio::{math::Point3, model};

    #[test]
    fn parses_vertices_and_faces() {
        let source = "\
v 0 0 0
v 1.5 2 -3
v 0 1 0
f 1 2 3
";
        let data = model::parse(source);
        assert_eq!(data.vertices.len(), 3);
        assert_eq!(data.vertices[1], Point3::new(1.5, 2.0, -3.0));
        // Indices are 1-based in the format
        assert_eq!(data.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn unrecognized_lines_are_skipped() {
        let source = "\
# comment
v 0 0 0
vt 0.5 0.5
v 1 0 0

v 0 1 0
o some_object
f 1 2 3
";
        let data = model::parse(source);
        assert_eq!(data.vertices.len(), 3);
        assert_eq!(data.faces.len(), 1);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let source = "\
v 0 0
v a b c
v 1 2 3
f 1 1
f 0 1 1
f x y z
";
        let data = model::parse(source);
        // Only the complete vertex survives; a zero face index cannot be
        // 1-based and the short and garbled faces are dropped
        assert_eq!(data.vertices.len(), 1);
        assert!(data.faces.is_empty());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(model::load(std::path::Path::new("/nonexistent/model.obj")).is_err());
    }
}
