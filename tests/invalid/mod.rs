//! # Networks that can't be imported
//!
//! Importing should fail without producing a network.
use std::path::{Path, PathBuf};

use remcf::data::network::residual::{EdgeError, Graph};
use remcf::io::error::Import;
use remcf::io::import;

fn import_file(name: &str) -> Result<Graph<i32>, Import> {
    let path = Path::new(file!()).parent().unwrap().join("problem_files").join(name).with_extension("txt");
    import(&path)
}

#[test]
fn test_truncated() {
    assert!(matches!(import_file("truncated"), Err(Import::Parse(error)) if error.line_number() == Some(3)));
}

#[test]
fn test_out_of_range() {
    assert!(matches!(
        import_file("out_of_range"),
        Err(Import::Edge { line: 3, edge: EdgeError::OutOfRange { vertex: 4, vertex_count: 4 } }),
    ));
}

#[test]
fn test_vertex_count() {
    assert!(matches!(import_file("vertex_count"), Err(Import::Parse(error)) if error.line_number() == Some(1)));
}

#[test]
fn test_too_many_vertices() {
    assert!(matches!(import_file("too_many_vertices"), Err(Import::Parse(error)) if error.line_number() == Some(1)));
}

#[test]
fn test_missing_file() {
    let path = PathBuf::from("does/not/exist.txt");
    assert!(matches!(import::<i32>(&path), Err(Import::IO(_))));
}
