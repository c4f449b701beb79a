// tests/unit_network_file.rs
use std::fs;

use linkrank_core::graph::file::{self, NetworkFile};
use linkrank_core::RankError;

const SMALL: &str = r#"
[[page]]
name = "Home"
links = ["Docs", "Blog"]

[[page]]
name = "Docs"
links = ["Home"]

[[page]]
name = "Blog"
"#;

#[test]
fn test_parse_preserves_page_order() {
    let g = NetworkFile::parse(SMALL).unwrap().into_graph().unwrap();
    assert_eq!(g.names(), &["Home", "Docs", "Blog"]);
    assert!(g.has_link(0, 1));
    assert!(g.has_link(0, 2));
    assert!(g.has_link(1, 0));
    assert_eq!(g.dead_ends(), vec![2]);
    assert_eq!(g.link_count(), 3);
}

#[test]
fn test_unknown_target() {
    let text = "[[page]]\nname = \"A\"\nlinks = [\"B\"]\n";
    let err = NetworkFile::parse(text).unwrap().into_graph().unwrap_err();
    assert!(matches!(err, RankError::UnknownNode(ref n) if n == "B"));
}

#[test]
fn test_duplicate_page() {
    let text = "[[page]]\nname = \"A\"\n\n[[page]]\nname = \"A\"\n";
    let err = NetworkFile::parse(text).unwrap().into_graph().unwrap_err();
    assert!(matches!(err, RankError::DuplicateNode(ref n) if n == "A"));
}

#[test]
fn test_empty_network() {
    let err = NetworkFile::parse("").unwrap().into_graph().unwrap_err();
    assert!(matches!(err, RankError::EmptyGraph));
}

#[test]
fn test_load_from_disk() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("site.toml");
    fs::write(&path, SMALL).unwrap();
    let g = file::load(&path).unwrap();
    assert_eq!(g.len(), 3);
}

#[test]
fn test_load_missing_file() {
    let d = tempfile::tempdir().unwrap();
    let err = file::load(&d.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, RankError::Io { .. }));
}
