// src/graph/network.rs
//! Built-in 12-page academic website network.

use super::{Graph, GraphBuilder};
use crate::error::Result;

/// Pages and their outgoing links, in node-index order.
///
/// `Alumni` is the only dead end.
pub const ACADEMIC_LINKS: &[(&str, &[&str])] = &[
    (
        "Homepage",
        &["CS_Dept", "Math_Dept", "Library", "Course_Portal", "Admissions"],
    ),
    ("CS_Dept", &["Homepage", "Data_Science", "Research", "Faculty"]),
    ("Math_Dept", &["Homepage", "Linear_Algebra", "Research", "Faculty"]),
    ("Library", &["Homepage", "Course_Portal", "Research"]),
    (
        "Course_Portal",
        &["Homepage", "Linear_Algebra", "Data_Science", "Student_Resources"],
    ),
    (
        "Linear_Algebra",
        &["Math_Dept", "Course_Portal", "Data_Science", "Student_Resources"],
    ),
    (
        "Data_Science",
        &["CS_Dept", "Course_Portal", "Linear_Algebra", "Student_Resources"],
    ),
    ("Student_Resources", &["Homepage", "Library", "Course_Portal"]),
    ("Research", &["Homepage", "CS_Dept", "Math_Dept", "Faculty"]),
    ("Faculty", &["Homepage", "CS_Dept", "Math_Dept", "Research"]),
    ("Admissions", &["Homepage", "CS_Dept", "Math_Dept", "Alumni"]),
    ("Alumni", &[]),
];

/// Builds the academic network.
///
/// # Errors
/// Never fails for the built-in table; the `Result` mirrors every other
/// graph constructor.
pub fn academic_network() -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    for (page, _) in ACADEMIC_LINKS {
        builder.get_or_create_node(page);
    }
    for (page, targets) in ACADEMIC_LINKS {
        builder.link_all(page, targets);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let g = academic_network().unwrap();
        assert_eq!(g.len(), 12);
        assert_eq!(g.link_count(), 43);
        assert_eq!(g.name(0), Some("Homepage"));
        assert_eq!(g.name(11), Some("Alumni"));
    }

    #[test]
    fn test_alumni_is_only_dead_end() {
        let g = academic_network().unwrap();
        assert_eq!(g.dead_ends(), vec![11]);
    }

    #[test]
    fn test_homepage_in_links() {
        let g = academic_network().unwrap();
        assert_eq!(g.in_degree(0), 8);
        for src in ["CS_Dept", "Math_Dept", "Library", "Course_Portal", "Admissions"] {
            assert!(g.has_link(g.index_of(src).unwrap(), 0), "{src} -> Homepage");
        }
    }
}
