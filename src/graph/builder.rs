// src/graph/builder.rs
//! Incremental graph construction by node name.

use std::collections::HashMap;

use nalgebra::DMatrix;

use super::Graph;
use crate::error::Result;

/// A mutable builder that assigns node indices in insertion order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    name_to_id: HashMap<String, usize>,
    names: Vec<String>,
    links: Vec<(usize, usize)>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for `name`, creating the node if it is new.
    pub fn get_or_create_node(&mut self, name: &str) -> usize {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.names.len();
        self.name_to_id.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Records a directed link. Repeated links collapse to one.
    pub fn add_link(&mut self, from: usize, to: usize) {
        self.links.push((from, to));
    }

    /// Records a link between two named nodes, creating either as needed.
    pub fn link(&mut self, from: &str, to: &str) {
        let from = self.get_or_create_node(from);
        let to = self.get_or_create_node(to);
        self.add_link(from, to);
    }

    /// Records every link from `from` to each of `targets`.
    pub fn link_all<S: AsRef<str>>(&mut self, from: &str, targets: &[S]) {
        let from = self.get_or_create_node(from);
        for target in targets {
            let to = self.get_or_create_node(target.as_ref());
            self.add_link(from, to);
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Freezes the builder into a validated [`Graph`].
    ///
    /// # Errors
    /// Returns `EmptyGraph` when no node was added.
    pub fn build(self) -> Result<Graph> {
        let n = self.names.len();
        let mut adjacency = DMatrix::zeros(n, n);
        for (from, to) in self.links {
            adjacency[(to, from)] = 1.0;
        }
        Graph::new(self.names, adjacency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankError;

    #[test]
    fn test_node_ids_are_stable() {
        let mut b = GraphBuilder::new();
        let a = b.get_or_create_node("a");
        let c = b.get_or_create_node("c");
        assert_eq!(b.get_or_create_node("a"), a);
        assert_eq!((a, c), (0, 1));
        assert_eq!(b.node_count(), 2);
    }

    #[test]
    fn test_build_places_links_in_columns() {
        let mut b = GraphBuilder::new();
        b.link_all("hub", &["s1", "s2"]);
        b.link("s1", "hub");
        b.link("s1", "hub");
        let g = b.build().unwrap();
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.out_degree(1), 1);
        assert_eq!(g.in_degree(0), 1);
        assert_eq!(g.dead_ends(), vec![2]);
    }

    #[test]
    fn test_empty_builder_is_rejected() {
        let err = GraphBuilder::new().build().unwrap_err();
        assert!(matches!(err, RankError::EmptyGraph));
    }
}
