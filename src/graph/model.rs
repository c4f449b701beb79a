// src/graph/model.rs
//! The directed link graph: named nodes over a 0/1 adjacency matrix.

use std::collections::HashSet;

use nalgebra::DMatrix;

use crate::error::{RankError, Result};

/// A directed graph over a fixed, finite set of named nodes.
///
/// `adjacency[(i, j)] == 1.0` means node `j` links to node `i`, so column `j`
/// lists the outgoing links of `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    names: Vec<String>,
    adjacency: DMatrix<f64>,
}

impl Graph {
    /// Creates a graph from node names and an adjacency matrix.
    ///
    /// Non-zero entries are treated as links and stored as `1.0`.
    ///
    /// # Errors
    /// Returns an error if the matrix is empty or not square, contains a
    /// negative or non-finite entry, or if the names don't match the node
    /// count or repeat.
    pub fn new(names: Vec<String>, adjacency: DMatrix<f64>) -> Result<Self> {
        let (rows, cols) = adjacency.shape();
        if rows != cols {
            return Err(RankError::NotSquare { rows, cols });
        }
        if rows == 0 {
            return Err(RankError::EmptyGraph);
        }
        if names.len() != rows {
            return Err(RankError::NameCountMismatch {
                expected: rows,
                actual: names.len(),
            });
        }
        check_unique(&names)?;

        let mut binary = DMatrix::zeros(rows, cols);
        for col in 0..cols {
            for row in 0..rows {
                let value = adjacency[(row, col)];
                if !value.is_finite() {
                    return Err(RankError::NonFiniteEntry { row, col });
                }
                if value < 0.0 {
                    return Err(RankError::NegativeEntry { row, col, value });
                }
                if value != 0.0 {
                    binary[(row, col)] = 1.0;
                }
            }
        }

        Ok(Self {
            names,
            adjacency: binary,
        })
    }

    /// Creates a graph from row-major adjacency rows.
    ///
    /// # Errors
    /// Returns an error if any row length differs from the row count, or
    /// for any reason listed on [`Graph::new`].
    pub fn from_rows(names: Vec<String>, rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(RankError::NotSquare {
                rows: n,
                cols: bad.len(),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::new(names, DMatrix::from_row_slice(n, n, &flat))
    }

    /// Creates a graph whose nodes are named by their index.
    ///
    /// # Errors
    /// See [`Graph::new`].
    pub fn unnamed(adjacency: DMatrix<f64>) -> Result<Self> {
        let names = (0..adjacency.nrows()).map(|i| i.to_string()).collect();
        Self::new(names, adjacency)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Looks up a node index by display name.
    ///
    /// # Errors
    /// Returns `UnknownNode` if no node carries that name.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| RankError::UnknownNode(name.to_string()))
    }

    #[must_use]
    pub fn adjacency(&self) -> &DMatrix<f64> {
        &self.adjacency
    }

    /// True if `from` links to `to`.
    #[must_use]
    pub fn has_link(&self, from: usize, to: usize) -> bool {
        from < self.len() && to < self.len() && self.adjacency[(to, from)] != 0.0
    }

    /// Number of links pointing at `node` (row sum).
    #[must_use]
    pub fn in_degree(&self, node: usize) -> usize {
        count_links(self.adjacency.row(node).iter())
    }

    /// Number of links leaving `node` (column sum).
    #[must_use]
    pub fn out_degree(&self, node: usize) -> usize {
        count_links(self.adjacency.column(node).iter())
    }

    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        (0..self.len()).map(|i| self.in_degree(i)).collect()
    }

    #[must_use]
    pub fn out_degrees(&self) -> Vec<usize> {
        (0..self.len()).map(|i| self.out_degree(i)).collect()
    }

    /// Nodes with no outgoing links.
    #[must_use]
    pub fn dead_ends(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.out_degree(i) == 0).collect()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        count_links(self.adjacency.iter())
    }

    /// Links divided by `N²`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        let n = self.len() as f64;
        self.link_count() as f64 / (n * n)
    }
}

fn count_links<'a>(values: impl Iterator<Item = &'a f64>) -> usize {
    values.filter(|v| **v != 0.0).count()
}

fn check_unique(names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(RankError::DuplicateNode(name.clone()));
        }
    }
    Ok(())
}
