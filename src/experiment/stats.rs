// src/experiment/stats.rs
//! Structural statistics and their correlation with rank.

use serde::Serialize;

use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageStats {
    pub name: String,
    pub in_degree: usize,
    pub out_degree: usize,
    pub dead_end: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub nodes: usize,
    pub links: usize,
    pub density: f64,
    pub pages: Vec<PageStats>,
}

impl NetworkSummary {
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        let pages = graph
            .names()
            .iter()
            .enumerate()
            .map(|(i, name)| PageStats {
                name: name.clone(),
                in_degree: graph.in_degree(i),
                out_degree: graph.out_degree(i),
                dead_end: graph.out_degree(i) == 0,
            })
            .collect();

        Self {
            nodes: graph.len(),
            links: graph.link_count(),
            density: graph.density(),
            pages,
        }
    }

    #[must_use]
    pub fn dead_ends(&self) -> Vec<&str> {
        self.pages
            .iter()
            .filter(|p| p.dead_end)
            .map(|p| p.name.as_str())
            .collect()
    }
}

/// Pearson correlation of two equally long samples.
///
/// Returns `None` for fewer than two points, mismatched lengths, or a
/// sample with zero variance.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn as_f64(values: &[usize]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_correlation() {
        let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance_is_none() {
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_mismatched_is_none() {
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
    }
}
