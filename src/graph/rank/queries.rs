// src/graph/rank/queries.rs
//! Named views over a rank vector.

use serde::Serialize;

use super::vector::RankVector;
use crate::graph::Graph;

/// One row of a ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    /// 1-based position.
    pub position: usize,
    pub index: usize,
    pub name: String,
    pub score: f64,
    pub percentage: f64,
}

/// All nodes ordered by descending score.
#[must_use]
pub fn ranked_nodes(graph: &Graph, ranks: &RankVector) -> Vec<RankedNode> {
    ranks
        .ranking()
        .into_iter()
        .enumerate()
        .map(|(pos, index)| RankedNode {
            position: pos + 1,
            index,
            name: graph.name(index).unwrap_or_default().to_string(),
            score: ranks[index],
            percentage: ranks[index] * 100.0,
        })
        .collect()
}

/// 1-based position of `node` in the ranking, if present.
#[must_use]
pub fn position_of(ranks: &RankVector, node: usize) -> Option<usize> {
    ranks.ranking().iter().position(|&i| i == node).map(|p| p + 1)
}
