//! Random-surfer transition model

use super::{ensure_non_empty, validate_damping, Distribution};
use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, NodeId};

/// Probability distribution over the page visited after `current`
///
/// With probability `damping` the surfer follows one of the out-links of
/// `current` chosen uniformly; otherwise it jumps to a uniformly chosen page.
/// A sink has no links to follow, so its distribution is uniform over all
/// pages whatever the damping factor.
pub fn transition<N: NodeId>(
    graph: &LinkGraph<N>,
    current: &N,
    damping: f64,
) -> Result<Distribution<N>> {
    ensure_non_empty(graph)?;
    validate_damping(damping)?;

    let idx = graph
        .index_of(current)
        .ok_or_else(|| LinkRankError::NodeNotFound(format!("{:?}", current)))?;

    Ok(Distribution::from_dense(
        graph,
        transition_row(graph, idx, damping),
    ))
}

/// Dense transition probabilities out of node `idx`, indexed like the graph
pub(crate) fn transition_row<N: NodeId>(graph: &LinkGraph<N>, idx: usize, damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    let links = graph.successors(idx);

    if links.is_empty() {
        return vec![1.0 / n; graph.len()];
    }

    let mut row = vec![(1.0 - damping) / n; graph.len()];
    let follow = damping / links.len() as f64;
    for &target in links {
        row[target] += follow;
    }
    row
}
