//! Probability distributions over graph nodes

use crate::graph::{LinkGraph, NodeId};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A value for every node of a graph, in ascending node order
///
/// Distributions are always created from a graph's full node list, so every
/// node is present before any value is accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<N: NodeId> {
    nodes: Vec<N>,
    values: Vec<f64>,
}

impl<N: NodeId> Distribution<N> {
    /// Pair the graph's nodes with dense values indexed like the graph
    pub(crate) fn from_dense(graph: &LinkGraph<N>, values: Vec<f64>) -> Self {
        debug_assert_eq!(graph.len(), values.len());
        Self {
            nodes: graph.nodes().to_vec(),
            values,
        }
    }

    /// Uniform distribution over every node of `graph`
    pub fn uniform(graph: &LinkGraph<N>) -> Self {
        let n = graph.len();
        Self::from_dense(graph, vec![1.0 / n as f64; n])
    }

    /// Value for `node`, or `None` if the node is not part of the distribution
    pub fn get(&self, node: &N) -> Option<f64> {
        self.nodes
            .binary_search(node)
            .ok()
            .map(|idx| self.values[idx])
    }

    /// `(node, value)` pairs in ascending node order
    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> + '_ {
        self.nodes.iter().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Largest absolute per-node difference to `other`
    ///
    /// Nodes missing from `other` count as zero.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.iter()
            .map(|(node, value)| (value - other.get(node).unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }

    /// Top `n` nodes by value, ties broken by node order
    pub fn top_n(&self, n: usize) -> Vec<(&N, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    pub(crate) fn values(&self) -> &[f64] {
        &self.values
    }
}

impl<N: NodeId + Serialize> Serialize for Distribution<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (node, value) in self.iter() {
            map.serialize_entry(node, &value)?;
        }
        map.end()
    }
}
