//! Document link graph
//!
//! A [`LinkGraph`] maps every node to the set of nodes it links to. Graphs are
//! assembled through [`GraphBuilder`], which drops self links and links whose
//! target is not itself a node, so every retained edge stays inside the graph.

mod crawler;
mod link_extractor;

pub use crawler::{crawl, CrawlOptions};
pub use link_extractor::{extract_links, DocumentLink, LinkType};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// Requirements on node identifiers: opaque, comparable and hashable labels
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeId for T {}

/// Immutable directed link graph
///
/// Nodes are stored in ascending identifier order and addressed internally by
/// a dense index. Predecessor lists are precomputed so the iterative
/// estimator can sum over incoming links without scanning the whole graph.
#[derive(Debug, Clone)]
pub struct LinkGraph<N: NodeId> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    out_links: Vec<Vec<usize>>,
    in_links: Vec<Vec<usize>>,
}

impl<N: NodeId> Default for LinkGraph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            out_links: Vec::new(),
            in_links: Vec::new(),
        }
    }
}

impl<N: NodeId> LinkGraph<N> {
    /// Build a graph from `(node, out-links)` pairs
    ///
    /// Every listed source becomes a node. Targets that are not sources, and
    /// self links, are dropped.
    pub fn from_links<I, L>(pages: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        L: IntoIterator<Item = N>,
    {
        let mut builder = GraphBuilder::new();
        for (page, links) in pages {
            builder.add_node(page.clone());
            for link in links {
                builder.add_link(page.clone(), link);
            }
        }
        builder.build()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in ascending order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Out-neighbors of `node` in ascending order, or `None` if the node is unknown
    pub fn out_links(&self, node: &N) -> Option<Vec<&N>> {
        let idx = self.index_of(node)?;
        Some(self.out_links[idx].iter().map(|&j| &self.nodes[j]).collect())
    }

    pub fn out_degree(&self, node: &N) -> Option<usize> {
        self.index_of(node).map(|idx| self.out_links[idx].len())
    }

    /// Whether `node` has no outgoing links
    pub fn is_sink(&self, node: &N) -> Option<bool> {
        self.out_degree(node).map(|degree| degree == 0)
    }

    /// All sinks in ascending order
    pub fn sinks(&self) -> Vec<&N> {
        self.sink_indices().map(|idx| &self.nodes[idx]).collect()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.out_links.iter().map(Vec::len).sum()
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub(crate) fn successors(&self, idx: usize) -> &[usize] {
        &self.out_links[idx]
    }

    pub(crate) fn predecessors(&self, idx: usize) -> &[usize] {
        &self.in_links[idx]
    }

    pub(crate) fn sink_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.out_links
            .iter()
            .enumerate()
            .filter(|(_, links)| links.is_empty())
            .map(|(idx, _)| idx)
    }
}

/// Incremental graph builder
///
/// Links may be added before their target is known to be a node; dangling
/// targets are resolved (and dropped) in [`GraphBuilder::build`].
#[derive(Debug, Clone)]
pub struct GraphBuilder<N: NodeId> {
    links: BTreeMap<N, BTreeSet<N>>,
}

impl<N: NodeId> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self {
            links: BTreeMap::new(),
        }
    }
}

impl<N: NodeId> GraphBuilder<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node (no-op if already present)
    pub fn add_node(&mut self, node: N) {
        self.links.entry(node).or_default();
    }

    /// Record a link; `from` becomes a node, `to` must become one before `build`
    pub fn add_link(&mut self, from: N, to: N) {
        self.links.entry(from).or_default().insert(to);
    }

    pub fn node_count(&self) -> usize {
        self.links.len()
    }

    /// Freeze into a [`LinkGraph`], dropping self links and dangling links
    pub fn build(self) -> LinkGraph<N> {
        let nodes: Vec<N> = self.links.keys().cloned().collect();
        let index: HashMap<N, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.clone(), idx))
            .collect();

        let mut out_links = vec![Vec::new(); nodes.len()];
        let mut in_links = vec![Vec::new(); nodes.len()];
        let mut dropped = 0usize;

        for (source, (_, targets)) in self.links.iter().enumerate() {
            for target in targets {
                match index.get(target) {
                    Some(&t) if t != source => {
                        out_links[source].push(t);
                        in_links[t].push(source);
                    }
                    _ => dropped += 1,
                }
            }
        }

        if dropped > 0 {
            tracing::debug!("Dropped {} self or dangling links", dropped);
        }

        LinkGraph {
            nodes,
            index,
            out_links,
            in_links,
        }
    }
}
