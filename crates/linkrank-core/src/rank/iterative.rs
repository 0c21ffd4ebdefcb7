//! Iterative PageRank by synchronous relaxation
//!
//! Starting from the uniform vector, every pass computes
//!
//! > new(p) = (1 − d) / N + d · Σ_{q → p} old(q) / outdeg(q)
//!
//! from a single snapshot of the previous ranks. Two buffers are kept, one
//! read and one written per pass, then swapped. Iteration stops once the
//! largest per-node change is strictly below the threshold.
//!
//! # Sinks
//!
//! A sink never appears among the predecessors of any page, so under the
//! default [`SinkMode::Ignore`] its rank leaks out of the system and the raw
//! ranks may sum to less than one. [`SinkMode::Redistribute`] opts into the
//! textbook variant that spreads sink rank uniformly, adding
//! d · sinkMass / N to every page each pass.
//!
//! The converged vector is normalized to sum to one unless normalization is
//! disabled; [`IterationOutcome::raw_mass`] reports the sum before scaling.

use super::{ensure_non_empty, validate_damping, Distribution};
use super::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD};
use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, NodeId};
use serde::{Deserialize, Serialize};

/// Deviation of the raw rank sum from one that is reported when rescaling
const MASS_TOLERANCE: f64 = 1e-9;

/// How rank held by sinks is treated during relaxation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkMode {
    /// Sink rank is not passed on
    #[default]
    Ignore,
    /// Sink rank is spread uniformly over all pages
    Redistribute,
}

/// Result of a converged run
#[derive(Debug, Clone)]
pub struct IterationOutcome<N: NodeId> {
    /// Final ranks
    pub ranks: Distribution<N>,
    /// Number of relaxation passes performed
    pub iterations: usize,
    /// Largest per-node change in the last pass
    pub delta: f64,
    /// Sum of the ranks before normalization
    pub raw_mass: f64,
}

/// Iterative PageRank estimator
#[derive(Debug, Clone)]
pub struct IterativeEstimator {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the largest per-node change
    pub threshold: f64,
    /// Maximum number of passes before giving up
    pub max_iterations: usize,
    pub sink_mode: SinkMode,
    /// Scale the converged ranks to sum to one
    pub normalize: bool,
}

impl Default for IterativeEstimator {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            sink_mode: SinkMode::Ignore,
            normalize: true,
        }
    }
}

impl IterativeEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_sink_mode(mut self, sink_mode: SinkMode) -> Self {
        self.sink_mode = sink_mode;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if !(self.threshold > 0.0 && self.threshold.is_finite()) {
            return Err(LinkRankError::InvalidParameter(format!(
                "convergence threshold must be positive, got {}",
                self.threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidParameter(
                "max iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Relax until convergence
    ///
    /// Fails with [`LinkRankError::DidNotConverge`] if the threshold is not
    /// reached within `max_iterations` passes.
    pub fn run<N: NodeId>(&self, graph: &LinkGraph<N>) -> Result<IterationOutcome<N>> {
        ensure_non_empty(graph)?;
        self.validate()?;

        let n = graph.len();
        let mut ranks = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations {
            iterations += 1;
            delta = self.relax(graph, &ranks, &mut next);
            std::mem::swap(&mut ranks, &mut next);

            tracing::trace!("Pass {}: max change {:e}", iterations, delta);

            if delta < self.threshold {
                return Ok(self.finish(graph, ranks, iterations, delta));
            }
        }

        tracing::warn!(
            "PageRank iteration stopped after {} passes with max change {:e}",
            iterations,
            delta
        );
        Err(LinkRankError::DidNotConverge { iterations, delta })
    }

    /// Perform one relaxation pass on `previous`
    ///
    /// `previous` must be keyed by exactly the nodes of `graph`.
    pub fn step<N: NodeId>(
        &self,
        graph: &LinkGraph<N>,
        previous: &Distribution<N>,
    ) -> Result<Distribution<N>> {
        ensure_non_empty(graph)?;
        self.validate()?;

        if previous.len() != graph.len()
            || previous.iter().zip(graph.nodes()).any(|((a, _), b)| a != b)
        {
            return Err(LinkRankError::InvalidInput(
                "distribution does not match graph nodes".to_string(),
            ));
        }

        let mut next = vec![0.0; graph.len()];
        self.relax(graph, previous.values(), &mut next);
        Ok(Distribution::from_dense(graph, next))
    }

    /// One synchronous pass from `prev` into `next`; returns the largest change
    fn relax<N: NodeId>(&self, graph: &LinkGraph<N>, prev: &[f64], next: &mut [f64]) -> f64 {
        let n = prev.len() as f64;

        let sink_share = match self.sink_mode {
            SinkMode::Ignore => 0.0,
            SinkMode::Redistribute => {
                let sink_mass: f64 = graph.sink_indices().map(|s| prev[s]).sum();
                self.damping * sink_mass / n
            }
        };
        let base = (1.0 - self.damping) / n + sink_share;

        let mut delta: f64 = 0.0;
        for (page, slot) in next.iter_mut().enumerate() {
            // Every predecessor has at least one out-link.
            let inflow: f64 = graph
                .predecessors(page)
                .iter()
                .map(|&q| prev[q] / graph.successors(q).len() as f64)
                .sum();

            *slot = base + self.damping * inflow;
            delta = delta.max((*slot - prev[page]).abs());
        }

        delta
    }

    fn finish<N: NodeId>(
        &self,
        graph: &LinkGraph<N>,
        mut ranks: Vec<f64>,
        iterations: usize,
        delta: f64,
    ) -> IterationOutcome<N> {
        let raw_mass: f64 = ranks.iter().sum();

        tracing::info!(
            "PageRank converged after {} passes (max change {:e}, mass {:.6})",
            iterations,
            delta,
            raw_mass
        );

        if self.normalize && raw_mass > 0.0 {
            if mass_leaked(raw_mass) {
                tracing::warn!(
                    "Rescaling PageRank by 1/{:.6}: rank held by pages without links was not \
                     redistributed, so scaled ranks are not a fixed point of the iteration",
                    raw_mass
                );
            }
            for rank in &mut ranks {
                *rank /= raw_mass;
            }
        }

        IterationOutcome {
            ranks: Distribution::from_dense(graph, ranks),
            iterations,
            delta,
            raw_mass,
        }
    }
}

/// Whether a converged vector lost (or gained) mass beyond rounding noise
fn mass_leaked(raw_mass: f64) -> bool {
    (raw_mass - 1.0).abs() > MASS_TOLERANCE
}

/// Estimate PageRank by iterating to the default threshold
pub fn iterate<N: NodeId>(graph: &LinkGraph<N>, damping: f64) -> Result<Distribution<N>> {
    IterativeEstimator::new()
        .with_damping(damping)
        .run(graph)
        .map(|outcome| outcome.ranks)
}
