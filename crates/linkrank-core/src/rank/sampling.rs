//! Monte-Carlo PageRank by random-surfer sampling

use super::model::transition_row;
use super::weighted::{choose_uniform, WeightedChoice};
use super::{ensure_non_empty, validate_damping, Distribution, DEFAULT_DAMPING, DEFAULT_SAMPLES};
use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, NodeId};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Sampling PageRank estimator
///
/// Simulates a single walk of `samples` steps: the first page is chosen
/// uniformly, each following page is drawn from the transition model of the
/// current one. The estimate for a page is the fraction of steps spent on it.
#[derive(Debug, Clone)]
pub struct SamplingEstimator {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Walk length, counting the first page
    pub samples: usize,
    /// Seed for a reproducible walk; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SamplingEstimator {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

impl SamplingEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Run the walk with a generator seeded from `seed` (or the OS)
    pub fn run<N: NodeId>(&self, graph: &LinkGraph<N>) -> Result<Distribution<N>> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.run_with_rng(graph, &mut rng)
    }

    /// Run the walk drawing from `rng`
    pub fn run_with_rng<N: NodeId, R: Rng + ?Sized>(
        &self,
        graph: &LinkGraph<N>,
        rng: &mut R,
    ) -> Result<Distribution<N>> {
        ensure_non_empty(graph)?;
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(LinkRankError::InvalidParameter(
                "sample count must be positive".to_string(),
            ));
        }

        let n = graph.len();
        let mut tables: Vec<Option<WeightedChoice>> = vec![None; n];
        let mut visits = vec![0u64; n];

        let mut current = choose_uniform(rng, n)?;
        visits[current] += 1;

        for _ in 1..self.samples {
            let table = match tables[current].take() {
                Some(table) => table,
                None => WeightedChoice::new(&transition_row(graph, current, self.damping))?,
            };
            let next = table.sample(rng);
            tables[current] = Some(table);

            visits[next] += 1;
            current = next;
        }

        tracing::debug!(
            "Sampled {} steps over {} pages ({} transition tables built)",
            self.samples,
            n,
            tables.iter().filter(|t| t.is_some()).count()
        );

        let total = self.samples as f64;
        let ranks = visits.into_iter().map(|v| v as f64 / total).collect();
        Ok(Distribution::from_dense(graph, ranks))
    }
}

/// Estimate PageRank from a walk of `sample_count` steps
pub fn sample<N: NodeId>(
    graph: &LinkGraph<N>,
    damping: f64,
    sample_count: usize,
) -> Result<Distribution<N>> {
    SamplingEstimator::new()
        .with_damping(damping)
        .with_samples(sample_count)
        .run(graph)
}
