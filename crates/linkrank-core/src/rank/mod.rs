//! PageRank estimation
//!
//! Two independent estimators of the random-surfer stationary distribution:
//!
//! - [`SamplingEstimator`] walks the graph with the [transition model](transition)
//!   and reports visit frequencies.
//! - [`IterativeEstimator`] relaxes the PageRank equation synchronously until
//!   the largest per-node change drops below a threshold.
//!
//! The free functions [`transition`], [`sample`] and [`iterate`] run each
//! component with default settings for everything but the damping factor.

mod distribution;
mod iterative;
mod model;
mod sampling;
mod weighted;

pub use distribution::Distribution;
pub use iterative::{iterate, IterationOutcome, IterativeEstimator, SinkMode};
pub use model::transition;
pub use sampling::{sample, SamplingEstimator};
pub use weighted::{choose_uniform, WeightedChoice};

use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, NodeId};

/// Conventional damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Conventional random-walk length for the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Conventional convergence threshold for the iterative estimator
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Safety cap on relaxation passes
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000;

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(LinkRankError::InvalidParameter(format!(
            "damping factor must be in [0, 1], got {}",
            damping
        )))
    }
}

pub(crate) fn ensure_non_empty<N: NodeId>(graph: &LinkGraph<N>) -> Result<()> {
    if graph.is_empty() {
        Err(LinkRankError::InvalidInput("graph has no nodes".to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_damping() {
        assert!(validate_damping(0.0).is_ok());
        assert!(validate_damping(DEFAULT_DAMPING).is_ok());
        assert!(validate_damping(1.0).is_ok());
        assert!(validate_damping(-0.1).is_err());
        assert!(validate_damping(1.5).is_err());
        assert!(validate_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_non_empty() {
        let empty: LinkGraph<String> = LinkGraph::default();
        assert!(matches!(
            ensure_non_empty(&empty),
            Err(LinkRankError::InvalidInput(_))
        ));
    }
}
