//! Weighted random choice

use crate::error::{LinkRankError, Result};
use rand::Rng;

/// Cumulative-weight table for repeated weighted draws
///
/// Built once from non-negative weights; each draw takes a uniform value in
/// `[0, total)` and binary-searches the cumulative sums, so index `i` is
/// chosen with probability `weights[i] / total`.
#[derive(Debug, Clone)]
pub struct WeightedChoice {
    cumulative: Vec<f64>,
    /// Last index with a positive weight
    last_positive: usize,
}

impl WeightedChoice {
    pub fn new(weights: &[f64]) -> Result<Self> {
        if weights.is_empty() {
            return Err(LinkRankError::InvalidParameter(
                "weighted choice needs at least one candidate".to_string(),
            ));
        }

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0.0;
        let mut last_positive = 0;
        for (i, &w) in weights.iter().enumerate() {
            if !(w >= 0.0 && w.is_finite()) {
                return Err(LinkRankError::InvalidParameter(format!(
                    "weight {} at index {} is not a finite non-negative number",
                    w, i
                )));
            }
            if w > 0.0 {
                last_positive = i;
            }
            total += w;
            cumulative.push(total);
        }

        if total <= 0.0 {
            return Err(LinkRankError::InvalidParameter(
                "weights sum to zero".to_string(),
            ));
        }

        Ok(Self {
            cumulative,
            last_positive,
        })
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Draw one index
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index_at(rng.random::<f64>() * self.total())
    }

    /// Index whose cumulative interval contains `u`
    ///
    /// Zero-weight entries share their predecessor's cumulative sum and are
    /// never the first entry strictly above `u`. A `u` rounded up to the total
    /// falls on the last positive weight.
    fn index_at(&self, u: f64) -> usize {
        let idx = self.cumulative.partition_point(|&c| c <= u);
        idx.min(self.last_positive)
    }
}

/// Uniform choice of an index in `0..len`
pub fn choose_uniform<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(LinkRankError::InvalidParameter(
            "cannot choose from an empty sequence".to_string(),
        ));
    }
    Ok(rng.random_range(0..len))
}
