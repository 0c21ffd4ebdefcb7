//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::graph::CrawlOptions;
use crate::rank::{
    IterativeEstimator, SamplingEstimator, SinkMode, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS,
    DEFAULT_SAMPLES, DEFAULT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ranking configuration
///
/// Values are layered: built-in defaults, then `LINKRANK_*` environment
/// variables, then a YAML file. Command line flags are applied on top by the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Walk length for the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Convergence threshold for the iterative estimator
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Safety cap on relaxation passes
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for reproducible sampling
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,

    #[serde(default)]
    pub sink_mode: SinkMode,

    /// Scale iterative ranks to sum to one
    #[serde(default = "default_normalize")]
    pub normalize: bool,

    #[serde(default)]
    pub crawl: CrawlOptions,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            max_iterations: default_max_iterations(),
            seed: default_seed(),
            sink_mode: SinkMode::default(),
            normalize: default_normalize(),
            crawl: CrawlOptions::default(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn default_damping() -> f64 {
    env_parse("LINKRANK_DAMPING").unwrap_or(DEFAULT_DAMPING)
}

fn default_samples() -> usize {
    env_parse("LINKRANK_SAMPLES").unwrap_or(DEFAULT_SAMPLES)
}

fn default_threshold() -> f64 {
    env_parse("LINKRANK_THRESHOLD").unwrap_or(DEFAULT_THRESHOLD)
}

fn default_max_iterations() -> usize {
    env_parse("LINKRANK_MAX_ITERATIONS").unwrap_or(DEFAULT_MAX_ITERATIONS)
}

fn default_seed() -> Option<u64> {
    env_parse("LINKRANK_SEED")
}

fn default_normalize() -> bool {
    true
}

impl RankConfig {
    /// Load config from the default path, falling back to defaults
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: RankConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check every parameter is usable by the estimators
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(LinkRankError::InvalidParameter(format!(
                "damping factor must be in [0, 1], got {}",
                self.damping
            )));
        }
        if self.samples == 0 {
            return Err(LinkRankError::InvalidParameter(
                "sample count must be positive".to_string(),
            ));
        }
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
        if self.crawl.max_depth == 0 {
            return Err(LinkRankError::Config(
                "crawl depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn sampling_estimator(&self) -> SamplingEstimator {
        SamplingEstimator::new()
            .with_damping(self.damping)
            .with_samples(self.samples)
            .with_seed(self.seed)
    }

    pub fn iterative_estimator(&self) -> IterativeEstimator {
        IterativeEstimator::new()
            .with_damping(self.damping)
            .with_threshold(self.threshold)
            .with_max_iterations(self.max_iterations)
            .with_sink_mode(self.sink_mode)
            .with_normalize(self.normalize)
    }
}
