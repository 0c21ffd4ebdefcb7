//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::{RankConfig, SinkMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Estimate the PageRank of a corpus of linked documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// YAML configuration file
    #[arg(long, global = true, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub params: RankParams,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank pages by sampling, then by iteration
    Rank(CorpusArgs),

    /// Rank pages by random-surfer sampling
    Sample(CorpusArgs),

    /// Rank pages by iterating to convergence
    Iterate(CorpusArgs),

    /// Show where a surfer goes next from a page
    Transition(TransitionArgs),

    /// Show the link graph of a corpus
    Graph(CorpusArgs),
}

#[derive(Args)]
pub struct CorpusArgs {
    /// Directory of linked documents
    pub corpus: PathBuf,

    /// Only show the highest ranked pages
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct TransitionArgs {
    /// Directory of linked documents
    pub corpus: PathBuf,

    /// Page the surfer is currently on
    pub page: String,
}

/// Overrides for configured ranking parameters
#[derive(Args, Default)]
pub struct RankParams {
    /// Damping factor in [0, 1]
    #[arg(short, long, global = true)]
    pub damping: Option<f64>,

    /// Number of pages visited by the sampling walk
    #[arg(short = 'n', long, global = true)]
    pub samples: Option<usize>,

    /// Convergence threshold for iteration
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Maximum number of iteration passes
    #[arg(long, global = true)]
    pub max_iterations: Option<usize>,

    /// Seed for a reproducible sampling walk
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Spread the rank of pages without links over all pages while iterating
    #[arg(long, global = true)]
    pub redistribute_sinks: bool,

    /// Report raw iteration ranks without scaling them to sum to one
    #[arg(long, global = true)]
    pub no_normalize: bool,

    /// Glob pattern selecting documents
    #[arg(long, global = true)]
    pub pattern: Option<String>,

    /// Directory depth to crawl (1 = corpus directory only)
    #[arg(long, global = true)]
    pub depth: Option<usize>,
}

impl RankParams {
    /// Apply explicitly given flags on top of `config`
    pub fn apply(&self, config: &mut RankConfig) {
        if let Some(damping) = self.damping {
            config.damping = damping;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.redistribute_sinks {
            config.sink_mode = SinkMode::Redistribute;
        }
        if self.no_normalize {
            config.normalize = false;
        }
        if let Some(ref pattern) = self.pattern {
            config.crawl.pattern = pattern.clone();
        }
        if let Some(depth) = self.depth {
            config.crawl.max_depth = depth;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rank_with_overrides() {
        let cli = Cli::try_parse_from([
            "linkrank", "rank", "corpus0", "--damping", "0.5", "-n", "200", "--seed", "3",
        ])
        .unwrap();

        let mut config = RankConfig::default();
        cli.params.apply(&mut config);

        assert_eq!(config.damping, 0.5);
        assert_eq!(config.samples, 200);
        assert_eq!(config.seed, Some(3));
        assert!(matches!(cli.command, Commands::Rank(_)));
    }

    #[test]
    fn test_flags_leave_unset_values_alone() {
        let mut config = RankConfig::default();
        let before = config.clone();
        RankParams::default().apply(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn test_sink_and_crawl_flags() {
        let params = RankParams {
            redistribute_sinks: true,
            no_normalize: true,
            pattern: Some("**/*.md".to_string()),
            depth: Some(3),
            ..Default::default()
        };
        let mut config = RankConfig::default();
        params.apply(&mut config);

        assert_eq!(config.sink_mode, SinkMode::Redistribute);
        assert!(!config.normalize);
        assert_eq!(config.crawl.pattern, "**/*.md");
        assert_eq!(config.crawl.max_depth, 3);
    }

    #[test]
    fn test_parse_transition() {
        let cli = Cli::try_parse_from(["linkrank", "transition", "corpus0", "1.html"]).unwrap();
        match cli.command {
            Commands::Transition(args) => assert_eq!(args.page, "1.html"),
            _ => panic!("expected transition command"),
        }
    }
}
