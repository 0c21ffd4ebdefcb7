//! Linkrank Core Library
//!
//! PageRank estimation over directed link graphs.
//!
//! # Features
//! - Link graph model with self and dangling links dropped at construction
//! - Random-surfer transition model with uniform jumps out of sinks
//! - Monte-Carlo estimation from a single random walk
//! - Iterative estimation by synchronous relaxation with an iteration cap
//! - Corpus crawling of HTML and Markdown documents into a link graph

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{LinkRankError, Error, Result};
pub use graph::{crawl, CrawlOptions, GraphBuilder, LinkGraph, NodeId};
pub use rank::{
    iterate, sample, transition, Distribution, IterationOutcome, IterativeEstimator,
    SamplingEstimator, SinkMode, WeightedChoice,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
