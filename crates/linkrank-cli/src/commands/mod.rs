//! CLI command handlers

pub mod graph;
pub mod rank;
pub mod transition;

use crate::app::RankParams;
use anyhow::{Context, Result};
use linkrank_core::{crawl, LinkGraph, RankConfig};
use std::path::Path;

/// Resolve the effective configuration: file (explicit or default), then flags
pub fn load_config(config_path: Option<&Path>, params: &RankParams) -> Result<RankConfig> {
    let mut config = match config_path {
        Some(path) => RankConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RankConfig::load()?,
    };

    params.apply(&mut config);
    config.validate()?;

    tracing::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Crawl the corpus directory into a link graph
pub fn load_graph(corpus: &Path, config: &RankConfig) -> Result<LinkGraph<String>> {
    let graph = crawl(corpus, &config.crawl)
        .with_context(|| format!("Failed to crawl corpus {}", corpus.display()))?;

    let sinks = graph.sinks().len();
    if sinks > 0 {
        tracing::debug!("{} of {} pages have no outgoing links", sinks, graph.len());
    }

    Ok(graph)
}
