//! Ranking commands

use super::{load_config, load_graph};
use crate::app::{CorpusArgs, OutputFormat, RankParams};
use crate::output::{format_rankings, FormatOptions, RankSection};
use anyhow::Result;
use linkrank_core::{LinkGraph, RankConfig};
use std::path::Path;

/// Which estimators a ranking command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Sampling,
    Iteration,
    Both,
}

/// Crawl the corpus and print the requested rankings
pub fn run(
    args: CorpusArgs,
    method: Method,
    config_path: Option<&Path>,
    params: &RankParams,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(config_path, params)?;
    let graph = load_graph(&args.corpus, &config)?;

    let sections = compute_sections(&graph, &config, method)?;
    let options = FormatOptions { top: args.top };
    print!("{}", format_rankings(&sections, format, &options));

    Ok(())
}

/// Run the estimators selected by `method`, sampling first
pub fn compute_sections(
    graph: &LinkGraph<String>,
    config: &RankConfig,
    method: Method,
) -> Result<Vec<RankSection>> {
    let mut sections = Vec::new();

    if matches!(method, Method::Sampling | Method::Both) {
        let ranks = config.sampling_estimator().run(graph)?;
        sections.push(RankSection {
            title: format!("PageRank Results from Sampling (n = {})", config.samples),
            method: "sampling",
            ranks,
        });
    }

    if matches!(method, Method::Iteration | Method::Both) {
        let outcome = config.iterative_estimator().run(graph)?;
        tracing::debug!(
            "Iteration finished after {} passes, raw mass {:.6}",
            outcome.iterations,
            outcome.raw_mass
        );
        sections.push(RankSection {
            title: "PageRank Results from Iteration".to_string(),
            method: "iteration",
            ranks: outcome.ranks,
        });
    }

    Ok(sections)
}
