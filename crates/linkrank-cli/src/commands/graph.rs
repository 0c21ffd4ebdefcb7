//! Link graph command

use super::{load_config, load_graph};
use crate::app::{CorpusArgs, OutputFormat, RankParams};
use crate::output::format_graph;
use anyhow::Result;
use std::path::Path;

/// Print the crawled link graph
pub fn run(
    args: CorpusArgs,
    config_path: Option<&Path>,
    params: &RankParams,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(config_path, params)?;
    let graph = load_graph(&args.corpus, &config)?;

    print!("{}", format_graph(&graph, format));
    Ok(())
}
