//! Transition model command

use super::{load_config, load_graph};
use crate::app::{OutputFormat, RankParams, TransitionArgs};
use crate::output::{format_rankings, FormatOptions, RankSection};
use anyhow::Result;
use std::path::Path;

/// Print the distribution over the next page from `args.page`
pub fn run(
    args: TransitionArgs,
    config_path: Option<&Path>,
    params: &RankParams,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(config_path, params)?;
    let graph = load_graph(&args.corpus, &config)?;

    let ranks = linkrank_core::transition(&graph, &args.page, config.damping)?;
    let section = RankSection {
        title: format!(
            "Transition Model from {} (damping = {})",
            args.page, config.damping
        ),
        method: "transition",
        ranks,
    };

    print!(
        "{}",
        format_rankings(&[section], format, &FormatOptions::default())
    );
    Ok(())
}
