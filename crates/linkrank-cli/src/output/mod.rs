//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::{Distribution, LinkGraph};

/// Decimal places used for ranks in human-readable formats
pub const RANK_PRECISION: usize = 4;

/// One block of results, e.g. the output of a single estimator
pub struct RankSection {
    pub title: String,
    /// Machine-readable name of the producing method
    pub method: &'static str,
    pub ranks: Distribution<String>,
}

/// Format options
#[derive(Default)]
pub struct FormatOptions {
    /// Show only the highest ranked pages, best first
    pub top: Option<usize>,
}

impl RankSection {
    /// Entries to display: all pages by name, or the top pages by rank
    pub fn entries(&self, options: &FormatOptions) -> Vec<(&String, f64)> {
        match options.top {
            Some(n) => self.ranks.top_n(n),
            None => self.ranks.iter().collect(),
        }
    }
}

/// Format ranking results
pub fn format_rankings(
    sections: &[RankSection],
    format: OutputFormat,
    options: &FormatOptions,
) -> String {
    match format {
        OutputFormat::Json => json::format_rankings(sections, options),
        OutputFormat::Csv => csv::format_rankings(sections, options),
        OutputFormat::Md => markdown::format_rankings(sections, options),
        OutputFormat::Cli => terminal::format_rankings(sections, options),
    }
}

/// Format a link graph
pub fn format_graph(graph: &LinkGraph<String>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_graph(graph),
        OutputFormat::Csv => csv::format_graph(graph),
        OutputFormat::Md => markdown::format_graph(graph),
        OutputFormat::Cli => terminal::format_graph(graph),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::RankSection;
    use linkrank_core::{transition, LinkGraph};

    pub fn graph() -> LinkGraph<String> {
        LinkGraph::from_links([
            ("1.html".to_string(), vec!["2.html".to_string()]),
            ("2.html".to_string(), vec!["1.html".to_string(), "3.html".to_string()]),
            ("3.html".to_string(), vec![]),
        ])
    }

    /// Transition from 3.html (a sink): uniform over the three pages
    pub fn uniform_section() -> RankSection {
        RankSection {
            title: "Uniform".to_string(),
            method: "transition",
            ranks: transition(&graph(), &"3.html".to_string(), 0.85).unwrap(),
        }
    }

    /// Transition from 1.html: 0.05 / 0.9 / 0.05
    pub fn skewed_section() -> RankSection {
        RankSection {
            title: "Skewed".to_string(),
            method: "transition",
            ranks: transition(&graph(), &"1.html".to_string(), 0.85).unwrap(),
        }
    }
}
