//! Markdown output formatter

use super::{FormatOptions, RankSection, RANK_PRECISION};
use linkrank_core::LinkGraph;

pub fn format_rankings(sections: &[RankSection], options: &FormatOptions) -> String {
    let mut output = String::from("# PageRank Results\n\n");

    for section in sections {
        output.push_str(&format!("## {}\n\n", section.title));
        output.push_str("| Page | Rank |\n|------|-----:|\n");
        for (page, rank) in section.entries(options) {
            output.push_str(&format!("| `{}` | {:.*} |\n", page, RANK_PRECISION, rank));
        }
        output.push('\n');
    }

    if sections.is_empty() {
        output.push_str("*No results*\n");
    }

    output
}

pub fn format_graph(graph: &LinkGraph<String>) -> String {
    let mut output = String::from("# Link Graph\n\n");

    for page in graph.nodes() {
        let links = graph.out_links(page).unwrap_or_default();
        if links.is_empty() {
            output.push_str(&format!("- `{}` *(no links)*\n", page));
        } else {
            let targets: Vec<String> = links.iter().map(|l| format!("`{}`", l)).collect();
            output.push_str(&format!("- `{}` → {}\n", page, targets.join(", ")));
        }
    }

    output
}
