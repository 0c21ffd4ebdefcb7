//! JSON output formatter

use super::{FormatOptions, RankSection};
use linkrank_core::LinkGraph;

pub fn format_rankings(sections: &[RankSection], options: &FormatOptions) -> String {
    let output: Vec<serde_json::Value> = sections
        .iter()
        .map(|s| {
            let ranks: Vec<serde_json::Value> = s
                .entries(options)
                .into_iter()
                .map(|(page, rank)| serde_json::json!({ "page": page, "rank": rank }))
                .collect();

            serde_json::json!({
                "method": s.method,
                "title": s.title,
                "sum": s.ranks.sum(),
                "ranks": ranks,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}

pub fn format_graph(graph: &LinkGraph<String>) -> String {
    let pages: Vec<serde_json::Value> = graph
        .nodes()
        .iter()
        .map(|page| {
            serde_json::json!({
                "page": page,
                "links": graph.out_links(page).unwrap_or_default(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "pages": pages,
        "sinks": graph.sinks(),
        "edges": graph.edge_count(),
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
