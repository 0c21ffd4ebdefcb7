//! CSV output formatter

use super::{FormatOptions, RankSection};
use linkrank_core::LinkGraph;

pub fn format_rankings(sections: &[RankSection], options: &FormatOptions) -> String {
    let mut output = String::from("method,page,rank\n");

    for section in sections {
        for (page, rank) in section.entries(options) {
            output.push_str(&format!("{},{},{}\n", section.method, escape_csv(page), rank));
        }
    }

    output
}

pub fn format_graph(graph: &LinkGraph<String>) -> String {
    let mut output = String::from("source,target\n");

    for page in graph.nodes() {
        for target in graph.out_links(page).unwrap_or_default() {
            output.push_str(&format!("{},{}\n", escape_csv(page), escape_csv(target)));
        }
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
