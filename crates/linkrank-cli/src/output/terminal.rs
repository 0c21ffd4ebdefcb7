//! Terminal output formatter

use super::{FormatOptions, RankSection, RANK_PRECISION};
use linkrank_core::LinkGraph;

pub fn format_rankings(sections: &[RankSection], options: &FormatOptions) -> String {
    let mut output = String::new();

    for section in sections {
        output.push_str(&section.title);
        output.push('\n');
        for (page, rank) in section.entries(options) {
            output.push_str(&format!("  {}: {:.*}\n", page, RANK_PRECISION, rank));
        }
    }

    output
}

pub fn format_graph(graph: &LinkGraph<String>) -> String {
    let mut output = format!(
        "{} pages, {} links\n",
        graph.len(),
        graph.edge_count()
    );

    for page in graph.nodes() {
        let links = graph.out_links(page).unwrap_or_default();
        if links.is_empty() {
            output.push_str(&format!("  {} (no links)\n", page));
        } else {
            let targets: Vec<&str> = links.iter().map(|l| l.as_str()).collect();
            output.push_str(&format!("  {} -> {}\n", page, targets.join(", ")));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures;

    #[test]
    fn test_format_sorted_by_page() {
        let output = format_rankings(&[fixtures::skewed_section()], &FormatOptions::default());
        assert_eq!(
            output,
            "Skewed\n  1.html: 0.0500\n  2.html: 0.9000\n  3.html: 0.0500\n"
        );
    }

    #[test]
    fn test_format_top() {
        let options = FormatOptions { top: Some(1) };
        let output = format_rankings(&[fixtures::skewed_section()], &options);
        assert_eq!(output, "Skewed\n  2.html: 0.9000\n");
    }

    #[test]
    fn test_format_graph() {
        let output = format_graph(&fixtures::graph());
        assert!(output.starts_with("3 pages, 3 links\n"));
        assert!(output.contains("  2.html -> 1.html, 3.html\n"));
        assert!(output.contains("  3.html (no links)\n"));
    }
}
