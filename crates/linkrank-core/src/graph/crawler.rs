//! Corpus crawling: a directory of documents into a link graph

use super::{extract_links, GraphBuilder, LinkGraph, LinkType};
use crate::error::{LinkRankError, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Crawl options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlOptions {
    /// Glob pattern for documents, matched against the corpus-relative path
    pub pattern: String,
    /// Maximum directory depth; 1 reads only the corpus directory itself
    pub max_depth: usize,
    pub follow_symlinks: bool,
    pub exclude_hidden: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            pattern: "*.html".to_string(),
            max_depth: 1,
            follow_symlinks: true,
            exclude_hidden: true,
        }
    }
}

/// Parse a directory of documents and build the link graph between them
///
/// Each matching document becomes a node named by its corpus-relative path.
/// Links to documents outside the corpus and self links are dropped.
pub fn crawl(root: &Path, options: &CrawlOptions) -> Result<LinkGraph<String>> {
    let pattern = Pattern::new(&options.pattern)?;
    let mut builder = GraphBuilder::new();
    let mut anchors = 0usize;
    let mut markdown_links = 0usize;

    let walker = WalkDir::new(root)
        .max_depth(options.max_depth)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_skip(e, options));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map(|p| {
                p.components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_else(|_| path.to_string_lossy().to_string());

        if !pattern.matches(&relative) {
            continue;
        }

        let bytes = std::fs::read(path)?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Reading {:?} lossily: {}", path, e.utf8_error());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        builder.add_node(relative.clone());
        for link in extract_links(&content, &relative) {
            match link.link_type {
                LinkType::HtmlAnchor => anchors += 1,
                LinkType::MarkdownLink => markdown_links += 1,
            }
            builder.add_link(relative.clone(), link.target_path);
        }
    }

    if builder.node_count() == 0 {
        return Err(LinkRankError::InvalidInput(format!(
            "corpus {} contains no documents matching {}",
            root.display(),
            options.pattern
        )));
    }

    let graph = builder.build();
    tracing::info!(
        "Crawled {} documents, kept {} of {} extracted links ({} anchors, {} markdown)",
        graph.len(),
        graph.edge_count(),
        anchors + markdown_links,
        anchors,
        markdown_links
    );

    Ok(graph)
}

fn should_skip(entry: &DirEntry, options: &CrawlOptions) -> bool {
    options.exclude_hidden && entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_corpus(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (path, content) in files {
            let full_path = temp.path().join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full_path, content).unwrap();
        }
        temp
    }

    #[test]
    fn test_default_options() {
        let opts = CrawlOptions::default();
        assert_eq!(opts.pattern, "*.html");
        assert_eq!(opts.max_depth, 1);
        assert!(opts.exclude_hidden);
    }

    #[test]
    fn test_crawl_corpus() {
        let temp = write_corpus(&[
            ("1.html", r#"<a href="2.html">2</a>"#),
            ("2.html", r#"<a href="1.html">1</a> <a href="3.html">3</a>"#),
            ("3.html", r#"<a href="2.html">2</a> <a href="3.html">self</a>"#),
            ("notes.txt", r#"<a href="1.html">ignored</a>"#),
        ]);

        let graph = crawl(temp.path(), &CrawlOptions::default()).unwrap();

        assert_eq!(graph.nodes(), &["1.html", "2.html", "3.html"]);
        let two = "2.html".to_string();
        let three = "3.html".to_string();
        assert_eq!(graph.out_links(&three), Some(vec![&two]));
        assert_eq!(graph.out_degree(&two), Some(2));
    }

    #[test]
    fn test_crawl_drops_links_outside_corpus() {
        let temp = write_corpus(&[
            ("a.html", r#"<a href="missing.html">x</a><a href="https://example.com">y</a>"#),
            ("b.html", ""),
        ]);

        let graph = crawl(temp.path(), &CrawlOptions::default()).unwrap();

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.sinks().len(), 2);
    }

    #[test]
    fn test_crawl_respects_depth() {
        let temp = write_corpus(&[
            ("index.html", r#"<a href="sub/page.html">sub</a>"#),
            ("sub/page.html", r#"<a href="../index.html">up</a>"#),
        ]);

        let shallow = crawl(temp.path(), &CrawlOptions::default()).unwrap();
        assert_eq!(shallow.len(), 1);

        let options = CrawlOptions {
            pattern: "**/*.html".to_string(),
            max_depth: 4,
            ..Default::default()
        };
        let deep = crawl(temp.path(), &options).unwrap();
        assert_eq!(deep.nodes(), &["index.html", "sub/page.html"]);
        assert_eq!(deep.edge_count(), 2);
    }

    #[test]
    fn test_crawl_skips_hidden() {
        let temp = write_corpus(&[("a.html", ""), (".draft.html", r#"<a href="a.html">a</a>"#)]);
        let graph = crawl(temp.path(), &CrawlOptions::default()).unwrap();
        assert_eq!(graph.nodes(), &["a.html"]);
    }

    #[test]
    fn test_crawl_empty_corpus() {
        let temp = TempDir::new().unwrap();
        let err = crawl(temp.path(), &CrawlOptions::default()).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidInput(_)));
    }

    #[test]
    fn test_crawl_missing_directory() {
        let temp = TempDir::new().unwrap();
        let result = crawl(&temp.path().join("nope"), &CrawlOptions::default());
        assert!(matches!(result, Err(LinkRankError::WalkDir(_))));
    }

    #[test]
    fn test_crawl_markdown_corpus() {
        let temp = write_corpus(&[
            ("README.md", "See [guide](guide.md)"),
            ("guide.md", "Back to [readme](README.md)"),
        ]);
        let options = CrawlOptions {
            pattern: "*.md".to_string(),
            ..Default::default()
        };
        let graph = crawl(temp.path(), &options).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }
}
