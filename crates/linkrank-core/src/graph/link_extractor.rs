//! Link extraction from documents

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Component, Path};

lazy_static! {
    static ref ANCHOR_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
    static ref MARKDOWN_LINK_RE: Regex = Regex::new(r"\[([^\]]+)\]\(([^)\s]+)[^)]*\)").unwrap();
}

/// Link schemes that always point outside a corpus
const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "ftp://", "javascript:"];

/// Extracted link from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    pub link_type: LinkType,
    pub target_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    HtmlAnchor,
    MarkdownLink,
}

/// Extract links from document content
///
/// Targets are resolved against the directory of `source_path` and returned
/// as corpus-relative, `/`-separated paths. Whether a target exists in the
/// corpus is decided later by the graph builder.
pub fn extract_links(content: &str, source_path: &str) -> Vec<DocumentLink> {
    let mut links = extract_html_anchors(content, source_path);

    if is_markdown(source_path) {
        links.extend(extract_markdown_links(content, source_path));
    }

    links
}

/// Extract `<a ... href="target">` anchors
fn extract_html_anchors(content: &str, source_path: &str) -> Vec<DocumentLink> {
    ANCHOR_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .filter_map(|target| normalize_path(target.as_str(), source_path))
        .map(|target_path| DocumentLink {
            link_type: LinkType::HtmlAnchor,
            target_path,
        })
        .collect()
}

/// Extract markdown-style links: [text](path)
fn extract_markdown_links(content: &str, source_path: &str) -> Vec<DocumentLink> {
    MARKDOWN_LINK_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(2))
        .filter_map(|target| normalize_path(target.as_str(), source_path))
        .map(|target_path| DocumentLink {
            link_type: LinkType::MarkdownLink,
            target_path,
        })
        .collect()
}

fn is_markdown(path: &str) -> bool {
    path.ends_with(".md") || path.ends_with(".markdown")
}

/// Normalize a link target to a corpus-relative path
///
/// Returns `None` for external and fragment-only links.
fn normalize_path(target: &str, source_path: &str) -> Option<String> {
    let target = target.trim();

    if target.is_empty() || target.starts_with('#') {
        return None;
    }

    if EXTERNAL_PREFIXES.iter().any(|p| target.starts_with(p)) {
        return None;
    }

    let target = target
        .split(['#', '?'])
        .next()
        .filter(|t| !t.is_empty())?;

    let resolved = if let Some(rooted) = target.strip_prefix('/') {
        Path::new(rooted).to_path_buf()
    } else {
        Path::new(source_path)
            .parent()
            .unwrap_or(Path::new(""))
            .join(target)
    };

    let mut components: Vec<String> = Vec::new();
    for component in resolved.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::Normal(part) => components.push(part.to_string_lossy().to_string()),
            _ => {}
        }
    }

    if components.is_empty() {
        None
    } else {
        Some(components.join("/"))
    }
}
