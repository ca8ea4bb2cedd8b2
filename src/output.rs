//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Format
//!
//! ```text
//! Sections
//! /guide/
//!     guide  -> /guide/
//!         /guide/setup
//!         advanced
//!             /guide/advanced/tips
//! /
//!     docs
//!         /about
//!
//! 4 pages in 3 groups, max depth 2
//! ```
//!
//! Groups show their title (plus `-> path` when an index was promoted);
//! pages show their link, or `link (text)` when a display text was
//! extracted.

use crate::types::{NavGroup, NavNode, Sidebar};
use std::path::Path;
use walkdir::WalkDir;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format one node and its subtree.
fn format_node(node: &NavNode, depth: usize, lines: &mut Vec<String>) {
    match node {
        NavNode::Page { link, text: None } => lines.push(format!("{}{}", indent(depth), link)),
        NavNode::Page {
            link,
            text: Some(text),
        } => lines.push(format!("{}{} ({})", indent(depth), link, text)),
        NavNode::Group(group) => format_group(group, depth, lines),
    }
}

fn format_group(group: &NavGroup, depth: usize, lines: &mut Vec<String>) {
    let header = match &group.path {
        Some(path) => format!("{}{}  -> {}", indent(depth), group.title, path),
        None => format!("{}{}", indent(depth), group.title),
    };
    lines.push(header);
    for child in &group.children {
        format_node(child, depth + 1, lines);
    }
}

/// Format the full sidebar, one block per section in stored order.
pub fn format_sidebar(sidebar: &Sidebar) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (prefix, groups) in sidebar.iter() {
        lines.push(prefix.to_string());
        for node in groups {
            format_node(node, 1, &mut lines);
        }
    }
    lines
}

/// Counts gathered from the content directory itself, independent of walk
/// options — what is on disk, not what made it into the sidebar.
#[derive(Debug, Default, PartialEq)]
pub struct ContentStats {
    /// Markdown files under the root (hidden entries excluded).
    pub pages: usize,
    /// Directories under the root (hidden entries excluded, root itself not counted).
    pub dirs: usize,
    /// Deepest directory nesting level relative to the root.
    pub max_depth: usize,
}

/// Walk the content root and count pages, directories, and nesting depth.
pub fn content_stats(root: &Path) -> ContentStats {
    let mut stats = ContentStats::default();
    let walker = WalkDir::new(root).min_depth(1).into_iter();
    for entry in walker.filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.')) {
        let Ok(entry) = entry else { continue };
        if entry.file_type().is_dir() {
            stats.dirs += 1;
            stats.max_depth = stats.max_depth.max(entry.depth());
        } else if entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        {
            stats.pages += 1;
        }
    }
    stats
}

/// Format the one-line build summary.
pub fn format_stats(stats: &ContentStats) -> String {
    format!(
        "{} page{} in {} group{}, max depth {}",
        stats.pages,
        if stats.pages == 1 { "" } else { "s" },
        stats.dirs,
        if stats.dirs == 1 { "" } else { "s" },
        stats.max_depth
    )
}

/// Print the build report: sidebar tree, then stats for the source tree.
pub fn print_build_output(sidebar: &Sidebar, source: &Path) {
    for line in format_sidebar(sidebar) {
        println!("{line}");
    }
    println!();
    println!("{}", format_stats(&content_stats(source)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_sidebar() -> Sidebar {
        let guide = NavGroup {
            title: "guide".to_string(),
            path: Some("/guide/".to_string()),
            collapsable: false,
            sidebar_depth: 1,
            children: vec![
                NavNode::page("/guide/setup"),
                NavNode::Group(NavGroup {
                    title: "advanced".to_string(),
                    path: None,
                    collapsable: false,
                    sidebar_depth: 1,
                    children: vec![NavNode::page("/guide/advanced/tips")],
                }),
            ],
        };
        let mut sidebar = Sidebar::default();
        sidebar.push("/guide/", vec![NavNode::Group(guide)]);
        sidebar
    }

    #[test]
    fn sidebar_formats_as_indented_tree() {
        let lines = format_sidebar(&sample_sidebar());
        assert_eq!(
            lines,
            vec![
                "Sections",
                "/guide/",
                "    guide  -> /guide/",
                "        /guide/setup",
                "        advanced",
                "            /guide/advanced/tips",
            ]
        );
    }

    #[test]
    fn page_with_text_shows_both() {
        let mut sidebar = Sidebar::default();
        sidebar.push(
            "/",
            vec![NavNode::Page {
                link: "/about".to_string(),
                text: Some("About Us".to_string()),
            }],
        );
        let lines = format_sidebar(&sidebar);
        assert_eq!(lines[2], "    /about (About Us)");
    }

    #[test]
    fn stats_count_pages_dirs_and_depth() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("a/b");
        fs::create_dir_all(&deep).unwrap();
        fs::write(tmp.path().join("about.md"), "x").unwrap();
        fs::write(deep.join("leaf.md"), "x").unwrap();
        fs::write(deep.join("logo.png"), "x").unwrap();

        let stats = content_stats(tmp.path());
        assert_eq!(
            stats,
            ContentStats {
                pages: 2,
                dirs: 2,
                max_depth: 2,
            }
        );
    }

    #[test]
    fn stats_skip_hidden_subtrees() {
        let tmp = TempDir::new().unwrap();
        let hidden = tmp.path().join(".vuepress");
        fs::create_dir_all(&hidden).unwrap();
        fs::write(hidden.join("config.md"), "x").unwrap();
        fs::write(tmp.path().join("about.md"), "x").unwrap();

        let stats = content_stats(tmp.path());
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.dirs, 0);
    }

    #[test]
    fn stats_line_pluralizes() {
        let one = ContentStats {
            pages: 1,
            dirs: 1,
            max_depth: 0,
        };
        assert_eq!(format_stats(&one), "1 page in 1 group, max depth 0");

        let many = ContentStats {
            pages: 4,
            dirs: 3,
            max_depth: 2,
        };
        assert_eq!(format_stats(&many), "4 pages in 3 groups, max depth 2");
    }
}
