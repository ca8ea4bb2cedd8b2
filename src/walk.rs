//! Navigation tree construction.
//!
//! The one real job of this crate: walk a content directory depth-first and
//! mirror it as a tree of [`NavGroup`]s for the sidebar. Markdown files
//! become page leaves, subdirectories become nested groups, and everything
//! else is dropped.
//!
//! ## Walk rules
//!
//! - Dot-prefixed entries (`.vuepress/`, `.DS_Store`) never appear, at any
//!   depth.
//! - A file leaf links to `origin_prefix + stem`: `/guide/` + `setup.md`
//!   → `/guide/setup`.
//! - `readme.md` (any case) is promoted to the group's own `path` instead of
//!   appearing in `children`, when [`WalkOptions::promote_index`] is on.
//! - A subdirectory that contributes nothing (no pages anywhere below it,
//!   no promoted index) is dropped rather than emitted as an empty group.
//! - `collapsable` is set only when a group's direct child count exceeds
//!   [`WalkOptions::collapse_threshold`].
//!
//! The walk is a single synchronous pass, rebuilt fresh per invocation;
//! directory order is whatever the [`EntrySource`] yields ([`DiskSource`]
//! sorts by name for determinism).
//!
//! Filesystem access goes through the [`EntrySource`] trait so the walker
//! can be exercised against an in-memory fake in tests.

use crate::titles::{self, LeafTitles, TitleMap};
use crate::types::{NavGroup, NavNode, Sidebar};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A single directory entry as seen by the walker.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Final path component, e.g. `setup.md` or `guide`.
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryKind {
    File,
    Dir,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }
}

/// Directory listing abstraction the walker runs against.
///
/// Production code uses [`DiskSource`]; tests substitute an in-memory fake
/// so walk logic can be checked without touching disk.
pub trait EntrySource {
    /// List the entries of one directory, in the order the tree should use.
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, WalkError>;

    /// Read a markdown page's source (used for heading-based leaf titles).
    fn read_page(&self, path: &Path) -> Result<String, WalkError>;
}

/// [`EntrySource`] backed by the real filesystem.
///
/// Entries are sorted by name: `read_dir` order is platform-dependent and a
/// sidebar that reshuffles between builds is a bug, not a feature.
pub struct DiskSource;

impl EntrySource for DiskSource {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, WalkError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let kind = if entry.file_type()?.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_page(&self, path: &Path) -> Result<String, WalkError> {
        Ok(fs::read_to_string(path)?)
    }
}

/// Knobs for the walk.
///
/// The collapse threshold and index promotion are deliberately independent
/// options — different sites want different combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkOptions {
    /// A group becomes collapsable when its direct child count exceeds
    /// this. `None` keeps every group expanded.
    pub collapse_threshold: Option<usize>,
    /// Promote `readme.md` to the group's `path` and drop it from children.
    pub promote_index: bool,
    /// `sidebar_depth` stamped on every group.
    pub sidebar_depth: u32,
    /// How leaf display texts are derived.
    pub leaf_titles: LeafTitles,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            collapse_threshold: Some(5),
            promote_index: true,
            sidebar_depth: 1,
            leaf_titles: LeafTitles::Filename,
        }
    }
}

/// Build the sidebar group for one directory.
///
/// `origin_prefix` is the URL path accumulated from ancestors (`/` at the
/// root) and must end with `/`. The group's title is `title` resolved
/// through `titles`. Filesystem errors propagate; this runs once at site
/// build time under operator control, so there is no recovery path.
pub fn build_group(
    source: &dyn EntrySource,
    dir: &Path,
    title: &str,
    origin_prefix: &str,
    titles: &TitleMap,
    options: &WalkOptions,
) -> Result<NavGroup, WalkError> {
    let mut children = Vec::new();
    let mut index_path = None;

    for entry in source.list(dir)? {
        if entry.name.starts_with('.') {
            continue;
        }
        match entry.kind {
            EntryKind::File => {
                let Some(stem) = markdown_stem(&entry.name) else {
                    continue;
                };
                if options.promote_index && stem.eq_ignore_ascii_case("readme") {
                    index_path = Some(origin_prefix.to_string());
                    continue;
                }
                let link = format!("{origin_prefix}{stem}");
                let text = match options.leaf_titles {
                    LeafTitles::Filename => None,
                    LeafTitles::Heading => {
                        titles::first_heading(&source.read_page(&dir.join(&entry.name))?)
                    }
                };
                children.push(NavNode::Page { link, text });
            }
            EntryKind::Dir => {
                let child = build_group(
                    source,
                    &dir.join(&entry.name),
                    &entry.name,
                    &format!("{origin_prefix}{}/", entry.name),
                    titles,
                    options,
                )?;
                // Directories with nothing to show contribute nothing.
                if child.children.is_empty() && child.path.is_none() {
                    continue;
                }
                children.push(NavNode::Group(child));
            }
        }
    }

    let collapsable = options
        .collapse_threshold
        .is_some_and(|threshold| children.len() > threshold);

    Ok(NavGroup {
        title: titles.resolve(title).to_string(),
        path: index_path,
        collapsable,
        sidebar_depth: options.sidebar_depth,
        children,
    })
}

/// Build one sidebar section per top-level content directory, keyed by its
/// URL prefix, plus a catch-all section for the root itself.
///
/// The root section is appended last on purpose: the consuming framework
/// resolves a page's section by first prefix match, so `/` must not shadow
/// `/guide/`.
pub fn root_pages(
    source: &dyn EntrySource,
    root: &Path,
    titles: &TitleMap,
    options: &WalkOptions,
) -> Result<Sidebar, WalkError> {
    if !root.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let mut sidebar = Sidebar::default();
    for entry in source.list(root)? {
        if entry.kind != EntryKind::Dir || entry.name.starts_with('.') {
            continue;
        }
        let prefix = format!("/{}/", entry.name);
        let group = build_group(
            source,
            &root.join(&entry.name),
            &entry.name,
            &prefix,
            titles,
            options,
        )?;
        if group.children.is_empty() && group.path.is_none() {
            continue;
        }
        sidebar.push(prefix, vec![NavNode::Group(group)]);
    }

    let root_title = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Home".to_string());
    let root_group = build_group(source, root, &root_title, "/", titles, options)?;
    sidebar.push("/", vec![NavNode::Group(root_group)]);

    Ok(sidebar)
}

/// Filename stem when the entry is a markdown file, `None` otherwise.
fn markdown_stem(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if ext.eq_ignore_ascii_case("md") && !stem.is_empty() {
        Some(stem)
    } else {
        None
    }
}
