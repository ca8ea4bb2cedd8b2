//! Shared test utilities for the simple-nav test suite.
//!
//! Provides [`MemSource`], an in-memory [`EntrySource`] fake so walk logic
//! can be exercised without disk I/O, plus small extractors over the built
//! tree that panic with a clear message on a miss.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{NavGroup, NavNode};
use crate::walk::{Entry, EntrySource, WalkError};

/// In-memory directory tree.
///
/// Directories are registered explicitly with [`MemSource::dir`]; listing an
/// unregistered path fails the way a missing directory would on disk.
/// Entries come back in exactly the registered order, which lets tests
/// exercise arbitrary orderings the sorted disk source never produces.
#[derive(Default)]
pub struct MemSource {
    dirs: BTreeMap<PathBuf, Vec<Entry>>,
    pages: BTreeMap<PathBuf, String>,
}

impl MemSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory and its entries.
    pub fn dir(&mut self, path: impl Into<PathBuf>, entries: Vec<Entry>) {
        self.dirs.insert(path.into(), entries);
    }

    /// Register a page's markdown source (for heading-title tests).
    pub fn page(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.pages.insert(path.into(), content.into());
    }
}

impl EntrySource for MemSource {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, WalkError> {
        self.dirs.get(dir).cloned().ok_or_else(|| {
            WalkError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir.display()),
            ))
        })
    }

    fn read_page(&self, path: &Path) -> Result<String, WalkError> {
        self.pages.get(path).cloned().ok_or_else(|| {
            WalkError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such page: {}", path.display()),
            ))
        })
    }
}

// =========================================================================
// Tree extractors — panic with a clear message on miss
// =========================================================================

/// The node as a group. Panics if it is a page.
pub fn group(node: &NavNode) -> &NavGroup {
    match node {
        NavNode::Group(g) => g,
        NavNode::Page { link, .. } => panic!("expected a group, got page '{link}'"),
    }
}

/// The node's link. Panics if it is a group.
pub fn link(node: &NavNode) -> &str {
    match node {
        NavNode::Page { link, .. } => link,
        NavNode::Group(g) => panic!("expected a page, got group '{}'", g.title),
    }
}

/// Links of all page children, in order. Group children are skipped.
pub fn links(group: &NavGroup) -> Vec<&str> {
    group
        .children
        .iter()
        .filter_map(|c| match c {
            NavNode::Page { link, .. } => Some(link.as_str()),
            NavNode::Group(_) => None,
        })
        .collect()
}

/// Display identity of each child in order: group titles and page links.
pub fn titles_of(group: &NavGroup) -> Vec<&str> {
    group
        .children
        .iter()
        .map(|c| match c {
            NavNode::Group(g) => g.title.as_str(),
            NavNode::Page { link, .. } => link.as_str(),
        })
        .collect()
}
