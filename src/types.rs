//! Shared types for the sidebar configuration.
//!
//! These types are serialized to `sidebar.json`, the configuration object the
//! consuming site framework reads to render its sidebar. Field names follow
//! that framework's camelCase convention, so serialization shape is part of
//! the contract here, not an implementation detail.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A sidebar entry: a single page or a group of pages.
///
/// Pages serialize as their bare link (`"/guide/setup"`), or as a
/// `[link, text]` pair when a custom display text was extracted. Groups
/// serialize as objects. Both forms are what the sidebar renderer expects
/// to find intermixed in a `children` array.
#[derive(Debug, Clone, PartialEq)]
pub enum NavNode {
    /// A single content page.
    Page {
        /// Site-absolute link, e.g. `/guide/setup`.
        link: String,
        /// Display text override; `None` lets the renderer use the page's own title.
        text: Option<String>,
    },
    /// A group of pages mirroring a content subdirectory.
    Group(NavGroup),
}

impl NavNode {
    /// Convenience constructor for a plain page leaf.
    pub fn page(link: impl Into<String>) -> Self {
        NavNode::Page {
            link: link.into(),
            text: None,
        }
    }
}

impl Serialize for NavNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NavNode::Page { link, text: None } => serializer.serialize_str(link),
            NavNode::Page {
                link,
                text: Some(text),
            } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(link)?;
                seq.serialize_element(text)?;
                seq.end()
            }
            NavNode::Group(group) => group.serialize(serializer),
        }
    }
}

/// A sidebar group mirroring one content directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavGroup {
    /// Display title, already resolved through the title lookup table.
    pub title: String,
    /// Canonical link for the group itself. Set only when the directory's
    /// index page was promoted out of `children`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether the renderer may collapse this group.
    pub collapsable: bool,
    /// How many heading levels the renderer should expand per page.
    pub sidebar_depth: u32,
    /// Pages and sub-groups in source order.
    pub children: Vec<NavNode>,
}

/// The full sidebar: an ordered mapping from URL prefix to that section's
/// groups.
///
/// Order matters: the consuming framework resolves a page's section by
/// first prefix match, so the catch-all `/` section must be stored (and
/// serialized) last. A plain `BTreeMap` would sort `/` first, which is why
/// this is a vector of pairs with a hand-written map serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sidebar {
    sections: Vec<(String, Vec<NavNode>)>,
}

impl Sidebar {
    /// Append a section. Callers are responsible for ordering (root last).
    pub fn push(&mut self, prefix: impl Into<String>, groups: Vec<NavNode>) {
        self.sections.push((prefix.into(), groups));
    }

    /// Section for an exact prefix, if present.
    pub fn get(&self, prefix: &str) -> Option<&[NavNode]> {
        self.sections
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    /// Prefixes in stored order.
    pub fn prefixes(&self) -> Vec<&str> {
        self.sections.iter().map(|(p, _)| p.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavNode])> {
        self.sections
            .iter()
            .map(|(p, groups)| (p.as_str(), groups.as_slice()))
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (prefix, groups) in &self.sections {
            map.serialize_entry(prefix, groups)?;
        }
        map.end()
    }
}
