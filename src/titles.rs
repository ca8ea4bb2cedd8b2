//! Title resolution for sidebar entries.
//!
//! Group titles come from directory names, optionally remapped through a
//! [`TitleMap`] so a folder like `root-study` can display as "Study Notes".
//! The map is injected by the caller — there is no module-level table — so
//! the tree builder stays a pure function of (directory, mapping).
//!
//! Leaf titles default to whatever the renderer derives from the page
//! itself. With [`LeafTitles::Heading`], the first `# heading` of the
//! markdown source is attached as an explicit display text instead.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from raw directory name to display label.
///
/// Names absent from the map pass through unchanged:
///
/// ```
/// use simple_nav::titles::TitleMap;
///
/// let titles = TitleMap::from_iter([("root-study", "Study Notes")]);
/// assert_eq!(titles.resolve("root-study"), "Study Notes");
/// assert_eq!(titles.resolve("other"), "other");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleMap(BTreeMap<String, String>);

impl TitleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, raw: impl Into<String>, label: impl Into<String>) {
        self.0.insert(raw.into(), label.into());
    }

    /// Display label for a raw name; the name itself when unmapped.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.0.get(raw).map(String::as_str).unwrap_or(raw)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TitleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// How leaf display texts are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafTitles {
    /// Emit the bare link; the renderer titles the page itself.
    #[default]
    Filename,
    /// Attach the page's first `# heading` as explicit display text.
    Heading,
}

/// Extract the text of the first level-1 heading in a markdown document.
///
/// Inline markup is flattened to plain text (`# A *b* c` → "A b c").
/// Returns `None` when the document has no non-empty `#` heading.
pub fn first_heading(markdown: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
                in_heading = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_name_resolves_to_label() {
        let titles = TitleMap::from_iter([("root-study", "Study Notes")]);
        assert_eq!(titles.resolve("root-study"), "Study Notes");
    }

    #[test]
    fn unmapped_name_passes_through() {
        let titles = TitleMap::from_iter([("root-study", "Study Notes")]);
        assert_eq!(titles.resolve("other"), "other");
    }

    #[test]
    fn empty_map_passes_everything_through() {
        let titles = TitleMap::new();
        assert_eq!(titles.resolve("guide"), "guide");
    }

    #[test]
    fn title_map_deserializes_from_toml_table() {
        let titles: TitleMap = toml::from_str("\"root-study\" = \"Study Notes\"").unwrap();
        assert_eq!(titles.resolve("root-study"), "Study Notes");
    }

    #[test]
    fn heading_from_simple_document() {
        assert_eq!(
            first_heading("# Getting Started\n\nContent."),
            Some("Getting Started".to_string())
        );
    }

    #[test]
    fn heading_skips_leading_content() {
        assert_eq!(
            first_heading("intro paragraph\n\n# The Title\n"),
            Some("The Title".to_string())
        );
    }

    #[test]
    fn heading_flattens_inline_markup() {
        assert_eq!(
            first_heading("# Using `clone` *carefully*"),
            Some("Using clone carefully".to_string())
        );
    }

    #[test]
    fn no_heading_yields_none() {
        assert_eq!(first_heading("Just text.\n\n## Only level two\n"), None);
    }

    #[test]
    fn empty_heading_ignored() {
        assert_eq!(first_heading("#\n\n# Real Title"), Some("Real Title".to_string()));
    }
}
