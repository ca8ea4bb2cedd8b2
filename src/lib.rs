//! # Simple Nav
//!
//! A minimal sidebar navigation generator for markdown documentation sites.
//! Your filesystem is the data source: directories become sidebar groups,
//! markdown files become page links, and the sidebar mirrors the nesting on
//! disk.
//!
//! # Architecture: One Pass, One Artifact
//!
//! ```text
//! Walk    docs/  →  sidebar.json    (filesystem → sidebar configuration)
//! ```
//!
//! The walk is a single synchronous depth-first pass over the content tree,
//! rebuilt fresh on every invocation. There is no cache, no incremental
//! state, and no recovery path: this runs once at site build time under
//! operator control, so filesystem errors simply propagate and abort.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`walk`] | The tree builder — walks the content directory and produces sidebar groups |
//! | [`types`] | The serialized sidebar shape (`NavNode`, `NavGroup`, `Sidebar`) |
//! | [`titles`] | Title resolution: injected directory-name remapping, heading extraction |
//! | [`config`] | `site.toml` loading, validation, and the documented stock config |
//! | [`output`] | CLI output formatting — tree display and content stats |
//!
//! # Design Decisions
//!
//! ## The Filesystem Is the Sidebar
//!
//! There is no separate table of contents to maintain. Hidden entries
//! (dot-prefixed) never appear; `readme.md` is promoted to its group's own
//! path; everything else shows up where it lives. The only escape hatch is
//! `[sidebar.titles]` in `site.toml`, which remaps raw directory names to
//! friendlier labels.
//!
//! ## Section Order Is Part of the Contract
//!
//! The consuming framework resolves a page's sidebar section by first
//! prefix match over the emitted object's keys. [`types::Sidebar`] therefore
//! keeps sections as an ordered sequence and serializes them in stored
//! order, with the catch-all `/` section last — a sorted map would put `/`
//! first and shadow every other section.
//!
//! ## A Seam for Tests
//!
//! Directory listing goes through [`walk::EntrySource`], with
//! [`walk::DiskSource`] as the production implementation. Walk logic is
//! tested against an in-memory fake, so the interesting cases (ordering,
//! hidden entries, promotion) don't need disk fixtures.

pub mod config;
pub mod output;
pub mod titles;
pub mod types;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
