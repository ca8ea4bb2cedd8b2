//! Site configuration module.
//!
//! Handles loading and validating `site.toml`. Configuration lives in the
//! content root; everything has a default, so the file is optional and
//! sparse — override just the values you want.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! logo = "/assets/logo.png"  # Sidebar logo path (omit for none)
//! port = 8080                # Dev server port
//!
//! [[nav]]                    # Top navigation links, in order
//! text = "Home"
//! link = "/"
//!
//! [repo]
//! url = ""                   # Repository URL (omit to hide the repo link)
//! label = "GitHub"           # Repo link label
//! edit_link_text = "Edit this page"
//!
//! [sidebar]
//! collapse = true            # Allow groups to collapse at all
//! collapse_threshold = 5     # Collapse only groups with more children than this
//! promote_index = true       # readme.md becomes the group's own path
//! depth = 1                  # Heading levels expanded per page (0-3)
//! leaf_titles = "filename"   # "filename" or "heading" (first # heading)
//!
//! [sidebar.titles]           # Directory name → display label
//! "root-study" = "Study Notes"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::titles::{LeafTitles, TitleMap};
use crate::walk::WalkOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Sidebar logo path, relative to the site root.
    pub logo: Option<String>,
    /// Dev server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Top navigation links, in order.
    pub nav: Vec<NavLink>,
    /// Repository link settings.
    pub repo: RepoConfig,
    /// Sidebar tree construction settings.
    pub sidebar: SidebarConfig,
}

fn default_port() -> u16 {
    8080
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            logo: None,
            port: default_port(),
            nav: Vec::new(),
            repo: RepoConfig::default(),
            sidebar: SidebarConfig::default(),
        }
    }
}

/// A single top-navigation link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    /// Display text, e.g. `"Home"`.
    pub text: String,
    /// Target, e.g. `"/"` or an external URL.
    pub link: String,
}

/// Repository link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Repository URL. `None` hides the repo link entirely.
    pub url: Option<String>,
    /// Label shown for the repo link.
    pub label: String,
    /// Text for per-page edit links.
    pub edit_link_text: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            url: None,
            label: "GitHub".to_string(),
            edit_link_text: "Edit this page".to_string(),
        }
    }
}

/// Sidebar tree construction settings.
///
/// `collapse` and `promote_index` are independent knobs on purpose —
/// different sites want different combinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Whether groups may collapse at all.
    pub collapse: bool,
    /// Collapse only groups with more direct children than this.
    pub collapse_threshold: usize,
    /// Promote `readme.md` to the group's own path.
    pub promote_index: bool,
    /// Heading levels expanded per page (0-3).
    pub depth: u32,
    /// How leaf display texts are derived.
    pub leaf_titles: LeafTitles,
    /// Directory name → display label overrides.
    pub titles: TitleMap,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            collapse: true,
            collapse_threshold: 5,
            promote_index: true,
            depth: 1,
            leaf_titles: LeafTitles::default(),
            titles: TitleMap::new(),
        }
    }
}

impl SidebarConfig {
    /// Translate the config surface into walker options.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            collapse_threshold: self.collapse.then_some(self.collapse_threshold),
            promote_index: self.promote_index,
            sidebar_depth: self.depth,
            leaf_titles: self.leaf_titles,
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".into()));
        }
        if self.sidebar.depth > 3 {
            return Err(ConfigError::Validation("sidebar.depth must be 0-3".into()));
        }
        for nav in &self.nav {
            if nav.text.is_empty() || nav.link.is_empty() {
                return Err(ConfigError::Validation(
                    "nav entries need both text and link".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Load configuration for a content root.
///
/// With no override, reads `<root>/site.toml` if present, falling back to
/// defaults. An explicit `config_path` (the CLI's `--config`) is read
/// unconditionally — a missing file the user named is an error, not a
/// silent fallback. The loaded config is validated before being returned.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let config = match config_path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => {
            let default_path = root.join("site.toml");
            if default_path.exists() {
                toml::from_str(&fs::read_to_string(&default_path)?)?
            } else {
                SiteConfig::default()
            }
        }
    };
    config.validate()?;
    Ok(config)
}

/// Stock `site.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# simple-nav site configuration
# All options are optional - defaults shown below.

# Sidebar logo path, relative to the site root. Omit for no logo.
# logo = "/assets/logo.png"

# Dev server port.
port = 8080

# Top navigation links, in order.
[[nav]]
text = "Home"
link = "/"

[repo]
# Repository URL. Omit to hide the repo link.
# url = "https://github.com/you/your-site"
label = "GitHub"
edit_link_text = "Edit this page"

[sidebar]
# Whether groups may collapse at all.
collapse = true
# Collapse only groups with more direct children than this.
collapse_threshold = 5
# Promote readme.md to the group's own path instead of listing it.
promote_index = true
# Heading levels expanded per page (0-3).
depth = 1
# Leaf display text: "filename" (bare link) or "heading" (first # heading).
leaf_titles = "filename"

# Directory name -> display label overrides.
[sidebar.titles]
# "root-study" = "Study Notes"
"##
}
