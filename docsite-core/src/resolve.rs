//! Config evaluation.
//!
//! Turns a [`SiteConfig`] into the final configuration object by replacing
//! every generated sidebar with the descriptor loaded from disk. The first
//! sidebar that fails to load aborts the whole evaluation.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::{SidebarSource, SiteConfig, ThemeConfig};
use crate::error::Result;
use crate::sidebar::SidebarLoader;

/// Configuration object handed to the site renderer.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dir: Option<String>,
    pub theme_config: ResolvedTheme,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    #[serde(flatten)]
    pub theme: ThemeConfig,
    /// Every section's sidebar, generated ones already loaded.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub sidebar: IndexMap<String, Value>,
}

impl ResolvedConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Evaluate `config`, loading generated sidebars through `loader`.
pub fn resolve(config: SiteConfig, loader: &SidebarLoader) -> Result<ResolvedConfig> {
    let SiteConfig {
        title,
        description,
        src_dir,
        mut theme,
    } = config;

    let sources = std::mem::take(&mut theme.sidebar);
    let mut sidebar = IndexMap::with_capacity(sources.len());

    for (section, source) in sources {
        let value = match source {
            SidebarSource::Remote { remote } => loader.load(&remote)?,
            SidebarSource::Inline(value) => value,
        };
        sidebar.insert(section, value);
    }

    info!(
        root = %loader.root().path().display(),
        sections = sidebar.len(),
        "resolved site config"
    );

    Ok(ResolvedConfig {
        title,
        description,
        src_dir,
        theme_config: ResolvedTheme { theme, sidebar },
    })
}
