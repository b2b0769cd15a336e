use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default file name of the site config.
pub const CONFIG_FILE: &str = "docsite.toml";

/// Contents of `docsite.toml`.
///
/// Keys are snake_case on the way in and camelCase on the way out, which is
/// what the external renderer expects.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct SiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dir: Option<String>,
    #[serde(default, rename(serialize = "themeConfig"))]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&data).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Remotes referenced by generated sidebars, in declaration order.
    pub fn remotes(&self) -> impl Iterator<Item = &str> {
        self.theme.sidebar.values().filter_map(|source| match source {
            SidebarSource::Remote { remote } => Some(remote.as_str()),
            SidebarSource::Inline(_) => None,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<Search>,
    pub last_updated: bool,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub sidebar: IndexMap<String, SidebarSource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub link: String,
}

/// "Edit this page" link. `pattern` usually contains a `:path` placeholder.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EditLink {
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Search {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// Where a section's sidebar comes from.
///
/// `{ remote = "engine" }` is generated from `docs/engine/docs.json` at
/// evaluation time; anything else is taken as written. A table with a
/// `remote` key must have nothing else in it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged, try_from = "serde_json::Value")]
pub enum SidebarSource {
    Remote { remote: String },
    Inline(serde_json::Value),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RemoteRef {
    remote: String,
}

impl TryFrom<serde_json::Value> for SidebarSource {
    type Error = serde_json::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let is_remote = value
            .as_object()
            .is_some_and(|table| table.contains_key("remote"));

        if is_remote {
            let RemoteRef { remote } = serde_json::from_value(value)?;
            Ok(SidebarSource::Remote { remote })
        } else {
            Ok(SidebarSource::Inline(value))
        }
    }
}
