use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment};
use docsite_core::DocsRoot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// CLI settings merged from defaults, env vars, and CLI args
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocsiteSettings {
    pub build: BuildSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildSettings {
    /// Site configuration file
    pub config: String,
    /// Documentation root; defaults to `docs` next to the config file
    pub docs_root: Option<String>,
    /// Where to write the resolved configuration; stdout when unset
    pub output: Option<String>,
    /// Emit single-line JSON
    pub compact: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            config: docsite_core::config::CONFIG_FILE.to_string(),
            docs_root: None,
            output: None,
            compact: false,
        }
    }
}

impl DocsiteSettings {
    /// Load settings with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (DOCSITE_*)
    /// 3. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        let defaults = Self::default();
        builder = builder.add_source(ConfigBuilder::try_from(&defaults)?);

        builder = builder.add_source(
            Environment::with_prefix("DOCSITE")
                .prefix_separator("_")
                .separator("__"), // DOCSITE_BUILD__DOCS_ROOT -> build.docs_root
        );

        // Only look at args the current subcommand actually defines
        let mut cli_overrides = HashMap::new();
        for (arg, key) in [
            ("config", "build.config"),
            ("docs_root", "build.docs_root"),
            ("output", "build.output"),
        ] {
            if let Some(value) = args.try_get_one::<String>(arg).unwrap_or(None) {
                cli_overrides.insert(key.to_string(), value.clone());
            }
        }
        if args.try_get_one::<bool>("compact").unwrap_or(None) == Some(&true) {
            cli_overrides.insert("build.compact".to_string(), "true".to_string());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(ConfigBuilder::try_from(&cli_overrides)?);
        }

        let settings: DocsiteSettings = builder.build()?.try_deserialize()?;

        Ok(settings)
    }

    pub fn config_path(&self) -> &Path {
        Path::new(&self.build.config)
    }

    pub fn docs_root(&self) -> DocsRoot {
        match &self.build.docs_root {
            Some(root) => DocsRoot::new(root),
            None => DocsRoot::beside(self.config_path()),
        }
    }
}
