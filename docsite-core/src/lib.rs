pub mod config;
pub mod error;
pub mod resolve;
pub mod sidebar;

// Re-export main types
pub use config::{SidebarSource, SiteConfig, ThemeConfig};
pub use error::ConfigError;
pub use resolve::{ResolvedConfig, resolve};
pub use sidebar::{DocsRoot, SidebarLoader, load_sidebar};

use std::path::Path;

/// Read `docsite.toml` at `config_path` and evaluate it against the `docs`
/// directory next to it.
pub fn load_site<P: AsRef<Path>>(config_path: P) -> error::Result<ResolvedConfig> {
    let config_path = config_path.as_ref();
    let config = SiteConfig::read(config_path)?;
    let loader = SidebarLoader::new(DocsRoot::beside(config_path));

    resolve(config, &loader)
}
