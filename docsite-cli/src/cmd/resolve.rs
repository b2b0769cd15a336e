use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use docsite_core::{SidebarLoader, SiteConfig, resolve};
use tracing::info;

use crate::config::DocsiteSettings;

pub fn make_subcommand() -> Command {
    super::add_site_args(Command::new("resolve"))
        .about("Evaluate the site config and print it as JSON")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the resolved config here instead of stdout"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print single-line JSON")
                .action(ArgAction::SetTrue),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let settings = DocsiteSettings::load(args)?;
    let config_path = settings.config_path();

    let site = SiteConfig::read(config_path)
        .with_context(|| format!("Failed to load site config {}", config_path.display()))?;

    let loader = SidebarLoader::new(settings.docs_root());
    let resolved = resolve(site, &loader).context("Failed to resolve sidebars")?;

    let json = if settings.build.compact {
        resolved.to_json()?
    } else {
        resolved.to_json_pretty()?
    };

    match &settings.build.output {
        Some(output) => {
            std::fs::write(output, json + "\n")
                .with_context(|| format!("Failed to write {output}"))?;
            info!(output = %output, "wrote resolved config");
        }
        None => println!("{json}"),
    }

    Ok(())
}
