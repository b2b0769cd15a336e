use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use docsite_core::SidebarLoader;

use crate::config::DocsiteSettings;

pub fn make_subcommand() -> Command {
    super::add_site_args(Command::new("sidebar"))
        .about("Load one generated sidebar and print it")
        .arg(
            Arg::new("remote")
                .value_name("REMOTE")
                .help("Directory under the documentation root holding docs.json")
                .required(true),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let settings = DocsiteSettings::load(args)?;
    let remote = args
        .get_one::<String>("remote")
        .context("Missing remote")?;

    let loader = SidebarLoader::new(settings.docs_root());
    let sidebar = loader
        .load(remote)
        .with_context(|| format!("Failed to load sidebar for {remote}"))?;

    println!("{}", serde_json::to_string_pretty(&sidebar)?);

    Ok(())
}
