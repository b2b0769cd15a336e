pub mod resolve;
pub mod sidebar;

use clap::{Arg, Command};

/// Args shared by every command that needs to find the site config.
pub fn add_site_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Site configuration file [default: ./docsite.toml]"),
        )
        .arg(
            Arg::new("docs_root")
                .long("docs-root")
                .value_name("DIR")
                .help("Documentation root [default: docs/ next to the config file]"),
        )
}
