mod cmd;
mod config;
mod logging;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

fn cli() -> Command {
    Command::new("docsite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate a documentation site config and its generated sidebars")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging (repeat for more)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(cmd::resolve::make_subcommand())
        .subcommand(cmd::sidebar::make_subcommand())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    logging::init_logging(matches.get_count("verbose"), matches.get_flag("quiet"));

    match matches.subcommand() {
        Some(("resolve", args)) => cmd::resolve::execute(args),
        Some(("sidebar", args)) => cmd::sidebar::execute(args),
        _ => unreachable!("subcommand_required is set"),
    }
}
