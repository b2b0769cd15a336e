use tracing_subscriber::EnvFilter;

/// Env var that overrides the verbosity flags, e.g. `DOCSITE_LOG=docsite_core=debug`.
pub const LOG_ENV: &str = "DOCSITE_LOG";

/// Map `-v` occurrences to a filter directive. `--quiet` wins over any `-v`.
pub const fn verbosity_to_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }

    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the JSON we print.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
