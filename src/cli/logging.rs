use log::LevelFilter;

/// Pick the default log level from the verbosity flags.
///
/// `--quiet` wins over `--verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize the logger on stderr. `RUST_LOG` overrides the flag-derived level.
pub fn init(verbose: bool, quiet: bool) {
    let default = level_for(verbose, quiet).to_string().to_lowercase();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
