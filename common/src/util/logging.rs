use log::LevelFilter;

/// Initializes the global logger. Diagnostics are written to stderr so stdout stays reserved for
/// messages consumed by the warning handler.
pub fn initialize_logging(log_level: LevelFilter) {
    let result = env_logger::builder()
        .filter_level(log_level)
        .parse_default_env() // Allow overriding log level through RUST_LOG env var
        .target(env_logger::Target::Stderr)
        .try_init();

    // A logger that is already installed (e.g. by a test harness) keeps working
    if let Err(err) = result {
        log::debug!(target: "logging", "Logger already initialized: {}", err);
    }
}
