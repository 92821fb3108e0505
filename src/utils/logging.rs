use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "artisan_ai=warn";
const DEBUG_FILTER: &str = "artisan_ai=debug,reqwest=info";

/// Filter directives for the given verbosity; `RUST_LOG` wins when set
pub fn filter_directives(debug: bool) -> &'static str {
    if debug { DEBUG_FILTER } else { DEFAULT_FILTER }
}

/// Install the global subscriber, writing to stderr so panels stay clean on stdout
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .try_init();
}
