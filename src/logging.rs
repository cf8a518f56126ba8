use env_logger::Env;

const DEFAULT_FILTER: &str = "warn,spotify_link_resolver=info";

/// Initialize stderr logging. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let result = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}
