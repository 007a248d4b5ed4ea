use env_logger::Env;

/// Installs the global logger. `RUST_LOG` wins over the default level.
///
/// Later calls are ignored, so this is safe to reach more than once.
pub fn init_logger(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
