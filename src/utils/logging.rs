use tracing_subscriber::EnvFilter;

/// Install the diagnostics subscriber (stderr).
///
/// `RUST_LOG` wins over the configured level. Calling it twice is harmless.
pub fn enable_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
