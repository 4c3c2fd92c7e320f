use std::error::Error;

use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Route `log` records from the library through a stderr `tracing` subscriber.
///
/// `-v` flags take precedence over `RUST_LOG`; without either only warnings
/// are shown.
pub fn init(verbosity: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
    LogTracer::init()?;

    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
