use crate::config::LOG_ENV;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber; diagnostics go to stderr, filtered by `PURVIS_LOG`.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
