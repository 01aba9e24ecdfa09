//! Tracing subscriber setup for the command-line binary.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging based on verbosity level.
///
/// `RUST_LOG` takes precedence when set. Logs go to stderr so payslips on
/// stdout stay clean.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "kenya_payroll=debug,info"
    } else {
        "kenya_payroll=warn,warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}
