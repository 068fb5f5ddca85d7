//! Tracing initialization.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with an env-filtered fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` applies
/// (typically "info").
pub fn init_tracing(default_directive: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {}", e))?;

    info!("Tracing initialized");
    Ok(())
}
