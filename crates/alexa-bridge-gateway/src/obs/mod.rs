//! Tracing setup for hosts embedding the bridge.

use tracing_subscriber::{fmt, EnvFilter};

use alexa_bridge_core::error::{BridgeError, Result};

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
pub fn init_tracing() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| BridgeError::Internal(format!("tracing init failed: {e}")))
}
