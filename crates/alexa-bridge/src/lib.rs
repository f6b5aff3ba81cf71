//! Top-level facade crate for alexa-bridge.
//!
//! Re-exports the protocol core and the gateway library so hosts can depend on a single crate.

pub mod core {
    pub use alexa_bridge_core::*;
}

pub mod gateway {
    pub use alexa_bridge_gateway::*;
}
