//! alexa-bridge core: transport-agnostic protocol primitives and error types.
//!
//! This crate defines the directive/event wire contracts and the error surface
//! shared by the gateway and any host embedding it. It carries no runtime or
//! transport dependencies so the codec can be reused from any context.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `BridgeError`/`Result` so a malformed
//! directive never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{BridgeError, ClientCode, Result};
