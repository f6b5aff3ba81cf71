//! Per-directive context types shared across layers.
//!
//! The context lends handlers the process-wide collaborators (message ids,
//! signaling settings, in-flight registry) without coupling them to the host.

pub mod directive;

pub use directive::DirectiveCtx;
