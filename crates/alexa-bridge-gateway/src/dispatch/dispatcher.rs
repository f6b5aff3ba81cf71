use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use alexa_bridge_core::error::{BridgeError, Result};
use alexa_bridge_core::protocol::directive::Directive;

use crate::context::DirectiveCtx;
use crate::device::Device;
use crate::sink::ResponseSink;

/// Handler for one capability namespace.
#[async_trait]
pub trait CapabilityHandler: Send + Sync {
    fn namespace(&self) -> &'static str;
    async fn handle(
        &self,
        ctx: DirectiveCtx,
        directive: Directive,
        sink: ResponseSink,
        device: Arc<dyn Device>,
    ) -> Result<()>;
}

/// Handler for one directive name inside `Alexa.RTCSessionController`.
/// Owns producing the response once selected.
#[async_trait]
pub trait RtcDirectiveHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle(
        &self,
        ctx: DirectiveCtx,
        directive: Directive,
        sink: ResponseSink,
        device: Arc<dyn Device>,
    ) -> Result<()>;
}

/// Outcome of a dispatch that did not fail.
#[derive(Debug)]
pub enum Dispatched {
    /// Exactly one handler ran.
    Handled,
    /// No handler for the namespace; the sink is returned untouched.
    Unhandled(ResponseSink),
}

impl Dispatched {
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatched::Handled)
    }
}

/// Namespace registry. Filled at startup, read-only once shared.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<&'static str, Arc<dyn CapabilityHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn CapabilityHandler>) -> Result<()> {
        let ns = handler.namespace();
        if self.handlers.contains_key(ns) {
            return Err(BridgeError::Config(format!("duplicate capability handler: {ns}")));
        }
        self.handlers.insert(ns, handler);
        Ok(())
    }

    pub fn registered_namespaces(&self) -> Vec<&'static str> {
        let mut v: Vec<&'static str> = self.handlers.keys().copied().collect();
        v.sort_unstable();
        v
    }

    pub async fn dispatch(
        &self,
        ctx: DirectiveCtx,
        directive: Directive,
        sink: ResponseSink,
        device: Arc<dyn Device>,
    ) -> Result<Dispatched> {
        let Some(handler) = self.handlers.get(directive.namespace()).cloned() else {
            tracing::debug!(
                namespace = %directive.namespace(),
                name = %directive.name(),
                "no capability handler"
            );
            return Ok(Dispatched::Unhandled(sink));
        };

        tracing::debug!(
            namespace = %directive.namespace(),
            name = %directive.name(),
            device = %device.id(),
            "dispatch"
        );
        handler.handle(ctx, directive, sink, device).await?;
        Ok(Dispatched::Handled)
    }
}
