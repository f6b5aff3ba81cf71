use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use alexa_bridge_core::error::{BridgeError, Result};
use alexa_bridge_core::protocol::directive::Directive;
use alexa_bridge_core::protocol::event::EventEnvelope;
use alexa_bridge_core::protocol::namespace;

use crate::context::DirectiveCtx;
use crate::device::Device;
use crate::dispatch::{CapabilityHandler, RtcDirectiveHandler};
use crate::services::InitiateSessionWithOffer;
use crate::sink::ResponseSink;

/// `Alexa.RTCSessionController`: routes by directive name, acknowledges the rest.
#[derive(Default)]
pub struct RtcSessionController {
    handlers: HashMap<&'static str, Arc<dyn RtcDirectiveHandler>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AckReq {
    /// Echoed verbatim, whatever JSON type the caller used.
    #[serde(default)]
    session_id: Option<Value>,
}

impl RtcSessionController {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Controller with the built-in sub-handlers registered.
    pub fn with_defaults() -> Result<Self> {
        let mut c = Self::new();
        c.register(Arc::new(InitiateSessionWithOffer::new()))?;
        Ok(c)
    }

    pub fn register(&mut self, handler: Arc<dyn RtcDirectiveHandler>) -> Result<()> {
        let name = handler.name();
        if self.handlers.contains_key(name) {
            return Err(BridgeError::Config(format!("duplicate rtc directive handler: {name}")));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    pub fn registered_directives(&self) -> Vec<&'static str> {
        let mut v: Vec<&'static str> = self.handlers.keys().copied().collect();
        v.sort_unstable();
        v
    }
}

#[async_trait]
impl CapabilityHandler for RtcSessionController {
    fn namespace(&self) -> &'static str {
        namespace::RTC_SESSION_CONTROLLER
    }

    async fn handle(
        &self,
        ctx: DirectiveCtx,
        directive: Directive,
        sink: ResponseSink,
        device: Arc<dyn Device>,
    ) -> Result<()> {
        if let Some(handler) = self.handlers.get(directive.name()).cloned() {
            return handler.handle(ctx, directive, sink, device).await;
        }

        // A payload that is not an object is still acknowledged, without a session id.
        let req: AckReq = directive.payload_as().unwrap_or_default();
        tracing::debug!(name = %directive.name(), session_id = ?req.session_id, "rtc default ack");

        let env = EventEnvelope::session_ack(directive.name(), req.session_id, ctx.ids());
        sink.send(&env)
    }
}
