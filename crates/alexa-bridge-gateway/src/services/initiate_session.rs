use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::timeout;

use alexa_bridge_core::error::{BridgeError, Result};
use alexa_bridge_core::protocol::directive::{Directive, RtcSessionPayload};

use crate::context::DirectiveCtx;
use crate::device::Device;
use crate::dispatch::RtcDirectiveHandler;
use crate::signaling::AlexaSignalingSession;
use crate::sink::ResponseSink;

/// `InitiateSessionWithOffer`: wraps the offer in a single-shot signaling
/// session and hands it to the device. The device's answer is the response.
#[derive(Default)]
pub struct InitiateSessionWithOffer;

impl InitiateSessionWithOffer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RtcDirectiveHandler for InitiateSessionWithOffer {
    fn name(&self) -> &'static str {
        "InitiateSessionWithOffer"
    }

    async fn handle(
        &self,
        ctx: DirectiveCtx,
        directive: Directive,
        sink: ResponseSink,
        device: Arc<dyn Device>,
    ) -> Result<()> {
        let validate = ctx.signaling().validate_offer;

        let payload: RtcSessionPayload = match directive.payload_as() {
            Ok(p) => p,
            Err(e) if validate => return Err(e),
            Err(e) => {
                tracing::debug!(error = %e, "unreadable offer payload, deferring to device");
                RtcSessionPayload::default()
            }
        };

        if validate && payload.offer_sdp().map_or(true, str::is_empty) {
            return Err(BridgeError::MalformedPayload(
                "InitiateSessionWithOffer requires a non-empty payload.offer.value".into(),
            ));
        }

        let guard = ctx.in_flight().begin(device.id(), payload.session_id.as_deref());
        let session = AlexaSignalingSession::new(payload, sink, ctx.shared_ids()).tracked_by(guard);
        tracing::info!(
            device = %device.id(),
            session_id = ?session.session_id(),
            "rtc negotiation start"
        );

        let limit_ms = ctx.signaling().negotiation_timeout_ms;
        let negotiation = device.start_signaling_session(Box::new(session));
        let res = match ctx.signaling().negotiation_timeout() {
            Some(limit) => match timeout(limit, negotiation).await {
                Ok(res) => res,
                Err(_) => {
                    tracing::warn!(
                        device = %device.id(),
                        timeout_ms = limit_ms,
                        "rtc negotiation timed out"
                    );
                    return Err(BridgeError::NegotiationTimeout(limit_ms));
                }
            },
            None => negotiation.await,
        };

        tracing::debug!(device = %device.id(), ok = res.is_ok(), "rtc negotiation finished");
        res
    }
}
