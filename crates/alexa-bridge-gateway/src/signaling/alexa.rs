use std::sync::Arc;

use async_trait::async_trait;

use alexa_bridge_core::error::{BridgeError, Result};
use alexa_bridge_core::protocol::directive::RtcSessionPayload;
use alexa_bridge_core::protocol::event::EventEnvelope;
use alexa_bridge_core::protocol::message_id::MessageIdSource;

use super::in_flight::NegotiationGuard;
use super::session::SignalingSession;
use super::types::{
    CandidateSender, IceCandidate, SdpType, SessionDescription, SignalingOptions, SignalingSetup,
};
use crate::sink::ResponseSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Holding the remote offer, waiting for the driver's answer.
    Offered,
    /// Answer sent. Terminal.
    Completed,
}

/// One `InitiateSessionWithOffer` exchange presented as a `SignalingSession`.
///
/// The offer comes from the voice-assistant cloud, so this side acts as a
/// proxy: `create_local_description` hands the stored offer back instead of
/// generating one, and the driver's answer is forwarded as a single
/// `AnswerGeneratedForSession` event. The upstream protocol has no channel for
/// candidates, so trickle ICE always fails.
pub struct AlexaSignalingSession {
    phase: Phase,
    session_id: Option<String>,
    offer: Option<String>,
    sink: Option<ResponseSink>,
    ids: Arc<dyn MessageIdSource>,
    tracked: Option<NegotiationGuard>,
}

impl AlexaSignalingSession {
    pub fn new(
        payload: RtcSessionPayload,
        sink: ResponseSink,
        ids: Arc<dyn MessageIdSource>,
    ) -> Self {
        let offer = payload.offer_sdp().map(str::to_owned);
        Self {
            phase: Phase::Offered,
            session_id: payload.session_id,
            offer,
            sink: Some(sink),
            ids,
            tracked: None,
        }
    }

    /// Keep `guard` alive until the answer is sent or the session is dropped,
    /// wherever the device moves the session to.
    pub fn tracked_by(mut self, guard: NegotiationGuard) -> Self {
        self.tracked = Some(guard);
        self
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    fn ensure_open(&self, op: &'static str) -> Result<()> {
        if self.phase == Phase::Completed {
            tracing::warn!(
                session_id = ?self.session_id,
                op,
                "signaling session reused after answer"
            );
            return Err(BridgeError::SessionCompleted);
        }
        Ok(())
    }

    fn stored_offer(&self) -> Result<SessionDescription> {
        self.offer
            .as_deref()
            .map(SessionDescription::offer)
            .ok_or_else(|| {
                BridgeError::MalformedPayload(
                    "InitiateSessionWithOffer missing payload.offer.value".into(),
                )
            })
    }
}

#[async_trait]
impl SignalingSession for AlexaSignalingSession {
    async fn options(&self) -> Result<SignalingOptions> {
        self.ensure_open("options")?;
        Ok(SignalingOptions {
            proxy: true,
            offer: Some(self.stored_offer()?),
        })
    }

    async fn create_local_description(
        &mut self,
        _kind: SdpType,
        _setup: &SignalingSetup,
        _candidates: Option<CandidateSender>,
    ) -> Result<SessionDescription> {
        self.ensure_open("create_local_description")?;
        // Always the remote offer, whatever the driver asked for.
        self.stored_offer()
    }

    async fn add_ice_candidate(&mut self, _candidate: IceCandidate) -> Result<()> {
        Err(BridgeError::UnsupportedOperation(
            "trickle ICE is not supported by Alexa".into(),
        ))
    }

    async fn set_remote_description(
        &mut self,
        description: SessionDescription,
        _setup: &SignalingSetup,
    ) -> Result<()> {
        self.ensure_open("set_remote_description")?;
        let sink = self.sink.take().ok_or(BridgeError::SessionCompleted)?;
        self.phase = Phase::Completed;
        self.tracked.take();

        let env = EventEnvelope::answer_generated(description.sdp, self.ids.as_ref());
        tracing::debug!(
            session_id = ?self.session_id,
            message_id = %env.message_id(),
            "answer generated"
        );
        sink.send(&env)
    }
}
