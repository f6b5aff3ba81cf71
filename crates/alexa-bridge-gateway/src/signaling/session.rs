use async_trait::async_trait;

use alexa_bridge_core::error::Result;

use super::types::{
    CandidateSender, IceCandidate, SdpType, SessionDescription, SignalingOptions, SignalingSetup,
};

/// Capability set a negotiation driver consumes.
///
/// A driver calls `options` first, then `create_local_description` for the
/// description it needs from this side, trickles candidates with
/// `add_ice_candidate` when supported, and finishes with
/// `set_remote_description` carrying its own answer.
#[async_trait]
pub trait SignalingSession: Send + Sync {
    async fn options(&self) -> Result<SignalingOptions>;

    async fn create_local_description(
        &mut self,
        kind: SdpType,
        setup: &SignalingSetup,
        candidates: Option<CandidateSender>,
    ) -> Result<SessionDescription>;

    async fn add_ice_candidate(&mut self, candidate: IceCandidate) -> Result<()>;

    async fn set_remote_description(
        &mut self,
        description: SessionDescription,
        setup: &SignalingSetup,
    ) -> Result<()>;
}
