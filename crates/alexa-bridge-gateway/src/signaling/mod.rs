//! Real-time media signaling for `Alexa.RTCSessionController`.
//!
//! `SignalingSession` is the capability set a negotiation driver (the device)
//! consumes; `AlexaSignalingSession` is the single-shot implementation backed
//! by one directive and one response sink.

mod alexa;
mod in_flight;
mod session;
mod types;

pub use alexa::AlexaSignalingSession;
pub use in_flight::{InFlightNegotiations, NegotiationGuard, NegotiationInfo};
pub use session::SignalingSession;
pub use types::{
    CandidateSender, IceCandidate, MediaDirection, MediaSetup, SdpType, SessionDescription,
    SignalingOptions, SignalingSetup,
};
