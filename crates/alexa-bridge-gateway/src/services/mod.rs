//! Built-in capability handlers.

pub mod initiate_session;
pub mod rtc_session;

pub use initiate_session::InitiateSessionWithOffer;
pub use rtc_session::RtcSessionController;
