//! Protocol modules (inbound directives + outbound events).
//!
//! - Directives: JSON envelopes whose `payload` is kept as `RawValue` and
//!   parsed lazily by the handler owning the namespace.
//! - Events: closed set of outbound envelopes built by dedicated constructors.
//!
//! All decoding is panic-free: malformed input is reported as `BridgeError`.

pub mod directive;
pub mod event;
pub mod message_id;

/// Every envelope in either direction carries this payload version.
pub const PAYLOAD_VERSION: &str = "3";

/// Capability namespaces this bridge speaks.
pub mod namespace {
    /// Base namespace used by state/change reports.
    pub const ALEXA: &str = "Alexa";
    pub const RTC_SESSION_CONTROLLER: &str = "Alexa.RTCSessionController";
    pub const MOTION_SENSOR: &str = "Alexa.MotionSensor";
}
