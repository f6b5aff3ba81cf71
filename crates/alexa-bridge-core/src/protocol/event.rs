//! Outbound event envelopes (JSON).
//!
//! The payload shape depends on `header.name`, so payloads form a closed enum
//! and every envelope is built by a dedicated constructor. Each constructor
//! draws a fresh message id and stamps `payloadVersion = "3"`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::{BridgeError, Result};
use crate::protocol::message_id::MessageIdSource;
use crate::protocol::{namespace, PAYLOAD_VERSION};

/// `header.name` of the RTC answer event.
pub const ANSWER_GENERATED_FOR_SESSION: &str = "AnswerGeneratedForSession";
/// `header.name` of a change report.
pub const CHANGE_REPORT: &str = "ChangeReport";

/// Top-level `{ "event": { ... } }` wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope {
    pub event: Event,
}

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub header: EventHeader,
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHeader {
    pub namespace: String,
    pub name: String,
    pub message_id: String,
    pub payload_version: &'static str,
}

/// Payload variants, keyed by `header.name`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    ChangeReport(ChangeReportPayload),
    AnswerGenerated(AnswerGeneratedPayload),
    SessionAck(SessionAckPayload),
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangeReportPayload {
    pub change: Change,
}

#[derive(Debug, Clone, Serialize)]
pub struct Change {
    pub cause: ChangeCause,
    pub properties: Vec<PropertyReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangeCause {
    #[serde(rename = "type")]
    pub cause_type: CauseType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CauseType {
    PhysicalInteraction,
}

/// One reported property inside a change report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyReport {
    pub namespace: String,
    pub name: String,
    pub value: DetectionState,
    /// RFC 3339, millisecond precision, `Z` suffix.
    pub time_of_sample: String,
    pub uncertainty_in_milliseconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionState {
    Detected,
    NotDetected,
}

impl From<bool> for DetectionState {
    fn from(detected: bool) -> Self {
        if detected {
            DetectionState::Detected
        } else {
            DetectionState::NotDetected
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerGeneratedPayload {
    pub answer: SdpAnswer,
}

#[derive(Debug, Clone, Serialize)]
pub struct SdpAnswer {
    pub format: &'static str,
    pub value: String,
}

/// Acknowledgment carrying the caller's session id forward, as sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAckPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Value>,
}

impl EventEnvelope {
    fn new(
        namespace: &str,
        name: &str,
        payload: EventPayload,
        ids: &dyn MessageIdSource,
    ) -> Self {
        Self {
            event: Event {
                header: EventHeader {
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                    message_id: ids.next_id(),
                    payload_version: PAYLOAD_VERSION,
                },
                payload,
            },
        }
    }

    /// `Alexa.ChangeReport` for a motion sensor transition.
    pub fn motion_change_report(
        detected: bool,
        time_of_sample: DateTime<Utc>,
        ids: &dyn MessageIdSource,
    ) -> Self {
        let payload = ChangeReportPayload {
            change: Change {
                cause: ChangeCause {
                    cause_type: CauseType::PhysicalInteraction,
                },
                properties: vec![PropertyReport {
                    namespace: namespace::MOTION_SENSOR.to_string(),
                    name: "detectionState".to_string(),
                    value: DetectionState::from(detected),
                    time_of_sample: time_of_sample.to_rfc3339_opts(SecondsFormat::Millis, true),
                    uncertainty_in_milliseconds: 0,
                }],
            },
        };
        Self::new(
            namespace::ALEXA,
            CHANGE_REPORT,
            EventPayload::ChangeReport(payload),
            ids,
        )
    }

    /// `Alexa.RTCSessionController.AnswerGeneratedForSession`.
    pub fn answer_generated(sdp: impl Into<String>, ids: &dyn MessageIdSource) -> Self {
        let payload = AnswerGeneratedPayload {
            answer: SdpAnswer {
                format: "SDP",
                value: sdp.into(),
            },
        };
        Self::new(
            namespace::RTC_SESSION_CONTROLLER,
            ANSWER_GENERATED_FOR_SESSION,
            EventPayload::AnswerGenerated(payload),
            ids,
        )
    }

    /// Generic RTC acknowledgment: echoes the directive name and session id.
    pub fn session_ack(
        name: &str,
        session_id: Option<Value>,
        ids: &dyn MessageIdSource,
    ) -> Self {
        Self::new(
            namespace::RTC_SESSION_CONTROLLER,
            name,
            EventPayload::SessionAck(SessionAckPayload { session_id }),
            ids,
        )
    }

    pub fn namespace(&self) -> &str {
        &self.event.header.namespace
    }

    pub fn name(&self) -> &str {
        &self.event.header.name
    }

    pub fn message_id(&self) -> &str {
        &self.event.header.message_id
    }

    /// Serialize for the response sink.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| BridgeError::Internal(format!("event encode failed: {e}")))
    }
}
