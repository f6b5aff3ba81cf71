//! Inbound directive envelope (JSON).
//!
//! Unknown fields are tolerated: the voice-assistant cloud adds fields over
//! time and a bridge must not reject them. `payload` is stored as `RawValue`
//! so only the handler that owns the namespace pays for parsing it.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{BridgeError, Result};
use crate::protocol::PAYLOAD_VERSION;

/// Top-level `{ "directive": { ... } }` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectiveEnvelope {
    pub directive: Directive,
}

/// Directive header.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveHeader {
    /// Capability namespace (e.g. "Alexa.RTCSessionController").
    pub namespace: String,
    /// Directive verb (e.g. "InitiateSessionWithOffer").
    pub name: String,
    pub message_id: String,
    pub payload_version: String,
    #[serde(default)]
    pub correlation_token: Option<String>,
}

/// Target endpoint of a directive. Only the id is interpreted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveEndpoint {
    pub endpoint_id: String,
}

/// One inbound directive.
#[derive(Debug, Clone, Deserialize)]
pub struct Directive {
    pub header: DirectiveHeader,
    #[serde(default)]
    pub endpoint: Option<DirectiveEndpoint>,
    /// Namespace-specific payload, raw JSON (lazy parsing).
    #[serde(default)]
    pub payload: Option<Box<RawValue>>,
}

impl Directive {
    pub fn namespace(&self) -> &str {
        &self.header.namespace
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Parse the payload into a namespace-specific type.
    ///
    /// A missing payload is parsed as `{}` so that types made of optional
    /// fields still decode.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T> {
        let raw = self.payload.as_ref().map(|p| p.get()).unwrap_or("{}");
        serde_json::from_str(raw).map_err(|e| {
            BridgeError::MalformedPayload(format!(
                "{}.{} payload: {e}",
                self.header.namespace, self.header.name
            ))
        })
    }
}

/// Decode and version-check a directive envelope.
pub fn decode_directive(s: &str) -> Result<Directive> {
    let env: DirectiveEnvelope = serde_json::from_str(s)
        .map_err(|e| BridgeError::BadRequest(format!("invalid directive json: {e}")))?;
    if env.directive.header.payload_version != PAYLOAD_VERSION {
        return Err(BridgeError::UnsupportedVersion);
    }
    Ok(env.directive)
}

/// `Alexa.RTCSessionController` payload fields this bridge reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtcSessionPayload {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub offer: Option<SdpOffer>,
}

/// `payload.offer` of `InitiateSessionWithOffer`.
#[derive(Debug, Clone, Deserialize)]
pub struct SdpOffer {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl RtcSessionPayload {
    /// SDP of `payload.offer.value`, if present.
    pub fn offer_sdp(&self) -> Option<&str> {
        self.offer.as_ref().and_then(|o| o.value.as_deref())
    }
}
