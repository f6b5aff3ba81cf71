//! Shared error type across alexa-bridge crates.

use thiserror::Error;

/// Alexa `ErrorResponse` types (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Directive could not be understood.
    InvalidDirective,
    /// A payload value is missing or out of range.
    InvalidValue,
    /// The operation is not available for this endpoint.
    NotSupportedInCurrentMode,
    /// The device did not respond in time.
    EndpointUnreachable,
    /// Internal bridge error.
    InternalError,
}

impl ClientCode {
    /// String representation used as `payload.type` of an Alexa error event.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidDirective => "INVALID_DIRECTIVE",
            ClientCode::InvalidValue => "INVALID_VALUE",
            ClientCode::NotSupportedInCurrentMode => "NOT_SUPPORTED_IN_CURRENT_MODE",
            ClientCode::EndpointUnreachable => "ENDPOINT_UNREACHABLE",
            ClientCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported payload version")]
    UnsupportedVersion,
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// Deliberately unsupported by the upstream protocol. Never retry.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("signaling session already completed")]
    SessionCompleted,
    #[error("negotiation timed out after {0} ms")]
    NegotiationTimeout(u64),
    #[error("response sink closed")]
    SinkClosed,
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            BridgeError::BadRequest(_) => ClientCode::InvalidDirective,
            BridgeError::UnsupportedVersion => ClientCode::InvalidDirective,
            BridgeError::MalformedPayload(_) => ClientCode::InvalidValue,
            BridgeError::UnsupportedOperation(_) => ClientCode::NotSupportedInCurrentMode,
            BridgeError::SessionCompleted => ClientCode::InternalError,
            BridgeError::NegotiationTimeout(_) => ClientCode::EndpointUnreachable,
            BridgeError::SinkClosed => ClientCode::InternalError,
            BridgeError::Config(_) => ClientCode::InternalError,
            BridgeError::Internal(_) => ClientCode::InternalError,
        }
    }
}
