//! Collaborator seam towards the local device layer.

use async_trait::async_trait;
use serde_json::Value;

use alexa_bridge_core::error::Result;

use crate::signaling::SignalingSession;

/// A local media-capable device addressed by a directive.
#[async_trait]
pub trait Device: Send + Sync {
    fn id(&self) -> &str;

    /// Negotiation entry point. The device drives `session` through
    /// offer/answer, either before returning or from its own task after
    /// moving the session there. The negotiation counts as in flight until
    /// the answer is sent or the session is dropped.
    async fn start_signaling_session(&self, session: Box<dyn SignalingSession>) -> Result<()>;
}

/// Device interface an event originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceInterface {
    MotionSensor,
    VideoCamera,
    RtcSignalingChannel,
    Other(String),
}

/// State change emitted by a device.
#[derive(Debug, Clone)]
pub struct DeviceEvent {
    pub interface: DeviceInterface,
    pub data: Value,
}

impl DeviceEvent {
    pub fn new(interface: DeviceInterface, data: impl Into<Value>) -> Self {
        Self {
            interface,
            data: data.into(),
        }
    }

    /// Loose truthiness of `data`: `null`, `false`, `0` and `""` are false.
    pub fn is_truthy(&self) -> bool {
        match &self.data {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
