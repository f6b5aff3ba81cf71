//! Write-once response sink.
//!
//! The host creates a `(ResponseSink, PendingResponse)` pair per directive,
//! hands the sink to the dispatcher and awaits the pending half. `send`
//! consumes the sink, so a directive can produce at most one response. A sink
//! dropped without sending resolves the pending half to `None`.

use tokio::sync::oneshot;

use alexa_bridge_core::error::{BridgeError, Result};
use alexa_bridge_core::protocol::event::EventEnvelope;

#[derive(Debug)]
pub struct ResponseSink {
    tx: oneshot::Sender<String>,
}

/// Receiving half of a `ResponseSink`.
#[derive(Debug)]
pub struct PendingResponse {
    rx: oneshot::Receiver<String>,
}

impl ResponseSink {
    pub fn channel() -> (ResponseSink, PendingResponse) {
        let (tx, rx) = oneshot::channel();
        (ResponseSink { tx }, PendingResponse { rx })
    }

    /// Serialize `env` and deliver it.
    pub fn send(self, env: &EventEnvelope) -> Result<()> {
        let body = env.to_json()?;
        tracing::debug!(
            namespace = %env.namespace(),
            name = %env.name(),
            message_id = %env.message_id(),
            "response sent"
        );
        self.tx.send(body).map_err(|_| BridgeError::SinkClosed)
    }

    /// True once the host dropped its `PendingResponse`.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl PendingResponse {
    /// Wait for the serialized envelope; `None` if the sink was dropped unused.
    pub async fn recv(self) -> Option<String> {
        self.rx.await.ok()
    }

    /// Non-blocking poll; `None` while nothing has been sent yet.
    pub fn try_recv(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}
