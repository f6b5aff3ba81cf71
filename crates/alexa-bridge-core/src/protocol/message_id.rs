//! Message id generation for outbound envelopes.

use uuid::Uuid;

/// Produces a fresh, collision-resistant token per outbound envelope.
pub trait MessageIdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidMessageIds;

impl MessageIdSource for UuidMessageIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
