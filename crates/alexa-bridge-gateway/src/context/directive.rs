use std::sync::Arc;

use alexa_bridge_core::protocol::message_id::MessageIdSource;

use crate::config::SignalingSection;
use crate::signaling::InFlightNegotiations;

/// Per-directive context passed to handlers (borrow tools instead of owning).
#[derive(Clone)]
pub struct DirectiveCtx {
    ids: Arc<dyn MessageIdSource>,
    signaling: SignalingSection,
    in_flight: Arc<InFlightNegotiations>,
}

impl DirectiveCtx {
    pub fn new(
        ids: Arc<dyn MessageIdSource>,
        signaling: SignalingSection,
        in_flight: Arc<InFlightNegotiations>,
    ) -> Self {
        Self {
            ids,
            signaling,
            in_flight,
        }
    }

    pub fn ids(&self) -> &dyn MessageIdSource { self.ids.as_ref() }
    pub fn shared_ids(&self) -> Arc<dyn MessageIdSource> { Arc::clone(&self.ids) }
    pub fn signaling(&self) -> &SignalingSection { &self.signaling }
    pub fn in_flight(&self) -> &Arc<InFlightNegotiations> { &self.in_flight }
}
