//! Proactive state reports for device-originated events.
//!
//! Only motion sensor transitions are reported; events from any other
//! interface yield `None`.

use chrono::{DateTime, Utc};

use alexa_bridge_core::protocol::event::EventEnvelope;
use alexa_bridge_core::protocol::message_id::MessageIdSource;

use crate::device::{DeviceEvent, DeviceInterface};

/// Change report for `event`, sampled now.
pub fn report_state(event: &DeviceEvent, ids: &dyn MessageIdSource) -> Option<EventEnvelope> {
    report_state_at(event, Utc::now(), ids)
}

pub fn report_state_at(
    event: &DeviceEvent,
    time_of_sample: DateTime<Utc>,
    ids: &dyn MessageIdSource,
) -> Option<EventEnvelope> {
    if event.interface != DeviceInterface::MotionSensor {
        return None;
    }
    Some(EventEnvelope::motion_change_report(event.is_truthy(), time_of_sample, ids))
}
