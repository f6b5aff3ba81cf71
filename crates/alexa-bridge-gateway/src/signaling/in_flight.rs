use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

#[derive(Debug, Clone)]
struct Entry {
    device_id: String,
    session_id: Option<String>,
    started: Instant,
}

/// Snapshot of one negotiation still waiting on its device.
#[derive(Debug, Clone)]
pub struct NegotiationInfo {
    pub device_id: String,
    pub session_id: Option<String>,
    pub elapsed: Duration,
}

/// Registry of negotiations currently awaiting a device answer.
///
/// Entries are owned by `NegotiationGuard`s. The initiate handler hands its
/// guard to the signaling session, so an entry lives until the answer is sent
/// or the session is dropped, even when the device negotiates from its own
/// task after `start_signaling_session` returned.
#[derive(Default)]
pub struct InFlightNegotiations {
    entries: DashMap<u64, Entry>,
    seq: AtomicU64,
}

impl InFlightNegotiations {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    pub fn begin(self: &Arc<Self>, device_id: &str, session_id: Option<&str>) -> NegotiationGuard {
        let key = self.seq.fetch_add(1, Ordering::Relaxed);
        self.entries.insert(
            key,
            Entry {
                device_id: device_id.to_string(),
                session_id: session_id.map(str::to_string),
                started: Instant::now(),
            },
        );
        NegotiationGuard {
            registry: Arc::clone(self),
            key,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshot(&self) -> Vec<NegotiationInfo> {
        self.entries
            .iter()
            .map(|e| NegotiationInfo {
                device_id: e.value().device_id.clone(),
                session_id: e.value().session_id.clone(),
                elapsed: e.value().started.elapsed(),
            })
            .collect()
    }
}

/// Removes its registry entry on drop.
pub struct NegotiationGuard {
    registry: Arc<InFlightNegotiations>,
    key: u64,
}

impl Drop for NegotiationGuard {
    fn drop(&mut self) {
        self.registry.entries.remove(&self.key);
    }
}
