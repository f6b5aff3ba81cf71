//! Shared application state for the bridge.
//!
//! Built once at startup: registers the enabled capability handlers, then
//! freezes the registry behind an `Arc`. Cloning is cheap; every clone sees
//! the same read-only registry and in-flight negotiation table.

use std::sync::Arc;

use alexa_bridge_core::error::Result;
use alexa_bridge_core::protocol::directive::decode_directive;
use alexa_bridge_core::protocol::event::EventEnvelope;
use alexa_bridge_core::protocol::message_id::{MessageIdSource, UuidMessageIds};

use crate::config::BridgeConfig;
use crate::context::DirectiveCtx;
use crate::device::{Device, DeviceEvent};
use crate::dispatch::{Dispatched, Dispatcher};
use crate::reporting;
use crate::services::RtcSessionController;
use crate::signaling::InFlightNegotiations;
use crate::sink::ResponseSink;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    dispatcher: Arc<Dispatcher>,
    in_flight: Arc<InFlightNegotiations>,
    ids: Arc<dyn MessageIdSource>,
}

struct AppStateInner {
    cfg: BridgeConfig,
}

impl AppState {
    /// Build application state with UUID message ids.
    /// Returns Result so startup errors reach the host instead of panicking.
    pub fn new(cfg: BridgeConfig) -> Result<Self> {
        Self::with_message_ids(cfg, Arc::new(UuidMessageIds))
    }

    pub fn with_message_ids(cfg: BridgeConfig, ids: Arc<dyn MessageIdSource>) -> Result<Self> {
        cfg.validate()?;

        let mut dispatcher = Dispatcher::new();
        if cfg.capabilities.rtc_session_controller {
            dispatcher.register(Arc::new(RtcSessionController::with_defaults()?))?;
        }

        tracing::info!(
            namespaces = ?dispatcher.registered_namespaces(),
            motion_reports = cfg.capabilities.motion_sensor,
            "alexa bridge ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            dispatcher: Arc::new(dispatcher),
            in_flight: Arc::new(InFlightNegotiations::new()),
            ids,
        })
    }

    pub fn cfg(&self) -> &BridgeConfig {
        &self.inner.cfg
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn in_flight(&self) -> Arc<InFlightNegotiations> {
        Arc::clone(&self.in_flight)
    }

    pub fn ctx(&self) -> DirectiveCtx {
        DirectiveCtx::new(
            Arc::clone(&self.ids),
            self.inner.cfg.signaling.clone(),
            Arc::clone(&self.in_flight),
        )
    }

    /// Decode one raw directive document and dispatch it.
    pub async fn handle_directive(
        &self,
        raw: &str,
        sink: ResponseSink,
        device: Arc<dyn Device>,
    ) -> Result<Dispatched> {
        let directive = decode_directive(raw)?;
        self.dispatcher.dispatch(self.ctx(), directive, sink, device).await
    }

    /// Change report for a device event, if reporting is enabled and applies.
    pub fn report_state(&self, event: &DeviceEvent) -> Option<EventEnvelope> {
        if !self.inner.cfg.capabilities.motion_sensor {
            return None;
        }
        reporting::report_state(event, self.ids.as_ref())
    }
}
