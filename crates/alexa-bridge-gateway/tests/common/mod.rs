//! Fake devices and helpers shared by gateway tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use alexa_bridge_core::error::Result;
use alexa_bridge_core::protocol::directive::{decode_directive, Directive};
use alexa_bridge_core::protocol::message_id::MessageIdSource;
use alexa_bridge_gateway::device::Device;
use alexa_bridge_gateway::signaling::{
    SdpType, SessionDescription, SignalingSession, SignalingSetup,
};

pub const OFFER: &str = "v=0\r\no=- 4611731400430051336 2 IN IP4 127.0.0.1\r\ns=-\r\n";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn raw_directive(namespace: &str, name: &str, payload: Value) -> String {
    json!({
        "directive": {
            "header": {
                "namespace": namespace,
                "name": name,
                "messageId": "inbound-message-id",
                "payloadVersion": "3"
            },
            "endpoint": { "endpointId": "camera-1" },
            "payload": payload
        }
    })
    .to_string()
}

pub fn directive(namespace: &str, name: &str, payload: Value) -> Directive {
    decode_directive(&raw_directive(namespace, name, payload)).unwrap()
}

pub fn offer_payload(session_id: &str) -> Value {
    json!({ "sessionId": session_id, "offer": { "format": "SDP", "value": OFFER } })
}

pub fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

/// Deterministic ids: "msg-1", "msg-2", ...
#[derive(Default)]
pub struct SeqIds(AtomicU64);

impl MessageIdSource for SeqIds {
    fn next_id(&self) -> String {
        format!("msg-{}", self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// Answers the offer it is given, recording what it observed.
#[derive(Default)]
pub struct AnsweringDevice {
    pub starts: AtomicUsize,
    pub seen_offer: Mutex<Option<String>>,
    pub proxy: Mutex<Option<bool>>,
    pub trickle_error: Mutex<Option<String>>,
}

#[async_trait]
impl Device for AnsweringDevice {
    fn id(&self) -> &str {
        "camera-1"
    }

    async fn start_signaling_session(&self, mut session: Box<dyn SignalingSession>) -> Result<()> {
        self.starts.fetch_add(1, Ordering::SeqCst);

        let options = session.options().await?;
        *self.proxy.lock().unwrap() = Some(options.proxy);

        let setup = SignalingSetup::default();
        let offer = session.create_local_description(SdpType::Answer, &setup, None).await?;
        *self.seen_offer.lock().unwrap() = Some(offer.sdp.clone());

        let candidate = alexa_bridge_gateway::signaling::IceCandidate {
            candidate: "candidate:1 1 udp 2122260223 192.168.1.2 54321 typ host".into(),
            sdp_mid: Some("0".into()),
            sdp_m_line_index: Some(0),
        };
        if let Err(e) = session.add_ice_candidate(candidate).await {
            *self.trickle_error.lock().unwrap() = Some(e.client_code().as_str().to_string());
        }

        let answer = format!("v=0\r\ns=answer-for:{}\r\n", offer.sdp.len());
        session
            .set_remote_description(SessionDescription::answer(answer), &setup)
            .await
    }
}

/// Takes the session and never answers.
#[derive(Default)]
pub struct SilentDevice {
    pub starts: AtomicUsize,
}

#[async_trait]
impl Device for SilentDevice {
    fn id(&self) -> &str {
        "camera-silent"
    }

    async fn start_signaling_session(&self, _session: Box<dyn SignalingSession>) -> Result<()> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        Ok(())
    }
}

/// Returns at once and answers later from its own task.
#[derive(Default)]
pub struct DetachedDevice;

#[async_trait]
impl Device for DetachedDevice {
    fn id(&self) -> &str {
        "camera-detached"
    }

    async fn start_signaling_session(&self, mut session: Box<dyn SignalingSession>) -> Result<()> {
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            let setup = SignalingSetup::default();
            let _ = session
                .set_remote_description(SessionDescription::answer("v=0\r\ns=late\r\n"), &setup)
                .await;
        });
        Ok(())
    }
}

/// Reports the error it gets from `options` and stops.
#[derive(Default)]
pub struct ProbingDevice {
    pub options_error: Mutex<Option<String>>,
}

#[async_trait]
impl Device for ProbingDevice {
    fn id(&self) -> &str {
        "camera-probe"
    }

    async fn start_signaling_session(&self, session: Box<dyn SignalingSession>) -> Result<()> {
        match session.options().await {
            Ok(_) => Ok(()),
            Err(e) => {
                *self.options_error.lock().unwrap() = Some(e.client_code().as_str().to_string());
                Err(e)
            }
        }
    }
}

pub fn ids() -> Arc<dyn MessageIdSource> {
    Arc::new(SeqIds::default())
}
