//! Outbound envelope shape tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use serde_json::Value;

use alexa_bridge_core::protocol::event::EventEnvelope;
use alexa_bridge_core::protocol::message_id::{MessageIdSource, UuidMessageIds};

fn json(env: &EventEnvelope) -> Value {
    serde_json::from_str(&env.to_json().unwrap()).unwrap()
}

#[test]
fn answer_generated_shape() {
    let env = EventEnvelope::answer_generated("v=0\r\nanswer", &UuidMessageIds);
    let v = json(&env);

    assert_eq!(v["event"]["header"]["namespace"], "Alexa.RTCSessionController");
    assert_eq!(v["event"]["header"]["name"], "AnswerGeneratedForSession");
    assert_eq!(v["event"]["header"]["payloadVersion"], "3");
    assert_eq!(v["event"]["payload"]["answer"]["format"], "SDP");
    assert_eq!(v["event"]["payload"]["answer"]["value"], "v=0\r\nanswer");
    assert!(!v["event"]["header"]["messageId"].as_str().unwrap().is_empty());
}

#[test]
fn motion_change_report_detected() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
    let v = json(&EventEnvelope::motion_change_report(true, at, &UuidMessageIds));

    assert_eq!(v["event"]["header"]["namespace"], "Alexa");
    assert_eq!(v["event"]["header"]["name"], "ChangeReport");
    assert_eq!(v["event"]["header"]["payloadVersion"], "3");

    let change = &v["event"]["payload"]["change"];
    assert_eq!(change["cause"]["type"], "PHYSICAL_INTERACTION");
    let prop = &change["properties"][0];
    assert_eq!(prop["namespace"], "Alexa.MotionSensor");
    assert_eq!(prop["name"], "detectionState");
    assert_eq!(prop["value"], "DETECTED");
    assert_eq!(prop["timeOfSample"], "2024-03-01T12:30:05.000Z");
    assert_eq!(prop["uncertaintyInMilliseconds"], 0);
}

#[test]
fn motion_change_report_not_detected() {
    let v = json(&EventEnvelope::motion_change_report(false, Utc::now(), &UuidMessageIds));
    let prop = &v["event"]["payload"]["change"]["properties"][0];
    assert_eq!(prop["value"], "NOT_DETECTED");
    assert_eq!(prop["uncertaintyInMilliseconds"], 0);
}

#[test]
fn session_ack_echoes_name_and_session() {
    let v = json(&EventEnvelope::session_ack(
        "SessionConnected",
        Some("session-1234".into()),
        &UuidMessageIds,
    ));
    assert_eq!(v["event"]["header"]["namespace"], "Alexa.RTCSessionController");
    assert_eq!(v["event"]["header"]["name"], "SessionConnected");
    assert_eq!(v["event"]["payload"]["sessionId"], "session-1234");
}

#[test]
fn session_ack_without_session_has_empty_payload() {
    let v = json(&EventEnvelope::session_ack("SessionDisconnected", None, &UuidMessageIds));
    assert_eq!(v["event"]["payload"], serde_json::json!({}));
}

#[test]
fn message_ids_never_repeat() {
    let ids = UuidMessageIds;
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(ids.next_id()));
    }

    let a = EventEnvelope::answer_generated("v=0", &ids);
    let b = EventEnvelope::answer_generated("v=0", &ids);
    assert_ne!(a.message_id(), b.message_id());
}

#[test]
fn session_ack_keeps_session_id_json_type() {
    let v = json(&EventEnvelope::session_ack(
        "SessionConnected",
        Some(serde_json::json!(42)),
        &UuidMessageIds,
    ));
    assert_eq!(v["event"]["payload"]["sessionId"], 42);
}
