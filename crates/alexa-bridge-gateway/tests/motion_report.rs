#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use alexa_bridge_gateway::app_state::AppState;
use alexa_bridge_gateway::config;
use alexa_bridge_gateway::device::{DeviceEvent, DeviceInterface};
use alexa_bridge_gateway::reporting::{report_state, report_state_at};

mod common;
use common::{parse, SeqIds};

fn value_of(event: &DeviceEvent) -> Value {
    let env = report_state(event, &SeqIds::default()).expect("motion report");
    parse(&env.to_json().unwrap())["event"]["payload"]["change"]["properties"][0]["value"].clone()
}

#[test]
fn non_motion_interfaces_produce_nothing() {
    let ids = SeqIds::default();
    for interface in [
        DeviceInterface::VideoCamera,
        DeviceInterface::RtcSignalingChannel,
        DeviceInterface::Other("OnOff".into()),
    ] {
        for data in [json!(true), json!(false), json!(null), json!({ "motion": true })] {
            assert!(report_state(&DeviceEvent::new(interface.clone(), data), &ids).is_none());
        }
    }
}

#[test]
fn motion_true_is_detected() {
    assert_eq!(value_of(&DeviceEvent::new(DeviceInterface::MotionSensor, true)), "DETECTED");
}

#[test]
fn motion_false_is_not_detected() {
    assert_eq!(value_of(&DeviceEvent::new(DeviceInterface::MotionSensor, false)), "NOT_DETECTED");
    assert_eq!(
        value_of(&DeviceEvent::new(DeviceInterface::MotionSensor, Value::Null)),
        "NOT_DETECTED"
    );
    assert_eq!(value_of(&DeviceEvent::new(DeviceInterface::MotionSensor, 0)), "NOT_DETECTED");
}

#[test]
fn full_change_report_shape() {
    let at = Utc.with_ymd_and_hms(2025, 6, 30, 8, 0, 0).unwrap();
    let env = report_state_at(
        &DeviceEvent::new(DeviceInterface::MotionSensor, true),
        at,
        &SeqIds::default(),
    )
    .unwrap();

    assert_eq!(
        parse(&env.to_json().unwrap()),
        json!({
            "event": {
                "header": {
                    "namespace": "Alexa",
                    "name": "ChangeReport",
                    "messageId": "msg-1",
                    "payloadVersion": "3"
                },
                "payload": {
                    "change": {
                        "cause": { "type": "PHYSICAL_INTERACTION" },
                        "properties": [{
                            "namespace": "Alexa.MotionSensor",
                            "name": "detectionState",
                            "value": "DETECTED",
                            "timeOfSample": "2025-06-30T08:00:00.000Z",
                            "uncertaintyInMilliseconds": 0
                        }]
                    }
                }
            }
        })
    );
}

#[test]
fn app_state_respects_motion_toggle() {
    let event = DeviceEvent::new(DeviceInterface::MotionSensor, true);

    let on = AppState::with_message_ids(
        config::BridgeConfig::default(),
        Arc::new(SeqIds::default()),
    )
    .unwrap();
    assert!(on.report_state(&event).is_some());

    let cfg = config::load_from_str(
        r#"
version: 1
capabilities:
  motion_sensor: false
"#,
    )
    .unwrap();
    let off = AppState::new(cfg).unwrap();
    assert!(off.report_state(&event).is_none());
}
