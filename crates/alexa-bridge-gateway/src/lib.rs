//! alexa-bridge gateway library entry.
//!
//! This crate wires the capability dispatcher, RTC session handlers, the
//! single-shot signaling adapter and proactive reporting into one bridge. It
//! is consumed by hosts that own the transport and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod context;
pub mod device;
pub mod dispatch;
pub mod obs;
pub mod reporting;
pub mod services;
pub mod signaling;
pub mod sink;
