use std::time::Duration;

use serde::Deserialize;
use alexa_bridge_core::error::{BridgeError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    pub version: u32,

    #[serde(default)]
    pub signaling: SignalingSection,

    #[serde(default)]
    pub capabilities: CapabilitySection,
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BridgeError::UnsupportedVersion);
        }

        self.signaling.validate()?;
        self.capabilities.validate()?;

        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            signaling: SignalingSection::default(),
            capabilities: CapabilitySection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalingSection {
    /// Upper bound for one offer/answer negotiation. `0` disables the limit.
    #[serde(default = "default_negotiation_timeout_ms")]
    pub negotiation_timeout_ms: u64,

    /// Reject `InitiateSessionWithOffer` without `payload.offer.value` before
    /// the device is involved.
    #[serde(default = "default_true")]
    pub validate_offer: bool,
}

impl Default for SignalingSection {
    fn default() -> Self {
        Self {
            negotiation_timeout_ms: default_negotiation_timeout_ms(),
            validate_offer: true,
        }
    }
}

impl SignalingSection {
    pub fn validate(&self) -> Result<()> {
        if self.negotiation_timeout_ms > 600000 {
            return Err(BridgeError::Config(
                "signaling.negotiation_timeout_ms must be at most 600000".into(),
            ));
        }
        Ok(())
    }

    pub fn negotiation_timeout(&self) -> Option<Duration> {
        match self.negotiation_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilitySection {
    /// Register the `Alexa.RTCSessionController` handler.
    #[serde(default = "default_true")]
    pub rtc_session_controller: bool,

    /// Emit `Alexa.MotionSensor` change reports.
    #[serde(default = "default_true")]
    pub motion_sensor: bool,
}

impl Default for CapabilitySection {
    fn default() -> Self {
        Self {
            rtc_session_controller: true,
            motion_sensor: true,
        }
    }
}

impl CapabilitySection {
    pub fn validate(&self) -> Result<()> {
        if !self.rtc_session_controller && !self.motion_sensor {
            return Err(BridgeError::Config(
                "capabilities: at least one capability must be enabled".into(),
            ));
        }
        Ok(())
    }
}

fn default_negotiation_timeout_ms() -> u64 {
    30000
}
fn default_true() -> bool {
    true
}
