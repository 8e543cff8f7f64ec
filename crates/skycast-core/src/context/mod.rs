//! Ambient location-context detection.
//!
//! Combines independently noisy device signals -- WiFi connectivity, a
//! configured home network, a nearby-device count from a short proximity
//! scan, and an optional movement signal -- into a discrete indoor/outdoor
//! estimate with a confidence score.
//!
//! The decision core ([`fuse_signals`]) is a pure function over one
//! [`SignalSnapshot`]; the [`ContextTracker`] actor owns the lifecycle,
//! timers and platform access.

mod platform;
mod tracker;

pub use platform::{NetworkStatus, Platform, Position, MOVING_SPEED_THRESHOLD_MPS};
pub use tracker::{ContextTracker, TrackerConfig};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discrete location context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationContext {
    Indoor,
    Outdoor,
    Unknown,
}

/// Snapshot of the classifier's current estimate.
///
/// Created all-default when tracking starts, mutated only by detection
/// cycles, and discarded when tracking stops -- never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationContextState {
    pub context: LocationContext,
    /// 0-100. Zero exactly when `context` is `Unknown`; always written
    /// together with `context`.
    pub confidence: u8,
    pub is_at_home: bool,
    pub connected_network: Option<String>,
    pub nearby_device_count: u32,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for LocationContextState {
    fn default() -> Self {
        Self {
            context: LocationContext::Unknown,
            confidence: 0,
            is_at_home: false,
            connected_network: None,
            nearby_device_count: 0,
            last_updated: None,
        }
    }
}

/// One detection cycle's worth of raw signals, after degraded sub-signals
/// have been replaced by their neutral values (0 devices, not moving).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalSnapshot {
    pub wifi_connected: bool,
    pub network_name: Option<String>,
    pub nearby_devices: u32,
    /// Optional movement signal. Platforms that cannot derive speed from
    /// consecutive position fixes report `false`.
    pub moving: bool,
}

/// Outcome of fusing one signal snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FusionDecision {
    pub context: LocationContext,
    pub confidence: u8,
    pub is_at_home: bool,
}

/// Fuse one snapshot into a context decision.
///
/// Rules are evaluated in fixed priority order:
///
/// 1. home network configured and WiFi-connected (to it, when the platform
///    exposes the network name) -> indoor, 90
/// 2. WiFi-connected with > 3 nearby devices -> indoor, 70 (public space)
/// 3. no WiFi and < 2 nearby devices -> outdoor, 75
/// 4. moving -> outdoor, 80
/// 5. otherwise unknown, 0
pub fn fuse_signals(snapshot: &SignalSnapshot, home_network: Option<&str>) -> FusionDecision {
    let at_home = match home_network {
        Some(home) => {
            snapshot.wifi_connected
                && snapshot
                    .network_name
                    .as_deref()
                    .map_or(true, |name| name == home)
        }
        None => false,
    };

    if at_home {
        FusionDecision {
            context: LocationContext::Indoor,
            confidence: 90,
            is_at_home: true,
        }
    } else if snapshot.wifi_connected && snapshot.nearby_devices > 3 {
        // On WiFi among many short-range devices: likely an indoor
        // public space.
        FusionDecision {
            context: LocationContext::Indoor,
            confidence: 70,
            is_at_home: false,
        }
    } else if !snapshot.wifi_connected && snapshot.nearby_devices < 2 {
        FusionDecision {
            context: LocationContext::Outdoor,
            confidence: 75,
            is_at_home: false,
        }
    } else if snapshot.moving {
        FusionDecision {
            context: LocationContext::Outdoor,
            confidence: 80,
            is_at_home: false,
        }
    } else {
        FusionDecision {
            context: LocationContext::Unknown,
            confidence: 0,
            is_at_home: false,
        }
    }
}
