//! Platform collaborator seam for the context tracker.
//!
//! Connectivity, proximity scanning and positioning are device
//! capabilities the core does not own. Every embedding supplies one
//! [`Platform`] implementation; tests use hand-rolled fakes.

use std::time::Duration;

use tokio::sync::broadcast;

use crate::error::SignalError;

/// Positioning speed above which the device counts as moving, in m/s
/// (~3.6 km/h, a slow walk).
pub const MOVING_SPEED_THRESHOLD_MPS: f64 = 1.0;

/// Current network connectivity as seen by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkStatus {
    pub wifi_connected: bool,
    /// SSID or equivalent identifier, where the platform can expose it.
    pub network_name: Option<String>,
}

/// One position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    /// Ground speed in m/s, where the fix carries one.
    pub speed_mps: Option<f64>,
}

impl Position {
    /// Whether this fix indicates outdoor movement. A single fix without a
    /// speed reading cannot establish movement and reports `false`.
    pub fn is_moving(&self) -> bool {
        self.speed_mps
            .map_or(false, |s| s > MOVING_SPEED_THRESHOLD_MPS)
    }
}

/// Device capabilities consumed by the context tracker.
///
/// Every method is fallible; the tracker treats failures as soft, replaces
/// the missing signal with its neutral value and keeps classifying on
/// whatever remains.
pub trait Platform: Send + Sync + 'static {
    /// Read the current connectivity state.
    fn network_status(&self) -> Result<NetworkStatus, SignalError>;

    /// Subscribe to connectivity-change notifications. Each received value
    /// triggers a re-detection in the tracker.
    fn subscribe_network_changes(&self) -> broadcast::Receiver<NetworkStatus>;

    /// Count nearby short-range devices, blocking for up to `window`.
    /// Runs on a blocking task; implementations may sleep.
    fn scan_nearby_devices(&self, window: Duration) -> Result<u32, SignalError>;

    /// Obtain one position fix.
    fn current_position(&self) -> Result<Position, SignalError>;

    /// Capabilities the platform knows it cannot provide, checked once at
    /// tracker start. Default: everything available.
    fn missing_permissions(&self) -> Vec<SignalError> {
        Vec::new()
    }
}
