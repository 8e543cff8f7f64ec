use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::LocationContext;

/// Every observable change in the context tracker produces an Event.
/// The embedding layer receives these over a channel; soft signal
/// failures travel here too, separate from the state itself, so the UI
/// can show a dismissible message without the classifier ever raising.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TrackingStarted {
        at: DateTime<Utc>,
    },
    TrackingStopped {
        at: DateTime<Utc>,
    },
    /// The fused estimate changed (context or confidence).
    ContextChanged {
        context: LocationContext,
        confidence: u8,
        is_at_home: bool,
        at: DateTime<Utc>,
    },
    /// A sub-signal could not be obtained this cycle; classification
    /// proceeded in degraded mode.
    SignalUnavailable {
        signal: SignalKind,
        message: String,
        at: DateTime<Utc>,
    },
    /// The platform refused a capability at tracker start. Tracking
    /// continues without the affected signal.
    PermissionDenied {
        capability: String,
        at: DateTime<Utc>,
    },
}

/// Which device signal a soft failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Network,
    Proximity,
    Position,
}
