//! # Skycast Core Library
//!
//! This library provides the classification core for the Skycast weather
//! planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Conditions**: total mapping from provider condition codes/text to a
//!   closed canonical vocabulary
//! - **Alerts**: ordered keyword rules classifying raw alert headlines into
//!   (hazard, severity) pairs
//! - **Forecast**: continuity filler guaranteeing a fixed-length daily
//!   forecast window
//! - **Context**: signal-fusion tracker estimating indoor/outdoor context
//!   from connectivity, proximity and movement signals
//! - **Provider**: WeatherAPI client and the per-payload normalization
//!   pipeline
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`ContextTracker`]: owned, start/stop lifecycle detection loop
//! - [`ContinuityFiller`]: seedable forecast window padding
//! - [`WeatherApiClient`]: provider access
//! - [`Config`]: application configuration management

pub mod alerts;
pub mod conditions;
pub mod context;
pub mod error;
pub mod events;
pub mod forecast;
pub mod provider;
pub mod storage;

pub use alerts::{classify, AlertClassification, AlertSeverity, HazardType};
pub use conditions::{normalize, normalize_text, CanonicalCondition};
pub use context::{
    fuse_signals, ContextTracker, FusionDecision, LocationContext, LocationContextState, Platform,
    SignalSnapshot, TrackerConfig,
};
pub use error::{ConfigError, CoreError, ProviderError, SignalError, ValidationError};
pub use events::Event;
pub use forecast::{ContinuityFiller, DailyForecast};
pub use provider::{normalize_payload, WeatherApiClient, WeatherSnapshot};
pub use storage::Config;
