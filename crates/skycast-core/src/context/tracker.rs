//! Context tracker lifecycle and detection loop.
//!
//! [`ContextTracker`] is an explicitly constructed, caller-owned object --
//! no process-wide singleton. `start()` spawns a tokio actor that owns the
//! [`LocationContextState`] outright (single-writer); consumers read
//! through a `watch` channel and listen for [`Event`]s on an mpsc channel.
//!
//! One detection cycle reads the network status, runs a bounded proximity
//! scan on a blocking task, takes a position fix, and fuses the three.
//! At most one cycle is in flight; connectivity flaps arriving while a
//! scan runs are coalesced into a single follow-up cycle. `stop()` wins
//! over any in-flight cycle: the cycle future is dropped before it can
//! publish, so a scan completing after stop never mutates state.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

use super::platform::Platform;
use super::{fuse_signals, LocationContextState, SignalSnapshot};
use crate::events::{Event, SignalKind};
use crate::storage::Config;

/// Tunable parameters for the tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Home network identifier, compared against the connected network.
    pub home_network: Option<String>,
    /// Proximity scan window per detection cycle.
    pub scan_window: Duration,
    /// Period of the background re-detection timer.
    pub detection_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            home_network: None,
            scan_window: Duration::from_secs(3),
            detection_interval: Duration::from_secs(300),
        }
    }
}

impl TrackerConfig {
    /// Build from the application config (`[home]` and `[location]`
    /// sections).
    pub fn from_config(config: &Config) -> Self {
        Self {
            home_network: config.home.network_ssid.clone(),
            scan_window: Duration::from_millis(config.location.scan_window_ms),
            detection_interval: Duration::from_secs(config.location.detection_interval_secs),
        }
    }
}

enum Command {
    Detect,
    Stop,
}

/// Handle to a running detection loop.
pub struct ContextTracker {
    command_tx: mpsc::Sender<Command>,
    state_rx: watch::Receiver<LocationContextState>,
    handle: JoinHandle<()>,
}

impl ContextTracker {
    /// Start tracking: report missing permissions, run an immediate
    /// detection cycle, then re-detect on every connectivity change and on
    /// the periodic timer.
    ///
    /// Returns the tracker handle and the event channel receiver.
    pub fn start<P: Platform>(
        platform: Arc<P>,
        config: TrackerConfig,
    ) -> (Self, mpsc::Receiver<Event>) {
        let (event_tx, event_rx) = mpsc::channel(64);
        let (command_tx, command_rx) = mpsc::channel(8);
        let (state_tx, state_rx) = watch::channel(LocationContextState::default());

        let handle = tokio::spawn(run_loop(platform, config, state_tx, event_tx, command_rx));

        (
            Self {
                command_tx,
                state_rx,
                handle,
            },
            event_rx,
        )
    }

    /// Latest fused estimate.
    pub fn state(&self) -> LocationContextState {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state updates (e.g. for a display layer polling
    /// concurrently with the detection loop).
    pub fn watch(&self) -> watch::Receiver<LocationContextState> {
        self.state_rx.clone()
    }

    /// Request an immediate re-detection outside the normal triggers.
    pub async fn detect_now(&self) {
        let _ = self.command_tx.send(Command::Detect).await;
    }

    /// Stop tracking. Deterministic: once this returns, no further state
    /// mutation happens, and any in-flight scan result is discarded.
    pub async fn stop(self) {
        let _ = self.command_tx.send(Command::Stop).await;
        let _ = self.handle.await;
    }
}

async fn run_loop<P: Platform>(
    platform: Arc<P>,
    config: TrackerConfig,
    state_tx: watch::Sender<LocationContextState>,
    event_tx: mpsc::Sender<Event>,
    mut command_rx: mpsc::Receiver<Command>,
) {
    for err in platform.missing_permissions() {
        let _ = event_tx
            .send(Event::PermissionDenied {
                capability: err.to_string(),
                at: Utc::now(),
            })
            .await;
    }
    let _ = event_tx.send(Event::TrackingStarted { at: Utc::now() }).await;

    let mut network_rx = platform.subscribe_network_changes();
    let mut network_open = true;

    let mut interval = tokio::time::interval(config.detection_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first interval tick completes immediately and doubles as the
    // initial detection on start.

    loop {
        tokio::select! {
            biased;
            cmd = command_rx.recv() => match cmd {
                Some(Command::Detect) => {}
                Some(Command::Stop) | None => break,
            },
            changed = network_rx.recv(), if network_open => match changed {
                // A lagged receiver still means connectivity changed at
                // least once; one re-detection covers it.
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => {
                    network_open = false;
                    continue;
                }
            },
            _ = interval.tick() => {}
        }

        // Coalesce connectivity flaps that piled up since the last cycle:
        // the cycle about to run reads the network state fresh, so one
        // detection covers them all. Flaps arriving after this point stay
        // queued and trigger exactly one follow-up cycle.
        if network_open {
            while network_rx.try_recv().is_ok() {}
        }

        // Run one cycle, keeping the command channel live: a stop cancels
        // the cycle mid-flight, a manual detect coalesces into it. The
        // cycle only publishes at its very end, so cancelling the future
        // discards the whole cycle including any scan still running on the
        // blocking pool.
        let mut cycle = std::pin::pin!(detection_cycle(&platform, &config, &state_tx, &event_tx));
        let stop = loop {
            tokio::select! {
                biased;
                cmd = command_rx.recv() => match cmd {
                    Some(Command::Detect) => continue,
                    Some(Command::Stop) | None => break true,
                },
                _ = &mut cycle => break false,
            }
        };
        if stop {
            break;
        }
    }

    let _ = event_tx.send(Event::TrackingStopped { at: Utc::now() }).await;
}

/// One detection cycle: gather signals (degrading failures to neutral
/// values), fuse, publish.
async fn detection_cycle<P: Platform>(
    platform: &Arc<P>,
    config: &TrackerConfig,
    state_tx: &watch::Sender<LocationContextState>,
    event_tx: &mpsc::Sender<Event>,
) {
    let network = match platform.network_status() {
        Ok(status) => status,
        Err(err) => {
            soft_failure(event_tx, SignalKind::Network, &err.to_string()).await;
            Default::default()
        }
    };

    let nearby_devices = {
        let platform = Arc::clone(platform);
        let window = config.scan_window;
        match tokio::task::spawn_blocking(move || platform.scan_nearby_devices(window)).await {
            Ok(Ok(count)) => count,
            Ok(Err(err)) => {
                soft_failure(event_tx, SignalKind::Proximity, &err.to_string()).await;
                0
            }
            Err(join_err) => {
                soft_failure(event_tx, SignalKind::Proximity, &join_err.to_string()).await;
                0
            }
        }
    };

    let moving = match platform.current_position() {
        Ok(fix) => fix.is_moving(),
        Err(err) => {
            soft_failure(event_tx, SignalKind::Position, &err.to_string()).await;
            false
        }
    };

    let snapshot = SignalSnapshot {
        wifi_connected: network.wifi_connected,
        network_name: network.network_name,
        nearby_devices,
        moving,
    };
    let decision = fuse_signals(&snapshot, config.home_network.as_deref());

    let state = LocationContextState {
        context: decision.context,
        confidence: decision.confidence,
        is_at_home: decision.is_at_home,
        connected_network: snapshot.network_name,
        nearby_device_count: snapshot.nearby_devices,
        last_updated: Some(Utc::now()),
    };

    let changed = {
        let prev = state_tx.borrow();
        prev.context != state.context || prev.confidence != state.confidence
    };
    let _ = state_tx.send(state.clone());

    if changed {
        let _ = event_tx
            .send(Event::ContextChanged {
                context: state.context,
                confidence: state.confidence,
                is_at_home: state.is_at_home,
                at: Utc::now(),
            })
            .await;
    }
}

async fn soft_failure(event_tx: &mpsc::Sender<Event>, signal: SignalKind, message: &str) {
    let _ = event_tx
        .send(Event::SignalUnavailable {
            signal,
            message: message.to_string(),
            at: Utc::now(),
        })
        .await;
}
