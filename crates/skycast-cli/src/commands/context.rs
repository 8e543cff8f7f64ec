use clap::Subcommand;
use skycast_core::context::{fuse_signals, SignalSnapshot};
use skycast_core::Config;

#[derive(Subcommand)]
pub enum ContextAction {
    /// Run one fusion decision over explicit signal values
    Simulate {
        /// Device is connected to WiFi
        #[arg(long)]
        wifi: bool,
        /// Connected network name, if known
        #[arg(long)]
        network: Option<String>,
        /// Nearby short-range device count
        #[arg(long, default_value = "0")]
        nearby: u32,
        /// Device is moving (positioning speed above walking threshold)
        #[arg(long)]
        moving: bool,
        /// Home network override (defaults to the configured one)
        #[arg(long)]
        home: Option<String>,
    },
}

pub fn run(action: ContextAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ContextAction::Simulate {
            wifi,
            network,
            nearby,
            moving,
            home,
        } => {
            let home = match home {
                Some(h) => Some(h),
                None => Config::load()?.home.network_ssid,
            };
            let snapshot = SignalSnapshot {
                wifi_connected: wifi,
                network_name: network,
                nearby_devices: nearby,
                moving,
            };
            let decision = fuse_signals(&snapshot, home.as_deref());
            println!(
                "{}",
                serde_json::json!({
                    "context": decision.context,
                    "confidence": decision.confidence,
                    "is_at_home": decision.is_at_home,
                })
            );
        }
    }
    Ok(())
}
