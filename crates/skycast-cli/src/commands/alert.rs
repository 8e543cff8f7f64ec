use clap::Subcommand;
use skycast_core::alerts;

#[derive(Subcommand)]
pub enum AlertAction {
    /// Classify one alert headline + severity string
    Classify {
        /// Raw alert headline (e.g. "Severe Thunderstorm Warning")
        headline: String,
        /// Provider severity text (e.g. "Severe")
        #[arg(default_value = "")]
        severity: String,
    },
}

pub fn run(action: AlertAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AlertAction::Classify { headline, severity } => {
            let classification = alerts::classify(&headline, &severity);
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
    }
    Ok(())
}
