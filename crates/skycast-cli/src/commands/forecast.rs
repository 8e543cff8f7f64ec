use clap::Subcommand;
use skycast_core::forecast::ContinuityFiller;
use skycast_core::provider::{normalize_payload, WeatherApiClient};
use skycast_core::Config;

#[derive(Subcommand)]
pub enum ForecastAction {
    /// Fetch and print a normalized forecast as JSON
    Fetch {
        /// Location name or "lat,lon" coordinates
        query: String,
        /// Forecast window in days (overrides config)
        #[arg(long)]
        days: Option<usize>,
        /// Print the raw provider payload instead of the normalized snapshot
        #[arg(long)]
        raw: bool,
    },
}

pub fn run(action: ForecastAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ForecastAction::Fetch { query, days, raw } => {
            let config = Config::load()?;
            let window = days.unwrap_or(config.forecast.window_days);
            let client = WeatherApiClient::from_config(&config)?;

            let days = u8::try_from(window).unwrap_or(u8::MAX);
            let runtime = tokio::runtime::Runtime::new()?;
            let payload = runtime.block_on(client.fetch_forecast(&query, days))?;

            if raw {
                println!("{}", serde_json::to_string_pretty(&payload)?);
                return Ok(());
            }

            let filler = match config.forecast.seed {
                Some(seed) => ContinuityFiller::with_seed(seed),
                None => ContinuityFiller::new(),
            };
            let snapshot = normalize_payload(&payload, window, &filler)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}
