use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "skycast-cli", version, about = "Skycast CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and normalize a forecast
    Forecast {
        #[command(subcommand)]
        action: commands::forecast::ForecastAction,
    },
    /// Classify alert headlines
    Alert {
        #[command(subcommand)]
        action: commands::alert::AlertAction,
    },
    /// Normalize provider condition codes
    Condition {
        #[command(subcommand)]
        action: commands::condition::ConditionAction,
    },
    /// Location-context fusion
    Context {
        #[command(subcommand)]
        action: commands::context::ContextAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Forecast { action } => commands::forecast::run(action),
        Commands::Alert { action } => commands::alert::run(action),
        Commands::Condition { action } => commands::condition::run(action),
        Commands::Context { action } => commands::context::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
