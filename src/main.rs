//! KarooFarmer CLI
//!
//! Terminal rendition of the dashboard:
//! - Show the dashboard with local weather
//! - Look up weather for a position
//! - List crops and reservoir levels
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use karoo::config::{generate_default_config, Config};
use karoo::location::{self, Consent};
use karoo::logging::init_logging;
use karoo::render::{render_dashboard, render_weather};
use karoo::{Action, Coordinates, DashboardState, WeatherClient, WeatherProvider, WeatherStatus};

#[derive(Parser)]
#[command(name = "karoo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Crop inventory, reservoir levels and local weather for your farm")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ~/.config/karoo/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard (default)
    Dashboard {
        /// Answer the location prompt without asking
        #[arg(long, value_enum)]
        consent: Option<ConsentArg>,
    },

    /// Current weather at a position
    Weather {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// List crops and reservoir levels
    Crops,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConsentArg {
    Allow,
    Decline,
}

impl From<ConsentArg> for Consent {
    fn from(arg: ConsentArg) -> Self {
        match arg {
            ConsentArg::Allow => Consent::Allow,
            ConsentArg::Decline => Consent::Decline,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);
    tracing::debug!("KarooFarmer v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Dashboard { consent: None }) {
        Commands::Dashboard { consent } => {
            let state = run_dashboard(&config, consent.map(Consent::from)).await?;
            print!("{}", render_dashboard(&state));
        }

        Commands::Weather { lat, lon } => {
            let client = WeatherClient::new(config.weather.endpoint());
            let status = match client.current(Coordinates::new(lat, lon)).await {
                Ok(reading) => WeatherStatus::Ready(reading),
                Err(e) => {
                    tracing::warn!("Weather lookup failed: {}", e);
                    WeatherStatus::Failed(e.user_message())
                }
            };
            print!("{}", render_weather(&status));
        }

        Commands::Crops => {
            print!("{}", render_dashboard(&DashboardState::default()));
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Initial render sequence with the configured locator
async fn run_dashboard(config: &Config, preset: Option<Consent>) -> anyhow::Result<DashboardState> {
    let geo = config.location.locator();
    let weather = WeatherClient::new(config.weather.endpoint());

    let mut state = DashboardState::default().apply(location::start(&geo, &weather).await);

    if state.show_permission_prompt {
        let consent = match preset {
            Some(c) => c,
            None => ask_consent()?,
        };
        if consent == Consent::Allow {
            state = state.apply(Action::LocationAllowed);
        }
        state = state.apply(location::resolve_consent(consent, &geo, &weather).await);
    }

    Ok(state)
}

/// Explanation dialog on the terminal
fn ask_consent() -> anyhow::Result<Consent> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "KarooFarmer uses your location to show local weather.")?;
    write!(stdout, "Allow location access? [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    Ok(match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Consent::Allow,
        _ => Consent::Decline,
    })
}
