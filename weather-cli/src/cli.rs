use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use std::time::Duration;
use weather_core::{CachedLookup, Config, WeatherLookupService, WeatherReading};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Portfolio weather widget backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the place the widget reports on.
    Configure,

    /// Print the current reading once.
    Show {
        /// Print the reading as the JSON the page consumes.
        #[arg(long)]
        json: bool,
    },

    /// Poll the reading on an interval, reusing it within the cache window.
    Watch {
        /// Seconds between polls.
        #[arg(long, default_value_t = 60)]
        interval_secs: u64,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { json } => {
                let config = Config::load()?;
                let service = WeatherLookupService::from_config(&config);
                let reading = service.get_current().await;
                print_reading(&reading, json)
            }
            Command::Watch { interval_secs, json } => {
                let config = Config::load()?;
                watch(&config, Duration::from_secs(interval_secs.max(1)), json).await
            }
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;
    let current = config.location.clone();

    config.location.name = Text::new("Location name:")
        .with_default(&current.name)
        .prompt()
        .context("Failed to read location name")?;

    config.location.latitude = CustomType::<f64>::new("Latitude:")
        .with_default(current.latitude)
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read latitude")?;

    config.location.longitude = CustomType::<f64>::new("Longitude:")
        .with_default(current.longitude)
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read longitude")?;

    config.location.timezone = Text::new("IANA timezone:")
        .with_default(&current.timezone)
        .prompt()
        .context("Failed to read timezone")?;

    config.validate()?;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn watch(config: &Config, interval: Duration, json: bool) -> Result<()> {
    let lookup = CachedLookup::new(WeatherLookupService::from_config(config), config.cache_ttl());
    let mut ticker = tokio::time::interval(interval);

    tracing::info!(
        interval_secs = interval.as_secs(),
        ttl_secs = lookup.ttl().as_secs(),
        "watching weather"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let reading = lookup.get_current().await;
                print_reading(&reading, json)?;
            }
            res = tokio::signal::ctrl_c() => {
                res.context("Failed to listen for Ctrl-C")?;
                return Ok(());
            }
        }
    }
}

fn print_reading(reading: &WeatherReading, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string(reading).context("Failed to serialize reading")?;
        println!("{out}");
    } else {
        println!("{}", render(reading));
    }
    Ok(())
}

fn render(reading: &WeatherReading) -> String {
    format!(
        "{}: {}°C, {} [{}], wind {} km/h (updated {})",
        reading.location,
        reading.temperature,
        reading.condition,
        reading.icon,
        reading.wind_speed,
        reading.last_updated.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
    )
}
