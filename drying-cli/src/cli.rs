use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use drying_core::{Config, Locale, ProviderId, WeatherObservation, provider::parse_observation};
use inquire::{Confirm, CustomType, Select};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "drying", version, about = "Will my laundry dry outside?")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the message language and cold-weather cut-off.
    Configure,

    /// Classify an observation given on the command line.
    Classify {
        #[command(flatten)]
        observation: ObservationArgs,

        /// Print the advisory as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify a saved weather provider response.
    Convert {
        /// Provider short name: "openweather", "openmeteo" or "tsukumijima".
        provider: String,

        /// File holding the JSON response; reads stdin when absent.
        file: Option<PathBuf>,

        /// Print the advisory as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ObservationArgs {
    /// Temperature in °C.
    #[arg(long = "temp", allow_hyphen_values = true)]
    pub temperature: Option<f64>,

    /// Relative humidity in %.
    #[arg(long)]
    pub humidity: Option<f64>,

    /// Wind speed in m/s.
    #[arg(long)]
    pub wind: Option<f64>,

    /// Precipitation in mm.
    #[arg(long = "precip")]
    pub precipitation: Option<f64>,

    /// WMO weather code.
    #[arg(long)]
    pub code: Option<i32>,

    /// Free-text weather summary, e.g. "sunny" or "曇り".
    #[arg(long)]
    pub text: Option<String>,

    /// Highest chance of rain today in %.
    #[arg(long)]
    pub rain_chance: Option<f64>,
}

impl From<ObservationArgs> for WeatherObservation {
    fn from(args: ObservationArgs) -> Self {
        WeatherObservation {
            temperature_c: args.temperature,
            humidity_pct: args.humidity,
            wind_speed_mps: args.wind,
            precipitation_mm: args.precipitation,
            condition_code: args.code,
            condition_text: args.text,
            rain_chance_pct: args.rain_chance,
        }
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config_path = self.config.as_deref();
        let config = load_config(config_path)?;

        match self.command {
            Command::Configure => configure(config, config_path)?,
            Command::Classify { observation, json } => {
                let observation = WeatherObservation::from(observation);
                let advisory = config.advisor().classify(&observation);
                output::print(&observation, &advisory, config.locale, json)?;
            }
            Command::Convert { provider, file, json } => {
                let id = ProviderId::try_from(provider.as_str())?;
                debug!(provider = %id, file = ?file, "converting provider response");
                let body = read_input(file.as_deref())?;
                let observation = parse_observation(id, &body)
                    .with_context(|| format!("Could not read {id} response"))?;
                let advisory = config.advisor().classify(&observation);
                output::print(&observation, &advisory, config.locale, json)?;
            }
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!(path = ?path, locale = %config.locale, "loaded configuration");
    Ok(config)
}

fn configure(mut config: Config, path: Option<&Path>) -> anyhow::Result<()> {
    let locales = Locale::all().to_vec();
    let current = locales.iter().position(|l| *l == config.locale).unwrap_or(0);

    config.locale = Select::new("Message language:", locales)
        .with_starting_cursor(current)
        .prompt()?;

    config.rules.cold_below_c = CustomType::<f64>::new("Too cold to dry outside below (°C):")
        .with_default(config.rules.cold_below_c)
        .with_error_message("Please enter a number")
        .prompt()?;

    if !Confirm::new("Save configuration?").with_default(true).prompt()? {
        println!("Nothing saved.");
        return Ok(());
    }

    let saved_to = match path {
        Some(path) => {
            config.save_to(path)?;
            path.to_owned()
        }
        None => config.save()?,
    };

    println!("Saved configuration to {}", saved_to.display());
    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read provider response from stdin")?;
            Ok(body)
        }
    }
}
