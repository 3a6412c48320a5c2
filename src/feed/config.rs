use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::{
    error::{DiningError, Result},
    timing::zoned_now::{parse_zone, DEFAULT_ZONE},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

/// Settings for one render pass. Read from a JSON file, then overridden by
/// whatever was given on the command line.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File path or http(s) URL of the locations list.
    pub source: String,
    /// IANA name of the zone hours are written in.
    pub timezone: String,
    /// Appended to a location's name when searching for directions.
    pub campus: String,
    /// Meta line for locations with neither address nor building.
    pub default_address: String,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "data/locations.json".to_string(),
            timezone: DEFAULT_ZONE.name().to_string(),
            campus: "Hofstra University, Hempstead NY".to_string(),
            default_address: "Hofstra University, Hempstead, NY".to_string(),
            output: None,
            format: OutputFormat::Html,
        }
    }
}

impl Config {
    pub fn from_config(config: &str) -> Result<Self> {
        serde_json::from_str(config).map_err(|err| DiningError::Config {
            message: format!("Could not deserialize.\n{}", err),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_config(&text)
    }

    /// Builds the effective config: defaults, then the config file, then flags.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(source) = &args.source {
            config.source = source.clone();
        }
        if let Some(timezone) = &args.timezone {
            config.timezone = timezone.clone();
        }
        if let Some(output) = &args.output {
            config.output = Some(output.clone());
        }
        if let Some(format) = args.format {
            config.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn zone(&self) -> Result<Tz> {
        parse_zone(&self.timezone)
    }

    fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(DiningError::Config {
                message: "source must not be empty".to_string(),
            });
        }
        self.zone()?;
        Ok(())
    }
}

/// Render dining locations into "open now" and "closed" lists.
#[derive(Parser, Debug, Default)]
#[command(name = "dining-hours", version)]
pub struct Args {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Locations file path or http(s) URL
    #[arg(short, long)]
    pub source: Option<String>,

    /// IANA timezone the hours are written in
    #[arg(long)]
    pub timezone: Option<String>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Evaluate at this RFC 3339 instant instead of now
    #[arg(long)]
    pub at: Option<DateTime<FixedOffset>>,

    #[arg(short, long)]
    pub verbose: bool,
}
