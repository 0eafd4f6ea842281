use serde::Deserialize;
use std::env;

use crate::error::CheckinResult;
use crate::manifest::FlightManifest;
use crate::printer::CardFormat;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub flights: Vec<FlightManifest>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Used when RUST_LOG is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

fn default_filter() -> String { "altis_checkin=info,altis_seating=warn".to_string() }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: CardFormat,
}

impl Config {
    pub fn load() -> CheckinResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `ALTIS__OUTPUT__FORMAT=json` switches the card format
            .add_source(config::Environment::with_prefix("ALTIS").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Parse a configuration from TOML text, without file or environment layering
    pub fn from_toml(text: &str) -> CheckinResult<Self> {
        let s = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?;

        Ok(s.try_deserialize()?)
    }
}
