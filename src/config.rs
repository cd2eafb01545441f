use std::str::FromStr;

use log::LevelFilter;
use serde_json::Value;

use crate::error::DriverError;

/// Driver settings, read from a one-line JSON object. Every key is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	pub log_level: LevelFilter,
	pub log_file: Option<String>,
	pub trials: usize,
	pub seed: Option<u64>,
}

impl Default for Settings {
	fn default() -> Settings {
		Settings {
			log_level: LevelFilter::Info,
			log_file: None,
			trials: 0,
			seed: None,
		}
	}
}

impl Settings {
	/// A blank line means defaults.
	pub fn parse(line: &str) -> Result<Settings, DriverError> {
		if line.trim().is_empty() {
			return Ok(Settings::default());
		}
		let json: Value = serde_json::from_str(line)?;
		Settings::from_json(&json)
	}

	pub fn from_json(json: &Value) -> Result<Settings, DriverError> {
		if !json.is_object() {
			return Err(DriverError::SettingsShape);
		}
		let mut settings = Settings::default();
		if let Some(level) = json["log_level"].as_str() {
			settings.log_level = LevelFilter::from_str(level)
				.map_err(|_| DriverError::LogLevel(level.to_string()))?;
		}
		settings.log_file = json["log_file"].as_str().map(String::from);
		if let Some(trials) = json["trials"].as_u64() {
			settings.trials = trials as usize;
		}
		settings.seed = json["seed"].as_u64();
		Ok(settings)
	}
}
