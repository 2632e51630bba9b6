//! Configuration module
//!
//! Reads `~/.config/parking-service/config.toml` (or the path given on the
//! command line). Every section is optional; missing keys fall back to the
//! defaults below.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "pretty"   # or "json"
//!
//! [lot]
//! car_spots = 3
//! bike_spots = 2
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{ParkingSpot, ParkingType};
use crate::support::errors::ConfigError;

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Physical layout of the parking lot
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    pub car_spots: u32,
    pub bike_spots: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            car_spots: 3,
            bike_spots: 2,
        }
    }
}

impl LotConfig {
    /// Total number of spots, if it fits a spot id.
    pub fn total_spots(&self) -> Option<i32> {
        self.car_spots
            .checked_add(self.bike_spots)
            .and_then(|total| i32::try_from(total).ok())
    }

    /// Spots numbered from 1, car spots first, all available.
    ///
    /// Ids stop at `i32::MAX`; `AppConfig` validation rejects larger lots.
    pub fn spots(&self) -> Vec<ParkingSpot> {
        let cars = (0..self.car_spots).map(|_| ParkingType::Car);
        let bikes = (0..self.bike_spots).map(|_| ParkingType::Bike);

        (1..=i32::MAX)
            .zip(cars.chain(bikes))
            .map(|(id, parking_type)| ParkingSpot::new(id, parking_type, true))
            .collect()
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub lot: LotConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.lot.total_spots() {
            None => Err(ConfigError::Invalid(format!(
                "the lot cannot hold more than {} spots",
                i32::MAX
            ))),
            Some(0) => Err(ConfigError::Invalid(
                "the lot must have at least one spot".to_string(),
            )),
            Some(_) => Ok(()),
        }
    }
}

/// Default config location: `<config dir>/parking-service/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parking-service")
        .join("config.toml")
}
