use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{self, SEASON_COUNT};
use crate::error::{MarketError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub columns: ColumnMap,
}

/// What to do with a row whose fields fail to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowErrorPolicy {
    /// Log the row, remember it in the report and keep going.
    #[default]
    Skip,
    /// Stop at the first bad row.
    Abort,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub on_row_error: RowErrorPolicy,
    pub delimiter: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            on_row_error: RowErrorPolicy::Skip,
            delimiter: ',',
        }
    }
}

impl ParserConfig {
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                MarketError::Config(format!(
                    "delimiter '{}' must be a single ASCII character",
                    self.delimiter
                ))
            })
    }
}

/// Header names of the export. Defaults match the USDA file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub id: String,
    pub name: String,
    pub website: String,
    pub street: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub zipcode: String,
    pub season_dates: [String; SEASON_COUNT],
    pub season_times: [String; SEASON_COUNT],
    pub longitude: String,
    pub latitude: String,
    pub location: String,
    pub update_time: String,
    pub flags: Vec<String>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: constants::FMID_COLUMN.to_string(),
            name: constants::NAME_COLUMN.to_string(),
            website: constants::WEBSITE_COLUMN.to_string(),
            street: constants::STREET_COLUMN.to_string(),
            city: constants::CITY_COLUMN.to_string(),
            county: constants::COUNTY_COLUMN.to_string(),
            state: constants::STATE_COLUMN.to_string(),
            zipcode: constants::ZIP_COLUMN.to_string(),
            season_dates: constants::SEASON_DATE_COLUMNS.map(str::to_string),
            season_times: constants::SEASON_TIME_COLUMNS.map(str::to_string),
            longitude: constants::LONGITUDE_COLUMN.to_string(),
            latitude: constants::LATITUDE_COLUMN.to_string(),
            location: constants::LOCATION_COLUMN.to_string(),
            update_time: constants::UPDATE_TIME_COLUMN.to_string(),
            flags: constants::FLAG_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MarketError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.parser.delimiter_byte()?;
        Ok(config)
    }
}
