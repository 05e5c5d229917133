//! Parsing and field normalization for the USDA farmers-market CSV export.
//!
//! The converters in [`convert`] turn the export's free-text columns (Y/N
//! flags, season date ranges and weekly schedules) into typed values. The
//! [`parser`] module wires them to a CSV reader to build [`MarketRecord`]s.

pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod logging;
pub mod parser;
pub mod types;

pub use config::{Config, RowErrorPolicy};
pub use error::{ConvertError, MarketError, Result, RowError};
pub use parser::{MarketParser, ParseReport};
pub use types::{DaySchedule, MarketRecord, OpeningHours, Season};
