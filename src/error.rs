use thiserror::Error;

/// Failure of a single field converter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unrecognized boolean token '{0}' (expected Y or N)")]
    UnknownBoolean(String),

    #[error("month number {0} is out of range 1-12")]
    InvalidMonth(u32),

    #[error("schedule segment '{0}' has no ':' between day and times")]
    MissingDaySeparator(String),

    #[error("unrecognized day '{0}' (expected Mon, Tue, Wed, Thu, Fri, Sat or Sun)")]
    UnknownDay(String),

    #[error("time range '{0}' has no '-' between start and end")]
    MissingTimeSeparator(String),

    #[error("invalid 12-hour clock time '{0}'")]
    InvalidClock(String),

    #[error("'{0}' is not a coordinate")]
    InvalidCoordinate(String),
}

/// A converter failure pinned to the CSV row and column it came from.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}, column {column}: {source}")]
pub struct RowError {
    pub line: u64,
    pub column: String,
    #[source]
    pub source: ConvertError,
}

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row rejected: {0}")]
    Row(#[from] RowError),
}

pub type Result<T> = std::result::Result<T, MarketError>;
