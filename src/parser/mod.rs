use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::config::{Config, RowErrorPolicy};
use crate::error::{MarketError, Result, RowError};
use crate::types::MarketRecord;

pub mod record;

pub use record::{build_record, ColumnIndex};

/// Outcome of parsing one export file.
#[derive(Debug, Clone)]
pub struct ParseReport {
    pub total_rows: usize,
    pub records: Vec<MarketRecord>,
    pub failures: Vec<RowError>,
}

impl ParseReport {
    pub fn find(&self, id: &str) -> Option<&MarketRecord> {
        self.records.iter().find(|r| r.id() == id)
    }
}

/// Reads a USDA farmers-market export and normalizes each row.
pub struct MarketParser {
    config: Config,
}

impl Default for MarketParser {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl MarketParser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn csv_reader<R: Read>(&self, reader: R) -> Result<csv::Reader<R>> {
        Ok(csv::ReaderBuilder::new()
            .delimiter(self.config.parser.delimiter_byte()?)
            .flexible(true)
            .from_reader(reader))
    }

    /// Stream of per-row results, in file order.
    ///
    /// Header problems fail immediately; after that every row yields its own
    /// `Result`, so callers can apply their own policy to bad rows.
    pub fn records<R: Read>(
        &self,
        reader: R,
    ) -> Result<impl Iterator<Item = Result<MarketRecord>>> {
        let mut csv_reader = self.csv_reader(reader)?;
        let index = ColumnIndex::from_headers(csv_reader.headers()?, &self.config.columns)?;
        debug!("resolved column index: {:?}", index);

        Ok(csv_reader.into_records().map(move |row| -> Result<MarketRecord> {
            let row = row?;
            Ok(build_record(&row, &index)?)
        }))
    }

    #[instrument(skip(self, reader))]
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ParseReport> {
        let mut report = ParseReport {
            total_rows: 0,
            records: Vec::new(),
            failures: Vec::new(),
        };

        for result in self.records(reader)? {
            report.total_rows += 1;
            match result {
                Ok(market) => report.records.push(market),
                Err(MarketError::Row(row_error)) => match self.config.parser.on_row_error {
                    RowErrorPolicy::Skip => {
                        warn!("skipping row: {}", row_error);
                        report.failures.push(row_error);
                    }
                    RowErrorPolicy::Abort => return Err(MarketError::Row(row_error)),
                },
                Err(other) => return Err(other),
            }
        }

        info!(
            total = report.total_rows,
            parsed = report.records.len(),
            rejected = report.failures.len(),
            "parsed market export"
        );
        Ok(report)
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseReport> {
        let file = File::open(path.as_ref())?;
        self.parse_reader(file)
    }
}
