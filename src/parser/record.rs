use std::collections::BTreeMap;

use csv::StringRecord;
use tracing::debug;

use crate::config::ColumnMap;
use crate::constants::SEASON_COUNT;
use crate::convert::{convert_boolean, convert_season_date, convert_season_times};
use crate::error::{ConvertError, MarketError, Result, RowError};
use crate::types::{MarketRecord, Season};

/// A header name together with its position in the row.
#[derive(Debug, Clone)]
struct Column {
    name: String,
    position: usize,
}

/// Column positions resolved once per file from its header row.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    id: Column,
    name: Column,
    website: Column,
    street: Column,
    city: Column,
    county: Column,
    state: Column,
    zipcode: Column,
    season_dates: Vec<Column>,
    season_times: Vec<Column>,
    longitude: Option<Column>,
    latitude: Option<Column>,
    location: Option<Column>,
    update_time: Option<Column>,
    flags: Vec<Column>,
}

impl ColumnIndex {
    /// Every identity, address and season column must be present. Coordinates,
    /// location, update time and flag columns are picked up when they exist.
    pub fn from_headers(headers: &StringRecord, columns: &ColumnMap) -> Result<Self> {
        let find = |name: &str| -> Option<Column> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .map(|position| Column {
                    name: name.to_string(),
                    position,
                })
        };
        let require =
            |name: &str| find(name).ok_or_else(|| MarketError::MissingColumn(name.to_string()));

        let season_dates = columns
            .season_dates
            .iter()
            .map(|c| require(c.as_str()))
            .collect::<Result<Vec<_>>>()?;
        let season_times = columns
            .season_times
            .iter()
            .map(|c| require(c.as_str()))
            .collect::<Result<Vec<_>>>()?;

        let flags: Vec<Column> = columns.flags.iter().filter_map(|c| find(c.as_str())).collect();
        if flags.len() < columns.flags.len() {
            debug!(
                "{} of {} flag columns present in header",
                flags.len(),
                columns.flags.len()
            );
        }

        Ok(Self {
            id: require(columns.id.as_str())?,
            name: require(columns.name.as_str())?,
            website: require(columns.website.as_str())?,
            street: require(columns.street.as_str())?,
            city: require(columns.city.as_str())?,
            county: require(columns.county.as_str())?,
            state: require(columns.state.as_str())?,
            zipcode: require(columns.zipcode.as_str())?,
            season_dates,
            season_times,
            longitude: find(columns.longitude.as_str()),
            latitude: find(columns.latitude.as_str()),
            location: find(columns.location.as_str()),
            update_time: find(columns.update_time.as_str()),
            flags,
        })
    }
}

/// Borrowed view of one CSV row used while building a record.
struct Row<'a> {
    record: &'a StringRecord,
    line: u64,
}

impl<'a> Row<'a> {
    fn cell(&self, column: &Column) -> &'a str {
        self.record.get(column.position).unwrap_or("").trim()
    }

    fn text(&self, column: &Column) -> String {
        self.cell(column).to_string()
    }

    /// Blank cells become `None`; everything else goes through `convert`.
    fn optional<T>(
        &self,
        column: &Column,
        convert: impl FnOnce(&str) -> std::result::Result<T, ConvertError>,
    ) -> std::result::Result<Option<T>, RowError> {
        let cell = self.cell(column);
        if cell.is_empty() {
            return Ok(None);
        }
        convert(cell).map(Some).map_err(|source| RowError {
            line: self.line,
            column: column.name.clone(),
            source,
        })
    }
}

fn parse_coordinate(cell: &str) -> std::result::Result<f64, ConvertError> {
    cell.parse::<f64>()
        .map_err(|_| ConvertError::InvalidCoordinate(cell.to_string()))
}

/// Turn one CSV row into a market record, running every converter.
pub fn build_record(
    record: &StringRecord,
    index: &ColumnIndex,
) -> std::result::Result<MarketRecord, RowError> {
    let row = Row {
        record,
        line: record.position().map(|p| p.line()).unwrap_or(0),
    };

    let mut seasons: [Season; SEASON_COUNT] = Default::default();
    for (season, (date_column, time_column)) in seasons
        .iter_mut()
        .zip(index.season_dates.iter().zip(&index.season_times))
    {
        season.date = row.optional(date_column, convert_season_date)?;
        season.time = row.optional(time_column, convert_season_times)?;
    }

    let mut flags = BTreeMap::new();
    for column in &index.flags {
        if let Some(value) = row.optional(column, convert_boolean)? {
            flags.insert(column.name.clone(), value);
        }
    }

    let optional_text = |column: &Option<Column>| {
        column
            .as_ref()
            .map(|c| row.cell(c))
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
    };

    let longitude = match &index.longitude {
        Some(column) => row.optional(column, parse_coordinate)?,
        None => None,
    };
    let latitude = match &index.latitude {
        Some(column) => row.optional(column, parse_coordinate)?,
        None => None,
    };

    let market = MarketRecord {
        id: row.text(&index.id),
        name: row.text(&index.name),
        website: row.text(&index.website),
        street: row.text(&index.street),
        city: row.text(&index.city),
        county: row.text(&index.county),
        state: row.text(&index.state),
        zipcode: row.text(&index.zipcode),
        seasons,
        longitude,
        latitude,
        location: optional_text(&index.location),
        update_time: optional_text(&index.update_time),
        flags,
    };
    debug!(line = row.line, id = %market.id, "built market record");
    Ok(market)
}
