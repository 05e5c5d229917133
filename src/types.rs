use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::constants::SEASON_COUNT;

/// Format used for every normalized clock time.
pub const MILITARY_FORMAT: &str = "%H:%M:%S";

/// Capitalized three-letter abbreviation used as a schedule key.
pub fn day_abbreviation(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Opening and closing time for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl OpeningHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// `[open, close]` as 24-hour `HH:MM:SS` strings.
    pub fn militarized(&self) -> [String; 2] {
        [
            self.open.format(MILITARY_FORMAT).to_string(),
            self.close.format(MILITARY_FORMAT).to_string(),
        ]
    }
}

impl Serialize for OpeningHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.militarized().serialize(serializer)
    }
}

/// Weekly operating hours for one season.
///
/// Each day appears at most once. Inserting a day that is already present
/// replaces its hours but keeps the position where the day was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    entries: Vec<(Weekday, OpeningHours)>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the hours previously stored for `day`, if any.
    pub fn insert(&mut self, day: Weekday, hours: OpeningHours) -> Option<OpeningHours> {
        match self.entries.iter_mut().find(|(d, _)| *d == day) {
            Some((_, existing)) => Some(std::mem::replace(existing, hours)),
            None => {
                self.entries.push((day, hours));
                None
            }
        }
    }

    pub fn get(&self, day: Weekday) -> Option<&OpeningHours> {
        self.entries.iter().find(|(d, _)| *d == day).map(|(_, h)| h)
    }

    /// Lookup by abbreviation, e.g. `"Wed"`, returning `[open, close]`.
    pub fn hours_for(&self, abbreviation: &str) -> Option<[String; 2]> {
        self.entries
            .iter()
            .find(|(d, _)| day_abbreviation(*d) == abbreviation)
            .map(|(_, h)| h.militarized())
    }

    pub fn days(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(d, _)| day_abbreviation(*d)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &OpeningHours)> {
        self.entries.iter().map(|(d, h)| (*d, h))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for DaySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (day, hours) in &self.entries {
            map.serialize_entry(day_abbreviation(*day), hours)?;
        }
        map.end()
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(day, hours)| {
                let [open, close] = hours.militarized();
                format!("{} {}-{}", day_abbreviation(*day), open, close)
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// One operating season. Either half may be missing from the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Season {
    pub date: Option<String>,
    pub time: Option<DaySchedule>,
}

impl Season {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }
}

/// A single market row with its free-text fields normalized.
///
/// Built once by the record builder; exposes read-only accessors only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketRecord {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) website: String,
    pub(crate) street: String,
    pub(crate) city: String,
    pub(crate) county: String,
    pub(crate) state: String,
    pub(crate) zipcode: String,
    pub(crate) seasons: [Season; SEASON_COUNT],
    pub(crate) longitude: Option<f64>,
    pub(crate) latitude: Option<f64>,
    pub(crate) location: Option<String>,
    pub(crate) update_time: Option<String>,
    pub(crate) flags: BTreeMap<String, bool>,
}

impl MarketRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn county(&self) -> &str {
        &self.county
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    /// Season by 1-based number, matching the `Season1..Season4` columns.
    pub fn season(&self, number: usize) -> Option<&Season> {
        number.checked_sub(1).and_then(|i| self.seasons.get(i))
    }

    pub fn season_date(&self, number: usize) -> Option<&str> {
        self.season(number).and_then(|s| s.date.as_deref())
    }

    pub fn season_time(&self, number: usize) -> Option<&DaySchedule> {
        self.season(number).and_then(|s| s.time.as_ref())
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn update_time(&self) -> Option<&str> {
        self.update_time.as_deref()
    }

    /// `None` when the flag column was absent or left blank.
    pub fn flag(&self, column: &str) -> Option<bool> {
        self.flags.get(column).copied()
    }

    pub fn flags(&self) -> &BTreeMap<String, bool> {
        &self.flags
    }
}
