//! Pure text-to-structure converters for the free-text columns of the export.
//!
//! Each converter takes the raw cell text and returns either the normalized
//! value or a [`ConvertError`](crate::error::ConvertError). None of them touch
//! I/O or shared state, so a failure in one cell cannot leak into another.

pub mod boolean;
pub mod season_date;
pub mod schedule;

pub use boolean::convert_boolean;
pub use season_date::convert_season_date;
pub use schedule::{
    canonical_day, convert_season_times, day_of_week, militarize, parse_clock, split_days,
    split_start_end, time_of_day,
};
