/// Column names used by the USDA farmers-market export.
/// These are the defaults for `ColumnMap`; a config file can override any of them.

pub const FMID_COLUMN: &str = "FMID";
pub const NAME_COLUMN: &str = "MarketName";
pub const WEBSITE_COLUMN: &str = "Website";
pub const STREET_COLUMN: &str = "street";
pub const CITY_COLUMN: &str = "city";
pub const COUNTY_COLUMN: &str = "County";
pub const STATE_COLUMN: &str = "State";
pub const ZIP_COLUMN: &str = "zip";

pub const SEASON_DATE_COLUMNS: [&str; SEASON_COUNT] =
    ["Season1Date", "Season2Date", "Season3Date", "Season4Date"];
pub const SEASON_TIME_COLUMNS: [&str; SEASON_COUNT] =
    ["Season1Time", "Season2Time", "Season3Time", "Season4Time"];

pub const LONGITUDE_COLUMN: &str = "x";
pub const LATITUDE_COLUMN: &str = "y";
pub const LOCATION_COLUMN: &str = "Location";
pub const UPDATE_TIME_COLUMN: &str = "updateTime";

/// Y/N columns: payment programmes first, then products sold.
pub const FLAG_COLUMNS: &[&str] = &[
    "Credit",
    "WIC",
    "WICcash",
    "SFMNP",
    "SNAP",
    "Organic",
    "Bakedgoods",
    "Cheese",
    "Crafts",
    "Flowers",
    "Eggs",
    "Seafood",
    "Herbs",
    "Vegetables",
    "Honey",
    "Jams",
    "Maple",
    "Meat",
    "Nursery",
    "Nuts",
    "Plants",
    "Poultry",
    "Prepared",
    "Soap",
    "Trees",
    "Wine",
];

/// A market lists at most this many operating seasons.
pub const SEASON_COUNT: usize = 4;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}
