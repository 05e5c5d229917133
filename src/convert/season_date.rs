use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::constants::month_name;
use crate::error::ConvertError;

/// `MM/DD/YY to MM/DD/YY`; only the two month groups are captured.
static NUMERIC_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,2})/\d{1,2}/(?:\d{4}|\d{2})\s+to\s+(\d{1,2})/\d{1,2}/(?:\d{4}|\d{2})\s*$")
        .expect("season date pattern is valid")
});

/// Normalize a season date range to `"<Month> to <Month>"`.
///
/// Numeric ranges such as `11/09/03 to 01/12/04` are reduced to their month
/// names; days and years are dropped. Anything that is not a numeric range is
/// assumed to be normalized already and comes back unchanged.
pub fn convert_season_date(raw: &str) -> Result<String, ConvertError> {
    let Some(captures) = NUMERIC_RANGE.captures(raw) else {
        return Ok(raw.to_string());
    };

    let start = month_from_capture(&captures[1])?;
    let end = month_from_capture(&captures[2])?;
    let normalized = format!("{} to {}", start, end);
    debug!("season date '{}' -> '{}'", raw, normalized);
    Ok(normalized)
}

fn month_from_capture(digits: &str) -> Result<&'static str, ConvertError> {
    // The pattern guarantees one or two ASCII digits.
    let number: u32 = digits.parse().unwrap_or(0);
    month_name(number).ok_or(ConvertError::InvalidMonth(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_range_becomes_month_names() {
        assert_eq!(
            convert_season_date("11/09/03 to 01/12/04").unwrap(),
            "November to January"
        );
        assert_eq!(
            convert_season_date("05/01/2014 to 10/31/2014").unwrap(),
            "May to October"
        );
        assert_eq!(
            convert_season_date(" 6/5/13 to 9/28/13 ").unwrap(),
            "June to September"
        );
    }

    #[test]
    fn test_month_range_passes_through() {
        assert_eq!(
            convert_season_date("July to October").unwrap(),
            "July to October"
        );
        assert_eq!(convert_season_date("").unwrap(), "");
        assert_eq!(
            convert_season_date("Year round").unwrap(),
            "Year round"
        );
    }

    #[test]
    fn test_partial_numeric_range_passes_through() {
        assert_eq!(
            convert_season_date("11/09/03 to October").unwrap(),
            "11/09/03 to October"
        );
    }

    #[test]
    fn test_month_out_of_range_is_an_error() {
        assert_eq!(
            convert_season_date("13/01/14 to 01/12/15"),
            Err(ConvertError::InvalidMonth(13))
        );
        assert_eq!(
            convert_season_date("05/01/14 to 00/12/15"),
            Err(ConvertError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_is_idempotent() {
        let once = convert_season_date("04/15/2012 to 11/20/2012").unwrap();
        assert_eq!(once, "April to November");
        assert_eq!(convert_season_date(&once).unwrap(), once);
    }
}
