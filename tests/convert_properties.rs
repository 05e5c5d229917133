use proptest::prelude::*;
use serde_json::json;
use usda_markets::constants::MONTH_NAMES;
use usda_markets::convert::{
    canonical_day, convert_boolean, convert_season_date, convert_season_times, militarize,
};

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn assert_military(time: &str) {
    let parts: Vec<&str> = time.split(':').collect();
    assert_eq!(parts.len(), 3, "{}", time);
    assert!(parts.iter().all(|p| p.len() == 2), "{}", time);
    let hour: u32 = parts[0].parse().unwrap();
    let minute: u32 = parts[1].parse().unwrap();
    assert!(hour <= 23, "{}", time);
    assert!(minute <= 59, "{}", time);
    assert_eq!(parts[2], "00", "{}", time);
}

#[test]
fn test_boolean_is_a_bijection_on_y_and_n() {
    assert!(convert_boolean("Y").unwrap());
    assert!(!convert_boolean("N").unwrap());
}

#[test]
fn test_schedule_serializes_as_day_to_pair_map() {
    let schedule = convert_season_times("Sat: 8:00 AM-3:00 PM;Sun: 8:00 AM-3:00 PM;").unwrap();
    assert_eq!(
        serde_json::to_value(&schedule).unwrap(),
        json!({"Sat": ["08:00:00", "15:00:00"], "Sun": ["08:00:00", "15:00:00"]})
    );
}

proptest! {
    #[test]
    fn militarized_times_are_well_formed(
        hour in 1u32..=12,
        minute in 0u32..=59,
        pm in any::<bool>(),
        spaced in any::<bool>(),
    ) {
        let clock = format!(
            "{}:{:02}{}{}",
            hour,
            minute,
            if spaced { " " } else { "" },
            if pm { "PM" } else { "AM" }
        );
        let military = militarize(&clock).unwrap();
        assert_military(&military);

        let expected_hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
        prop_assert_eq!(military, format!("{:02}:{:02}:00", expected_hour, minute));
    }

    #[test]
    fn season_date_is_idempotent(
        start in 1u32..=12,
        end in 1u32..=12,
        day in 1u32..=28,
        year in 0u32..=99,
    ) {
        let raw = format!("{:02}/{:02}/{:02} to {:02}/{:02}/{:02}", start, day, year, end, day, year);
        let once = convert_season_date(&raw).unwrap();
        prop_assert_eq!(
            &once,
            &format!("{} to {}", MONTH_NAMES[start as usize - 1], MONTH_NAMES[end as usize - 1])
        );
        prop_assert_eq!(convert_season_date(&once).unwrap(), once);
    }

    #[test]
    fn month_ranges_pass_through(start in 0usize..12, end in 0usize..12) {
        let raw = format!("{} to {}", MONTH_NAMES[start], MONTH_NAMES[end]);
        prop_assert_eq!(convert_season_date(&raw).unwrap(), raw);
    }

    #[test]
    fn schedules_have_one_entry_per_distinct_day(
        picks in prop::collection::vec((0usize..7, any::<bool>()), 1..12),
    ) {
        let week: String = picks
            .iter()
            .map(|(day, upper)| {
                let token = if *upper { DAYS[*day].to_uppercase() } else { DAYS[*day].to_lowercase() };
                format!("{}:9:00 AM - 1:00 PM;", token)
            })
            .collect();

        let schedule = convert_season_times(&week).unwrap();
        let mut distinct: Vec<usize> = picks.iter().map(|(d, _)| *d).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(schedule.len(), distinct.len());

        for (day, hours) in schedule.iter() {
            prop_assert!(canonical_day(&day.to_string()).is_ok());
            for time in hours.militarized() {
                assert_military(&time);
            }
        }
    }
}
