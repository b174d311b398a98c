use std::collections::HashMap;
use crate::errors::ForecastError;
use crate::manager_msc::WeatherFeed;
use crate::models::city::{CityCode, RawForecastEntry};

/// Daytime high temperature per weekday name
pub type WeekdayHighs = HashMap<String, String>;

/// Marker of a nighttime period label, matched case-sensitive
const NIGHT: &str = "night";

/// Reduces forecast entries to daytime highs keyed by period label.
///
/// Entries whose label contains "night" are lows and are dropped. If a label occurs
/// more than once the last value wins.
///
/// # Arguments
///
/// * 'entries' - forecast entries in document order
pub fn daytime_highs(entries: Vec<RawForecastEntry>) -> WeekdayHighs {
    entries
        .into_iter()
        .filter(|e| !e.period_label.contains(NIGHT))
        .fold(WeekdayHighs::new(), |mut highs, e| {
            highs.insert(e.period_label, e.temperature_value);
            highs
        })
}

/// Fetches the city page for a city and returns its daytime highs
///
/// # Arguments
///
/// * 'feed' - the forecast feed
/// * 'province' - province code of the city
/// * 'code' - city code
pub fn get_highs(feed: &impl WeatherFeed, province: &str, code: &CityCode) -> Result<WeekdayHighs, ForecastError> {
    let entries = feed.forecast_entries(province, code)?;

    Ok(daytime_highs(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, value: &str) -> RawForecastEntry {
        RawForecastEntry { period_label: label.to_string(), temperature_value: value.to_string() }
    }

    #[test]
    fn nights_are_dropped() {
        let highs = daytime_highs(vec![
            entry("Wednesday", "21"),
            entry("Wednesday night", "8"),
            entry("Thursday", "19"),
            entry("Thursday night", "7"),
        ]);

        assert_eq!(highs.len(), 2);
        assert_eq!(highs.get("Wednesday").map(String::as_str), Some("21"));
        assert_eq!(highs.get("Thursday").map(String::as_str), Some("19"));
    }

    #[test]
    fn night_match_is_case_sensitive() {
        let highs = daytime_highs(vec![
            entry("Tonight", "5"),
            entry("Friday Night", "6"),
        ]);

        assert_eq!(highs.len(), 1);
        assert_eq!(highs.get("Friday Night").map(String::as_str), Some("6"));
    }

    #[test]
    fn last_value_wins_on_duplicate_label() {
        let highs = daytime_highs(vec![
            entry("Saturday", "15"),
            entry("Saturday", "17"),
        ]);

        assert_eq!(highs.len(), 1);
        assert_eq!(highs.get("Saturday").map(String::as_str), Some("17"));
    }

    #[test]
    fn no_entries_no_highs() {
        assert!(daytime_highs(Vec::new()).is_empty());
        assert!(daytime_highs(vec![entry("Monday night", "-2")]).is_empty());
    }
}
