use std::collections::HashMap;
use chrono::{Datelike, NaiveDate, TimeDelta};

/// Weekday names as used by the forecast feed, indexed by days from Sunday
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Mapping from weekday name to the one date within a seven day window bearing that weekday
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekWindow {
    dates: HashMap<String, NaiveDate>,
}

impl WeekWindow {
    /// Builds the window of seven consecutive days starting at the reference date.
    ///
    /// The reference date is a local calendar date, it is never normalized to UTC.
    /// Later days overwrite earlier ones for the same weekday name, which within exactly
    /// seven consecutive days never happens, so the window always holds one date per weekday.
    ///
    /// # Arguments
    ///
    /// * 'reference_date' - first day of the window, normally today
    pub fn new(reference_date: NaiveDate) -> WeekWindow {
        let mut dates: HashMap<String, NaiveDate> = HashMap::with_capacity(7);

        for j in 0..7 {
            let day = reference_date + TimeDelta::days(j);
            let week_day = WEEKDAY_NAMES[day.weekday().num_days_from_sunday() as usize];
            dates.insert(week_day.to_string(), day);
        }

        WeekWindow { dates }
    }

    /// Returns the date for the given weekday name, if the name is a known weekday
    ///
    /// # Arguments
    ///
    /// * 'week_day' - full weekday name, e.g. "Wednesday"
    pub fn get(&self, week_day: &str) -> Option<NaiveDate> {
        self.dates.get(week_day).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns all dates in the window in chronological order
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates = self.dates.values().copied().collect::<Vec<NaiveDate>>();
        dates.sort();
        dates
    }
}
