use std::collections::BTreeMap;
use std::fmt;
use chrono::NaiveDate;
use log::warn;
use crate::errors::ForecastError;
use crate::highs::WeekdayHighs;
use crate::models::city::City;
use crate::week_window::WeekWindow;

/// Daytime highs of one city keyed by calendar date, empty when the city has no data
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForecastRecord {
    temps: BTreeMap<NaiveDate, String>,
}

impl ForecastRecord {
    /// Returns the temperature for the given date if the city has one
    ///
    /// # Arguments
    ///
    /// * 'date' - the date to look up
    pub fn get(&self, date: &NaiveDate) -> Option<&String> {
        self.temps.get(date)
    }

    /// Returns the record's dates in chronological order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.temps.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.temps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temps.is_empty()
    }
}

impl FromIterator<(NaiveDate, String)> for ForecastRecord {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, String)>>(iter: I) -> Self {
        ForecastRecord { temps: iter.into_iter().collect() }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for ForecastRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let temps = self.temps
            .iter()
            .map(|(date, temp)| format!("{}: {}", date.format("%Y-%m-%d"), temp))
            .collect::<Vec<String>>();
        write!(f, "{{{}}}", temps.join(", "))
    }
}

/// Translates a city's weekday highs into a date keyed record.
///
/// Any failure to get the highs, be it a missing city code, a failed fetch or a document
/// that couldn't be parsed, gives an empty record so that one city never aborts the run.
/// Weekday names not present in the window are dropped.
///
/// # Arguments
///
/// * 'city' - the city the highs belong to, used for logging only
/// * 'highs' - result of getting the city's highs
/// * 'window' - weekday to date mapping for the current run
pub fn assemble(city: &City, highs: Result<WeekdayHighs, ForecastError>, window: &WeekWindow) -> ForecastRecord {
    let highs = match highs {
        Ok(h) => h,
        Err(e) => {
            warn!("No forecast for {}: {}", city, e);
            WeekdayHighs::new()
        }
    };

    highs
        .into_iter()
        .filter_map(|(week_day, temp)| window.get(&week_day).map(|date| (date, temp)))
        .collect()
}
