use std::fmt;

/// A city as listed in the sheet, identified by its province and name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct City {
    pub province: String,
    pub name: String,
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.province)
    }
}

/// Government site code for a city, e.g. "s0000458"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityCode {
    pub code: String,
}

/// One forecast unit from a city page, day or night
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawForecastEntry {
    pub period_label: String,
    pub temperature_value: String,
}
