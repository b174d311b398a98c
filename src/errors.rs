use thiserror::Error;

/// Error depicting errors that occur while loading the configuration
///
#[derive(Error, Debug)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Error, Debug)]
#[error("LoggingError: {0}")]
pub struct LoggingError(pub String);
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self { LoggingError(e.to_string()) }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self { LoggingError(e.to_string()) }
}

/// Error depicting errors that occur while reading or writing the sheet file
///
#[derive(Error, Debug)]
#[error("SheetError: {0}")]
pub struct SheetError(pub String);
impl From<std::io::Error> for SheetError {
    fn from(e: std::io::Error) -> Self { SheetError(e.to_string()) }
}
impl From<csv::Error> for SheetError {
    fn from(e: csv::Error) -> Self { SheetError(e.to_string()) }
}

/// A city from the sheet that has no entry in the city code directory
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no city code found for {name} in province {province}")]
pub struct LookupMiss {
    pub province: String,
    pub name: String,
}

/// Failure to fetch or decode the city code directory, fatal for a run
///
#[derive(Error, Debug)]
#[error("error fetching city code directory: {0}")]
pub struct DirectoryFetchError(pub String);
impl From<ureq::Error> for DirectoryFetchError {
    fn from(e: ureq::Error) -> Self { DirectoryFetchError(format!("http request error: {}", e)) }
}
impl From<serde_json::Error> for DirectoryFetchError {
    fn from(e: serde_json::Error) -> Self { DirectoryFetchError(format!("json document error: {}", e)) }
}

/// Per city forecast failures, these never abort a run
///
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("ForecastError::Fetch: {0}")]
    Fetch(String),
    #[error("ForecastError::Parse: {0}")]
    Parse(String),
    #[error("ForecastError::Lookup: {0}")]
    Lookup(#[from] LookupMiss),
}
impl From<ureq::Error> for ForecastError {
    fn from(e: ureq::Error) -> Self { ForecastError::Fetch(e.to_string()) }
}
impl From<quick_xml::DeError> for ForecastError {
    fn from(e: quick_xml::DeError) -> Self { ForecastError::Parse(e.to_string()) }
}

/// Run level errors, any of these aborts the run
///
#[derive(Error, Debug)]
pub enum WeatherGridError {
    #[error(transparent)]
    Directory(#[from] DirectoryFetchError),
    #[error(transparent)]
    Sheet(#[from] SheetError),
}
