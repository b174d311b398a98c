use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct Feeds {
    #[serde(default = "default_site_list_url")]
    pub site_list_url: String,
    #[serde(default = "default_citypage_base_url")]
    pub citypage_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Feeds {
    fn default() -> Self {
        Feeds {
            site_list_url: default_site_list_url(),
            citypage_base_url: default_citypage_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Layout of the sheet, all rows and columns are 1-based
#[derive(Deserialize, Clone)]
pub struct SheetLayout {
    pub path: String,
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default = "default_city_first_row")]
    pub city_first_row: usize,
    #[serde(default = "default_city_first_col")]
    pub city_first_col: usize,
    #[serde(default = "default_data_first_col")]
    pub data_first_col: usize,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

impl Default for General {
    fn default() -> Self {
        General { log_path: None, log_level: LevelFilter::Info, log_to_stdout: true }
    }
}

#[derive(Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feeds: Feeds,
    pub sheet: SheetLayout,
    #[serde(default)]
    pub general: General,
}

fn default_site_list_url() -> String {
    "https://collaboration.cmc.ec.gc.ca/cmc/cmos/public_doc/msc-data/citypage-weather/site_list_en.geojson".to_string()
}
fn default_citypage_base_url() -> String { "https://dd.weather.gc.ca/citypage_weather/xml".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_header_row() -> usize { 2 }
fn default_city_first_row() -> usize { 3 }
fn default_city_first_col() -> usize { 1 }
fn default_data_first_col() -> usize { 3 }

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    let layout = &config.sheet;
    if layout.header_row == 0 || layout.city_first_row == 0 || layout.city_first_col == 0 || layout.data_first_col == 0 {
        return Err(ConfigError::from("sheet rows and columns are 1-based"));
    }
    if layout.city_first_row <= layout.header_row {
        return Err(ConfigError::from("city rows must start below the header row"));
    }
    if layout.data_first_col < layout.city_first_col + 2 {
        return Err(ConfigError::from("data columns overlap the city columns"));
    }

    Ok(config)
}
