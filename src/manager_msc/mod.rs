use std::time::Duration;
use log::debug;
use ureq::Agent;
use crate::config::Feeds;
use crate::errors::{DirectoryFetchError, ForecastError};
use crate::models::city::{CityCode, RawForecastEntry};
use crate::models::citypage::parse_citypage;
use crate::models::site_list::{SiteFeature, SiteList};

/// Source of city codes and city forecasts
pub trait WeatherFeed {
    /// Returns every site known to the feed, including its code and province
    fn site_features(&self) -> Result<Vec<SiteFeature>, DirectoryFetchError>;

    /// Returns all forecast entries, day and night, for one city
    ///
    /// # Arguments
    ///
    /// * 'province' - province code, e.g. "AB"
    /// * 'code' - the city code within the province
    fn forecast_entries(&self, province: &str, code: &CityCode) -> Result<Vec<RawForecastEntry>, ForecastError>;
}

/// Struct for fetching city codes and city page forecasts from the Meteorological Service of Canada
pub struct MSC {
    agent: Agent,
    site_list_url: String,
    citypage_base_url: String,
}

impl MSC {
    /// Returns a MSC struct ready for fetching documents
    ///
    /// # Arguments
    ///
    /// * 'feeds' - urls and timeout to use
    pub fn new(feeds: &Feeds) -> MSC {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(feeds.timeout_secs)))
            .build();

        let agent = config.into();

        Self {
            agent,
            site_list_url: feeds.site_list_url.clone(),
            citypage_base_url: feeds.citypage_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the city page url for the given province and city code
    ///
    /// # Arguments
    ///
    /// * 'province' - province code
    /// * 'code' - city code
    fn citypage_url(&self, province: &str, code: &CityCode) -> String {
        format!("{}/{}/{}_e.xml", self.citypage_base_url, province, code.code)
    }
}

impl WeatherFeed for MSC {
    fn site_features(&self) -> Result<Vec<SiteFeature>, DirectoryFetchError> {
        debug!("Fetching site list from {}", self.site_list_url);

        let json = self.agent
            .get(&self.site_list_url)
            .call()?
            .body_mut()
            .read_to_string()?;

        let site_list: SiteList = serde_json::from_str(&json)?;

        Ok(site_list.features)
    }

    fn forecast_entries(&self, province: &str, code: &CityCode) -> Result<Vec<RawForecastEntry>, ForecastError> {
        let url = self.citypage_url(province, code);
        debug!("Fetching city page from {}", url);

        let xml = self.agent
            .get(&url)
            .call()?
            .body_mut()
            .read_to_string()?;

        parse_citypage(&xml)
    }
}
