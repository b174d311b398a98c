use serde::Deserialize;
use crate::errors::ForecastError;
use crate::models::city::RawForecastEntry;

#[derive(Deserialize, Debug)]
pub struct Period {
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Deserialize, Debug)]
pub struct Temperature {
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Deserialize, Debug)]
pub struct Temperatures {
    #[serde(default)]
    pub temperature: Vec<Temperature>,
}

#[derive(Deserialize, Debug)]
pub struct Forecast {
    pub period: Period,
    pub temperatures: Temperatures,
}

#[derive(Deserialize, Debug)]
pub struct ForecastGroup {
    #[serde(rename = "forecast", default)]
    pub forecasts: Vec<Forecast>,
}

#[derive(Deserialize, Debug)]
pub struct SiteData {
    #[serde(rename = "forecastGroup")]
    pub forecast_group: ForecastGroup,
}

impl Forecast {
    /// Reduces a forecast element to its period label and first temperature value
    ///
    fn into_entry(self) -> Result<RawForecastEntry, ForecastError> {
        let temperature = self.temperatures.temperature
            .into_iter()
            .next()
            .ok_or(ForecastError::Parse(format!("no temperature for period {}", self.period.value)))?;

        Ok(RawForecastEntry {
            period_label: self.period.value,
            temperature_value: temperature.value,
        })
    }
}

/// Decodes a city page XML document and returns all its forecast entries in document order.
///
/// A document without a forecast group, or with a forecast lacking either a period or
/// a temperature, is reported as a parse error. A forecast group without any forecasts
/// is valid and gives an empty vector.
///
/// # Arguments
///
/// * 'xml' - the city page document
pub fn parse_citypage(xml: &str) -> Result<Vec<RawForecastEntry>, ForecastError> {
    let site_data: SiteData = quick_xml::de::from_str(xml)?;

    site_data.forecast_group.forecasts
        .into_iter()
        .map(Forecast::into_entry)
        .collect()
}
