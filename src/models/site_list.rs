use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SiteProperties {
    #[serde(rename = "Codes")]
    pub code: String,
    #[serde(rename = "English Names")]
    pub english_name: String,
    #[serde(rename = "Province Codes")]
    pub province_code: String,
}

#[derive(Deserialize, Debug)]
pub struct SiteFeature {
    pub properties: SiteProperties,
}

#[derive(Deserialize, Debug)]
pub struct SiteList {
    pub features: Vec<SiteFeature>,
}
