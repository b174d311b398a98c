use std::collections::HashMap;
use crate::errors::LookupMiss;
use crate::models::city::{City, CityCode};
use crate::models::site_list::SiteFeature;

/// Lookup from province code and exact city name to city code
pub struct CityCodeDirectory {
    codes: HashMap<String, HashMap<String, CityCode>>,
}

impl CityCodeDirectory {
    /// Builds the directory from the site features of the city code feed.
    ///
    /// Names are matched exactly, and the last feature wins if two features share
    /// province and name.
    ///
    /// # Arguments
    ///
    /// * 'features' - site features as fetched from the feed
    pub fn build(features: Vec<SiteFeature>) -> CityCodeDirectory {
        let mut codes: HashMap<String, HashMap<String, CityCode>> = HashMap::new();

        for feature in features {
            let properties = feature.properties;
            codes.entry(properties.province_code)
                .or_default()
                .insert(properties.english_name, CityCode { code: properties.code });
        }

        CityCodeDirectory { codes }
    }

    /// Returns the city code for the given city
    ///
    /// # Arguments
    ///
    /// * 'city' - the city to look up
    pub fn lookup(&self, city: &City) -> Result<&CityCode, LookupMiss> {
        self.codes
            .get(&city.province)
            .and_then(|cities| cities.get(&city.name))
            .ok_or_else(|| LookupMiss { province: city.province.clone(), name: city.name.clone() })
    }

    /// Number of cities in the directory, all provinces included
    pub fn len(&self) -> usize {
        self.codes.values().map(|c| c.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::site_list::SiteProperties;

    fn feature(province: &str, name: &str, code: &str) -> SiteFeature {
        SiteFeature {
            properties: SiteProperties {
                code: code.to_string(),
                english_name: name.to_string(),
                province_code: province.to_string(),
            }
        }
    }

    fn city(province: &str, name: &str) -> City {
        City { province: province.to_string(), name: name.to_string() }
    }

    #[test]
    fn lookup_by_province_and_name() {
        let directory = CityCodeDirectory::build(vec![
            feature("AB", "Edmonton", "s0000045"),
            feature("AB", "Calgary", "s0000047"),
            feature("ON", "Toronto", "s0000458"),
        ]);

        assert_eq!(directory.len(), 3);
        assert_eq!(directory.lookup(&city("AB", "Calgary")).unwrap().code, "s0000047");
        assert_eq!(directory.lookup(&city("ON", "Toronto")).unwrap().code, "s0000458");
    }

    #[test]
    fn same_name_in_different_provinces() {
        let directory = CityCodeDirectory::build(vec![
            feature("NS", "Windsor", "s0000001"),
            feature("ON", "Windsor", "s0000646"),
        ]);

        assert_eq!(directory.lookup(&city("NS", "Windsor")).unwrap().code, "s0000001");
        assert_eq!(directory.lookup(&city("ON", "Windsor")).unwrap().code, "s0000646");
    }

    #[test]
    fn last_feature_wins() {
        let directory = CityCodeDirectory::build(vec![
            feature("AB", "Edmonton", "s0000001"),
            feature("AB", "Edmonton", "s0000045"),
        ]);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup(&city("AB", "Edmonton")).unwrap().code, "s0000045");
    }

    #[test]
    fn missing_city_is_lookup_miss() {
        let directory = CityCodeDirectory::build(vec![feature("AB", "Edmonton", "s0000045")]);

        let miss = directory.lookup(&city("AB", "edmonton")).unwrap_err();
        assert_eq!(miss, LookupMiss { province: "AB".to_string(), name: "edmonton".to_string() });

        assert!(directory.lookup(&city("BC", "Edmonton")).is_err());
    }
}
