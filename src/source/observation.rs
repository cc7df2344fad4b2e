//! Weather Underground PWS observation payloads.
//!
//! Serde types matching the `v2/pws/observations/current` response, plus
//! the flattened [`Observation`] the rest of the crate consumes. A field
//! the station did not report stays `None` all the way through; it is never
//! defaulted to zero.

use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;

use crate::data::Metric;

/// Top-level API response: a list of current observations (one per
/// requested station; this crate only ever asks for one).
#[derive(Debug, Clone, Deserialize)]
pub struct PwsResponse {
    pub observations: Vec<PwsObservation>,
}

/// One raw observation as the API serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct PwsObservation {
    /// Observation time as a unix timestamp.
    pub epoch: Option<i64>,
    pub humidity: Option<f64>,
    /// Wind direction in degrees.
    pub winddir: Option<f64>,
    pub imperial: Option<ImperialReadings>,
}

/// The `imperial` sub-object (the tool always requests `units=e`).
#[derive(Debug, Clone, Deserialize)]
pub struct ImperialReadings {
    pub temp: Option<f64>,
    #[serde(rename = "heatIndex")]
    pub heat_index: Option<f64>,
    pub dewpt: Option<f64>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "windGust")]
    pub wind_gust: Option<f64>,
    pub pressure: Option<f64>,
    #[serde(rename = "precipRate")]
    pub precip_rate: Option<f64>,
    #[serde(rename = "precipTotal")]
    pub precip_total: Option<f64>,
}

/// A complete station reading at one instant, flattened for ingestion.
///
/// The first five fields are the tracked metrics; the rest are shown as
/// current-conditions extras without history.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub at: DateTime<Local>,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_dir: Option<f64>,
    pub dew_point: Option<f64>,
    pub precip_rate: Option<f64>,
    pub precip_total: Option<f64>,
}

impl Observation {
    /// An observation with every reading missing. Useful as a starting
    /// point for tests and partial constructions.
    pub fn empty(at: DateTime<Local>) -> Self {
        Self {
            at,
            temperature: None,
            feels_like: None,
            humidity: None,
            wind_speed: None,
            pressure: None,
            wind_gust: None,
            wind_dir: None,
            dew_point: None,
            precip_rate: None,
            precip_total: None,
        }
    }

    /// The reading for a tracked metric.
    pub fn tracked_value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::FeelsLike => self.feels_like,
            Metric::Humidity => self.humidity,
            Metric::WindSpeed => self.wind_speed,
            Metric::Pressure => self.pressure,
        }
    }

    /// Flatten a raw API observation.
    ///
    /// A missing or unparseable epoch falls back to the local receive time;
    /// the observation is still usable, just timestamped at arrival.
    pub fn from_pws(raw: &PwsObservation) -> Self {
        let at = raw
            .epoch
            .and_then(|epoch| Local.timestamp_opt(epoch, 0).single())
            .unwrap_or_else(Local::now);
        let imperial = raw.imperial.as_ref();
        Self {
            at,
            temperature: imperial.and_then(|i| i.temp),
            feels_like: imperial.and_then(|i| i.heat_index),
            humidity: raw.humidity,
            wind_speed: imperial.and_then(|i| i.wind_speed),
            pressure: imperial.and_then(|i| i.pressure),
            wind_gust: imperial.and_then(|i| i.wind_gust),
            wind_dir: raw.winddir,
            dew_point: imperial.and_then(|i| i.dewpt),
            precip_rate: imperial.and_then(|i| i.precip_rate),
            precip_total: imperial.and_then(|i| i.precip_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "observations": [{
            "stationID": "KCOHOTSU8",
            "epoch": 1700000000,
            "humidity": 45,
            "winddir": 270,
            "imperial": {
                "temp": 70.3,
                "heatIndex": 69.0,
                "dewpt": 48.2,
                "windSpeed": 4.5,
                "windGust": 7.0,
                "pressure": 29.95,
                "precipRate": 0.0,
                "precipTotal": 0.12
            }
        }]
    }"#;

    #[test]
    fn test_deserialize_response() {
        let response: PwsResponse = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(response.observations.len(), 1);

        let obs = Observation::from_pws(&response.observations[0]);
        assert_eq!(obs.temperature, Some(70.3));
        assert_eq!(obs.feels_like, Some(69.0));
        assert_eq!(obs.humidity, Some(45.0));
        assert_eq!(obs.wind_speed, Some(4.5));
        assert_eq!(obs.pressure, Some(29.95));
        assert_eq!(obs.wind_dir, Some(270.0));
        assert_eq!(obs.precip_total, Some(0.12));
        assert_eq!(obs.at, Local.timestamp_opt(1_700_000_000, 0).unwrap());
    }

    #[test]
    fn test_omitted_fields_stay_missing() {
        let json = r#"{ "observations": [{ "epoch": 1700000000, "imperial": { "temp": 70.3 } }] }"#;
        let response: PwsResponse = serde_json::from_str(json).unwrap();
        let obs = Observation::from_pws(&response.observations[0]);
        assert_eq!(obs.temperature, Some(70.3));
        assert_eq!(obs.humidity, None);
        assert_eq!(obs.wind_speed, None);
        assert_eq!(obs.pressure, None);
    }

    #[test]
    fn test_missing_epoch_falls_back_to_now() {
        let json = r#"{ "observations": [{ "imperial": { "temp": 70.3 } }] }"#;
        let response: PwsResponse = serde_json::from_str(json).unwrap();
        let before = Local::now();
        let obs = Observation::from_pws(&response.observations[0]);
        assert!(obs.at >= before);
    }

    #[test]
    fn test_tracked_values() {
        let mut obs = Observation::empty(Local::now());
        obs.temperature = Some(70.0);
        obs.pressure = Some(29.9);
        assert_eq!(obs.tracked_value(Metric::Temperature), Some(70.0));
        assert_eq!(obs.tracked_value(Metric::Pressure), Some(29.9));
        assert_eq!(obs.tracked_value(Metric::Humidity), None);
    }
}
