use serde::Deserialize;

use crate::WeatherObservation;

use super::{PayloadNormalizer, ProviderError, ProviderId, parse_json};

/// Open-Meteo `v1/forecast` response with a `current` block requesting
/// `temperature_2m,relative_humidity_2m,precipitation,rain,showers,snowfall,weather_code,wind_speed_10m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMeteoPayload;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OmCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    wind_speed_10m: Option<f64>,
    precipitation: Option<f64>,
    rain: Option<f64>,
    showers: Option<f64>,
    /// Centimetres of snow.
    snowfall: Option<f64>,
    weather_code: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OmCurrentUnits {
    wind_speed_10m: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OmResponse {
    current: Option<OmCurrent>,
    current_units: Option<OmCurrentUnits>,
}

/// Open-Meteo reports wind in km/h unless `wind_speed_unit` was set.
fn wind_to_mps(speed: f64, unit: Option<&str>) -> f64 {
    match unit {
        Some("m/s") => speed,
        Some("mp/h") | Some("mph") => speed * 0.44704,
        Some("kn") => speed * 0.514_444,
        _ => speed / 3.6,
    }
}

impl OmCurrent {
    /// `precipitation` already sums rain, showers and snowfall; the parts are
    /// only used when the total was not requested.
    fn precipitation_mm(&self) -> Option<f64> {
        if self.precipitation.is_some() {
            return self.precipitation;
        }

        // 7 cm of snow is about 10 mm of water.
        let snow_mm = self.snowfall.map(|cm| cm * 10.0 / 7.0);
        let parts = [self.rain, self.showers, snow_mm];
        if parts.iter().all(Option::is_none) {
            None
        } else {
            Some(parts.iter().flatten().sum())
        }
    }
}

impl PayloadNormalizer for OpenMeteoPayload {
    fn id(&self) -> ProviderId {
        ProviderId::OpenMeteo
    }

    fn normalize(&self, body: &str) -> Result<WeatherObservation, ProviderError> {
        let parsed: OmResponse = parse_json(self.id(), body)?;

        let current = parsed.current.ok_or(ProviderError::MissingSection {
            provider: self.id(),
            section: "current",
        })?;

        let wind_unit = parsed.current_units.and_then(|u| u.wind_speed_10m);

        Ok(WeatherObservation {
            temperature_c: current.temperature_2m,
            humidity_pct: current.relative_humidity_2m,
            wind_speed_mps: current
                .wind_speed_10m
                .map(|speed| wind_to_mps(speed, wind_unit.as_deref())),
            precipitation_mm: current.precipitation_mm(),
            condition_code: current.weather_code,
            condition_text: None,
            rain_chance_pct: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-6)
    }

    #[test]
    fn maps_current_block() {
        let body = r#"{
            "latitude": 35.7, "longitude": 139.7, "timezone": "Asia/Tokyo",
            "current_units": {"temperature_2m": "°C", "wind_speed_10m": "m/s", "precipitation": "mm"},
            "current": {
                "time": "2025-07-26T12:00", "interval": 900,
                "temperature_2m": 28.0, "relative_humidity_2m": 40,
                "precipitation": 0.0, "rain": 0.0, "showers": 0.0, "snowfall": 0.0,
                "weather_code": 0, "wind_speed_10m": 4.0
            }
        }"#;

        let obs = OpenMeteoPayload.normalize(body).unwrap();

        assert_eq!(obs.temperature_c, Some(28.0));
        assert_eq!(obs.humidity_pct, Some(40.0));
        assert_eq!(obs.wind_speed_mps, Some(4.0));
        assert_eq!(obs.precipitation_mm, Some(0.0));
        assert_eq!(obs.condition_code, Some(0));
    }

    #[test]
    fn default_wind_unit_is_kmh() {
        let body = r#"{"current": {"wind_speed_10m": 18.0}}"#;
        let obs = OpenMeteoPayload.normalize(body).unwrap();
        assert!(close(obs.wind_speed_mps, 5.0));
    }

    #[test]
    fn precipitation_parts_are_summed_when_total_missing() {
        let body = r#"{"current": {"rain": 0.3, "showers": 0.2}}"#;
        let obs = OpenMeteoPayload.normalize(body).unwrap();
        assert!(close(obs.precipitation_mm, 0.5));
    }

    #[test]
    fn no_precipitation_fields_means_unknown() {
        let obs = OpenMeteoPayload.normalize(r#"{"current": {"temperature_2m": 20.0}}"#).unwrap();
        assert_eq!(obs.precipitation_mm, None);
    }

    #[test]
    fn missing_current_is_an_error() {
        let err = OpenMeteoPayload
            .normalize(r#"{"error": true, "reason": "Latitude must be in range of -90 to 90°."}"#)
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingSection { section: "current", .. }));
    }
}
