use serde::Deserialize;

use crate::WeatherObservation;

use super::{PayloadNormalizer, ProviderError, ProviderId, parse_json};

/// OpenWeather `data/2.5/weather` response, requested with `units=metric`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenWeatherPayload;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    temp: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWeather {
    main: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwVolume {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hours: Option<f64>,
}

impl OwVolume {
    fn depth(&self) -> Option<f64> {
        self.one_hour.or(self.three_hours)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCurrentResponse {
    main: Option<OwMain>,
    weather: Vec<OwWeather>,
    wind: Option<OwWind>,
    rain: Option<OwVolume>,
    snow: Option<OwVolume>,
}

impl PayloadNormalizer for OpenWeatherPayload {
    fn id(&self) -> ProviderId {
        ProviderId::OpenWeather
    }

    fn normalize(&self, body: &str) -> Result<WeatherObservation, ProviderError> {
        let parsed: OwCurrentResponse = parse_json(self.id(), body)?;

        let main = parsed.main.ok_or(ProviderError::MissingSection {
            provider: self.id(),
            section: "main",
        })?;

        // Weather ids here are OpenWeather's own scheme, not WMO, so only the
        // text is carried over.
        let condition_text = parsed
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.description.filter(|d| !d.trim().is_empty()).or(w.main));

        let rain = parsed.rain.and_then(|v| v.depth());
        let snow = parsed.snow.and_then(|v| v.depth());
        let precipitation_mm = match (rain, snow) {
            (None, None) => None,
            (rain, snow) => Some(rain.unwrap_or(0.0) + snow.unwrap_or(0.0)),
        };

        Ok(WeatherObservation {
            temperature_c: main.temp,
            humidity_pct: main.humidity,
            wind_speed_mps: parsed.wind.and_then(|w| w.speed),
            precipitation_mm,
            condition_code: None,
            condition_text,
            rain_chance_pct: None,
        })
    }
}
