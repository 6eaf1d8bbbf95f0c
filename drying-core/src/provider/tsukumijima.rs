use serde::Deserialize;

use crate::WeatherObservation;

use super::{PayloadNormalizer, ProviderError, ProviderId, parse_json};

/// Livedoor-compatible forecast from `weather.tsukumijima.net/api/forecast/city/{code}`.
///
/// Only today's entry is used. The API carries no humidity or wind, so the
/// result always goes down the text path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsukumijimaPayload;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TkCelsius {
    celsius: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TkTemperature {
    max: TkCelsius,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TkChanceOfRain {
    #[serde(rename = "T00_06")]
    t00_06: Option<String>,
    #[serde(rename = "T06_12")]
    t06_12: Option<String>,
    #[serde(rename = "T12_18")]
    t12_18: Option<String>,
    #[serde(rename = "T18_24")]
    t18_24: Option<String>,
}

impl TkChanceOfRain {
    /// Highest chance across the periods that have a value. Past periods
    /// come back as `"--%"` and are skipped.
    fn max_pct(&self) -> Option<f64> {
        [&self.t00_06, &self.t06_12, &self.t12_18, &self.t18_24]
            .into_iter()
            .filter_map(|period| period.as_deref().and_then(parse_percent))
            .reduce(f64::max)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TkForecast {
    telop: Option<String>,
    temperature: TkTemperature,
    #[serde(rename = "chanceOfRain")]
    chance_of_rain: TkChanceOfRain,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TkResponse {
    forecasts: Vec<TkForecast>,
}

fn parse_percent(raw: &str) -> Option<f64> {
    raw.trim().trim_end_matches('%').trim().parse().ok()
}

fn parse_celsius(raw: &TkCelsius) -> Option<f64> {
    raw.celsius.as_deref().and_then(|c| c.trim().parse().ok())
}

impl PayloadNormalizer for TsukumijimaPayload {
    fn id(&self) -> ProviderId {
        ProviderId::Tsukumijima
    }

    fn normalize(&self, body: &str) -> Result<WeatherObservation, ProviderError> {
        let parsed: TkResponse = parse_json(self.id(), body)?;

        let today = parsed.forecasts.into_iter().next().ok_or(ProviderError::MissingSection {
            provider: self.id(),
            section: "forecasts",
        })?;

        Ok(WeatherObservation {
            temperature_c: parse_celsius(&today.temperature.max),
            humidity_pct: None,
            wind_speed_mps: None,
            precipitation_mm: None,
            condition_code: None,
            condition_text: today.telop,
            rain_chance_pct: today.chance_of_rain.max_pct(),
        })
    }
}
