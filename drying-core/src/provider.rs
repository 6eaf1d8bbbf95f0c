//! Translators from weather provider payloads to [`WeatherObservation`].
//!
//! Fetching is left to the caller; these only reshape a JSON body that has
//! already been received.

use crate::{
    WeatherObservation,
    provider::{
        openmeteo::OpenMeteoPayload, openweather::OpenWeatherPayload,
        tsukumijima::TsukumijimaPayload,
    },
};
use std::fmt::Debug;

pub mod openmeteo;
pub mod openweather;
pub mod tsukumijima;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
    OpenMeteo,
    Tsukumijima,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweather",
            ProviderId::OpenMeteo => "openmeteo",
            ProviderId::Tsukumijima => "tsukumijima",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeather, ProviderId::OpenMeteo, ProviderId::Tsukumijima]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = ProviderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        ProviderId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == lower)
            .ok_or_else(|| ProviderError::UnknownProvider(value.to_string()))
    }
}

impl std::str::FromStr for ProviderId {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::try_from(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Unknown provider '{0}'. Supported providers: openweather, openmeteo, tsukumijima.")]
    UnknownProvider(String),

    #[error("Failed to parse {provider} payload: {source}")]
    Malformed {
        provider: ProviderId,
        source: serde_json::Error,
    },

    #[error("{provider} payload contained no {section} data")]
    MissingSection {
        provider: ProviderId,
        section: &'static str,
    },
}

pub trait PayloadNormalizer: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    fn normalize(&self, body: &str) -> Result<WeatherObservation, ProviderError>;
}

pub fn normalizer_for(id: ProviderId) -> Box<dyn PayloadNormalizer> {
    match id {
        ProviderId::OpenWeather => Box::new(OpenWeatherPayload),
        ProviderId::OpenMeteo => Box::new(OpenMeteoPayload),
        ProviderId::Tsukumijima => Box::new(TsukumijimaPayload),
    }
}

/// Shortcut for `normalizer_for(id).normalize(body)`.
pub fn parse_observation(id: ProviderId, body: &str) -> Result<WeatherObservation, ProviderError> {
    normalizer_for(id).normalize(body)
}

fn parse_json<T: serde::de::DeserializeOwned>(
    provider: ProviderId,
    body: &str,
) -> Result<T, ProviderError> {
    serde_json::from_str(body).map_err(|source| ProviderError::Malformed { provider, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let parsed = ProviderId::try_from(id.as_str()).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_is_case_insensitive() {
        assert_eq!("OpenMeteo".parse::<ProviderId>().unwrap(), ProviderId::OpenMeteo);
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("accuweather").unwrap_err();
        assert!(err.to_string().contains("Unknown provider 'accuweather'"));
        assert!(err.to_string().contains("openmeteo"));
    }

    #[test]
    fn normalizer_reports_its_id() {
        for id in ProviderId::all() {
            assert_eq!(normalizer_for(*id).id(), *id);
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_observation(ProviderId::OpenMeteo, "{not json").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed { provider: ProviderId::OpenMeteo, .. }));
    }
}
