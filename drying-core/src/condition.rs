//! Weather condition classification.
//!
//! Coded conditions follow the WMO weather interpretation codes used by
//! Open-Meteo (<https://open-meteo.com/en/docs>). Free-text summaries are
//! matched against Japanese and English tokens.

use crate::messages::Locale;

/// Weather condition derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    /// WMO 0
    ClearSky,
    /// WMO 1
    MainlyClear,
    /// WMO 2
    PartlyCloudy,
    /// WMO 3
    Overcast,
    /// WMO 45, 48
    Fog,
    /// WMO 51, 53, 55
    Drizzle,
    /// WMO 56, 57
    FreezingDrizzle,
    /// WMO 61, 63, 65
    Rain,
    /// WMO 66, 67
    FreezingRain,
    /// WMO 71, 73, 75
    Snow,
    /// WMO 77
    SnowGrains,
    /// WMO 80, 81, 82
    RainShowers,
    /// WMO 85, 86
    SnowShowers,
    /// WMO 95
    Thunderstorm,
    /// WMO 96, 99
    ThunderstormWithHail,
    Unknown,
}

impl WeatherCondition {
    pub const fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Rain, snow or anything else falling out of the sky.
    pub const fn is_precipitation(&self) -> bool {
        matches!(
            self,
            Self::Drizzle
                | Self::FreezingDrizzle
                | Self::Rain
                | Self::FreezingRain
                | Self::Snow
                | Self::SnowGrains
                | Self::RainShowers
                | Self::SnowShowers
                | Self::Thunderstorm
                | Self::ThunderstormWithHail
        )
    }

    pub fn description(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => match self {
                Self::ClearSky => "快晴",
                Self::MainlyClear => "晴れ",
                Self::PartlyCloudy => "一部曇り",
                Self::Overcast => "曇り",
                Self::Fog => "霧",
                Self::Drizzle => "霧雨",
                Self::FreezingDrizzle => "着氷性の霧雨",
                Self::Rain => "雨",
                Self::FreezingRain => "着氷性の雨",
                Self::Snow => "雪",
                Self::SnowGrains => "霧雪",
                Self::RainShowers => "にわか雨",
                Self::SnowShowers => "にわか雪",
                Self::Thunderstorm => "雷雨",
                Self::ThunderstormWithHail => "ひょうを伴う雷雨",
                Self::Unknown => "不明",
            },
            Locale::En => match self {
                Self::ClearSky => "Clear sky",
                Self::MainlyClear => "Mainly clear",
                Self::PartlyCloudy => "Partly cloudy",
                Self::Overcast => "Overcast",
                Self::Fog => "Fog",
                Self::Drizzle => "Drizzle",
                Self::FreezingDrizzle => "Freezing drizzle",
                Self::Rain => "Rain",
                Self::FreezingRain => "Freezing rain",
                Self::Snow => "Snow",
                Self::SnowGrains => "Snow grains",
                Self::RainShowers => "Rain showers",
                Self::SnowShowers => "Snow showers",
                Self::Thunderstorm => "Thunderstorm",
                Self::ThunderstormWithHail => "Thunderstorm with hail",
                Self::Unknown => "Unknown",
            },
        }
    }
}

/// Coarse category of a free-text weather summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextCondition {
    Clear,
    Cloudy,
    Precipitation,
    Other,
}

const PRECIPITATION_TOKENS: &[&str] = &[
    "雨", "雪", "雷", "rain", "snow", "drizzle", "shower", "sleet", "thunder", "storm", "hail",
];
const CLEAR_TOKENS: &[&str] = &["晴", "sunny", "clear", "fair"];
const CLOUDY_TOKENS: &[&str] = &["曇", "くもり", "cloud", "overcast"];

impl TextCondition {
    /// Precipitation tokens win over sky tokens, so "晴時々雨" is precipitation.
    /// Clear wins over cloudy, so "晴れ時々曇り" counts as clear.
    pub fn parse(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has_any = |tokens: &[&str]| tokens.iter().any(|token| lower.contains(token));

        if has_any(PRECIPITATION_TOKENS) {
            TextCondition::Precipitation
        } else if has_any(CLEAR_TOKENS) {
            TextCondition::Clear
        } else if has_any(CLOUDY_TOKENS) {
            TextCondition::Cloudy
        } else {
            TextCondition::Other
        }
    }
}
