use serde::{Deserialize, Serialize};

use crate::messages::Locale;

/// One weather snapshot, already normalised from whatever shape a provider
/// returned. Every field is optional because providers differ in what they
/// expose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherObservation {
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub wind_speed_mps: Option<f64>,
    pub precipitation_mm: Option<f64>,
    /// WMO weather interpretation code.
    pub condition_code: Option<i32>,
    /// Free-text summary such as "sunny" or "晴れ".
    pub condition_text: Option<String>,
    /// Highest chance of rain across the day's forecast periods.
    pub rain_chance_pct: Option<f64>,
}

impl WeatherObservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature_c = Some(celsius);
        self
    }

    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity_pct = Some(percent);
        self
    }

    pub fn with_wind_speed(mut self, mps: f64) -> Self {
        self.wind_speed_mps = Some(mps);
        self
    }

    pub fn with_precipitation(mut self, mm: f64) -> Self {
        self.precipitation_mm = Some(mm);
        self
    }

    pub fn with_condition_code(mut self, code: i32) -> Self {
        self.condition_code = Some(code);
        self
    }

    pub fn with_condition_text(mut self, text: impl Into<String>) -> Self {
        self.condition_text = Some(text.into());
        self
    }

    pub fn with_rain_chance(mut self, percent: f64) -> Self {
        self.rain_chance_pct = Some(percent);
        self
    }

    /// True when no field carries any signal.
    pub fn is_empty(&self) -> bool {
        self.temperature_c.is_none()
            && self.humidity_pct.is_none()
            && self.wind_speed_mps.is_none()
            && self.precipitation_mm.is_none()
            && self.condition_code.is_none()
            && self.condition_text.is_none()
            && self.rain_chance_pct.is_none()
    }

    /// Copy with out-of-range values repaired: non-finite numbers and blank
    /// text become missing, percentages are clamped to 0..=100 and
    /// non-negative quantities to 0.
    pub fn sanitized(&self) -> Self {
        Self {
            temperature_c: finite(self.temperature_c),
            humidity_pct: finite(self.humidity_pct).map(|h| h.clamp(0.0, 100.0)),
            wind_speed_mps: finite(self.wind_speed_mps).map(|w| w.max(0.0)),
            precipitation_mm: finite(self.precipitation_mm).map(|p| p.max(0.0)),
            condition_code: self.condition_code,
            condition_text: self
                .condition_text
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_owned),
            rain_chance_pct: finite(self.rain_chance_pct).map(|c| c.clamp(0.0, 100.0)),
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// How suitable the weather is for air-drying laundry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DryingStatus {
    VeryEasy,
    Easy,
    Moderate,
    Difficult,
    RecommendIndoor,
    Unknown,
}

/// Visual treatment a front end should pick for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl DryingStatus {
    pub fn severity(&self) -> Severity {
        match self {
            DryingStatus::VeryEasy | DryingStatus::Easy => Severity::Success,
            DryingStatus::Moderate => Severity::Info,
            DryingStatus::Difficult | DryingStatus::Unknown => Severity::Warning,
            DryingStatus::RecommendIndoor => Severity::Danger,
        }
    }

    /// Short label shown next to the advice text.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ja, DryingStatus::VeryEasy) => "非常に乾きやすい",
            (Locale::Ja, DryingStatus::Easy) => "乾きやすい",
            (Locale::Ja, DryingStatus::Moderate) => "普通",
            (Locale::Ja, DryingStatus::Difficult) => "乾きにくい",
            (Locale::Ja, DryingStatus::RecommendIndoor) => "室内干し推奨",
            (Locale::Ja, DryingStatus::Unknown) => "不明",
            (Locale::En, DryingStatus::VeryEasy) => "Very easy to dry",
            (Locale::En, DryingStatus::Easy) => "Easy to dry",
            (Locale::En, DryingStatus::Moderate) => "Moderate",
            (Locale::En, DryingStatus::Difficult) => "Hard to dry",
            (Locale::En, DryingStatus::RecommendIndoor) => "Dry indoors",
            (Locale::En, DryingStatus::Unknown) => "Unknown",
        }
    }
}

/// The rule that decided an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Precipitation,
    RainChance,
    ExtremeCold,
    TextCondition,
    Score,
    NoSignal,
}

/// Per-factor points of the numeric drying score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DryingScore {
    pub temperature: u32,
    pub humidity: u32,
    pub wind: u32,
    pub condition: u32,
}

impl DryingScore {
    /// Saturates at `u32::MAX`; point values come from user configuration.
    pub fn total(&self) -> u32 {
        self.temperature
            .saturating_add(self.humidity)
            .saturating_add(self.wind)
            .saturating_add(self.condition)
    }
}

/// Result of classifying one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DryingAdvisory {
    pub status: DryingStatus,
    pub message: String,
    pub rule: Rule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<DryingScore>,
}

impl DryingAdvisory {
    pub fn severity(&self) -> Severity {
        self.status.severity()
    }
}
