use serde::{Deserialize, Serialize};

use crate::{
    condition::{TextCondition, WeatherCondition},
    model::DryingStatus,
};

/// Which way a tier threshold is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `value >= threshold`
    AtLeast,
    /// `value <= threshold`
    AtMost,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub threshold: f64,
    pub points: u32,
}

/// Points awarded for one weather factor. Tiers are checked in order and the
/// first match wins, so list the most generous tier first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierScale {
    pub direction: Direction,
    pub tiers: Vec<Tier>,
}

impl TierScale {
    pub fn at_least(tiers: &[(f64, u32)]) -> Self {
        Self::build(Direction::AtLeast, tiers)
    }

    pub fn at_most(tiers: &[(f64, u32)]) -> Self {
        Self::build(Direction::AtMost, tiers)
    }

    fn build(direction: Direction, tiers: &[(f64, u32)]) -> Self {
        Self {
            direction,
            tiers: tiers
                .iter()
                .map(|&(threshold, points)| Tier { threshold, points })
                .collect(),
        }
    }

    /// Missing values score nothing.
    pub fn points(&self, value: Option<f64>) -> u32 {
        let Some(value) = value else {
            return 0;
        };

        self.tiers
            .iter()
            .find(|tier| match self.direction {
                Direction::AtLeast => value >= tier.threshold,
                Direction::AtMost => value <= tier.threshold,
            })
            .map_or(0, |tier| tier.points)
    }
}

/// Minimum total score for each status of the numeric path. Anything below
/// `moderate` is [`DryingStatus::Difficult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBands {
    pub very_easy: u32,
    pub easy: u32,
    pub moderate: u32,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self { very_easy: 7, easy: 5, moderate: 3 }
    }
}

impl ScoreBands {
    pub fn status(&self, total: u32) -> DryingStatus {
        if total >= self.very_easy {
            DryingStatus::VeryEasy
        } else if total >= self.easy {
            DryingStatus::Easy
        } else if total >= self.moderate {
            DryingStatus::Moderate
        } else {
            DryingStatus::Difficult
        }
    }
}

/// Temperature cut-offs for the text path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextThresholds {
    pub clear_very_easy_c: f64,
    pub clear_easy_c: f64,
    pub cloudy_moderate_c: f64,
}

impl Default for TextThresholds {
    fn default() -> Self {
        Self { clear_very_easy_c: 25.0, clear_easy_c: 20.0, cloudy_moderate_c: 15.0 }
    }
}

/// Every constant the advisor uses. Defaults follow the Open-Meteo rule set;
/// the other observed variants are expressible by editing these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Precipitation strictly above this forces indoor drying.
    pub precipitation_mm: f64,
    /// Rain chance strictly above this forces indoor drying.
    pub rain_chance_pct: f64,
    /// Temperatures strictly below this are too cold to air-dry.
    pub cold_below_c: f64,
    /// Humidity strictly above this adds the dehumidifier tip.
    pub humid_tip_above_pct: f64,
    /// Wind strictly below this adds the fan tip.
    pub calm_tip_below_mps: f64,
    pub clear_points: u32,
    pub cloudy_points: u32,
    pub precipitation_codes: Vec<i32>,
    pub clear_codes: Vec<i32>,
    pub cloudy_codes: Vec<i32>,
    pub bands: ScoreBands,
    pub text: TextThresholds,
    pub temperature: TierScale,
    pub humidity: TierScale,
    pub wind: TierScale,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            precipitation_mm: 0.1,
            rain_chance_pct: 50.0,
            cold_below_c: 5.0,
            humid_tip_above_pct: 80.0,
            calm_tip_below_mps: 1.0,
            clear_points: 2,
            cloudy_points: 1,
            precipitation_codes: (0..100)
                .filter(|&code| WeatherCondition::from_wmo_code(code).is_precipitation())
                .collect(),
            clear_codes: vec![0, 1],
            cloudy_codes: vec![2, 3],
            bands: ScoreBands::default(),
            text: TextThresholds::default(),
            temperature: TierScale::at_least(&[(25.0, 3), (20.0, 2), (15.0, 1)]),
            humidity: TierScale::at_most(&[(50.0, 3), (65.0, 2), (75.0, 1)]),
            wind: TierScale::at_least(&[(3.0, 3), (2.0, 2), (1.0, 1)]),
        }
    }
}

impl RuleConfig {
    pub fn is_precipitation_code(&self, code: i32) -> bool {
        self.precipitation_codes.contains(&code)
    }

    pub fn condition_points(&self, code: Option<i32>) -> u32 {
        match code {
            Some(code) if self.clear_codes.contains(&code) => self.clear_points,
            Some(code) if self.cloudy_codes.contains(&code) => self.cloudy_points,
            _ => 0,
        }
    }

    /// Sky points for a text summary, used when no condition code is known.
    pub fn text_condition_points(&self, condition: TextCondition) -> u32 {
        match condition {
            TextCondition::Clear => self.clear_points,
            TextCondition::Cloudy => self.cloudy_points,
            TextCondition::Precipitation | TextCondition::Other => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precipitation_codes_match_wmo_groups() {
        let cfg = RuleConfig::default();
        assert_eq!(
            cfg.precipitation_codes,
            vec![51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85, 86, 95, 96, 99]
        );
    }

    #[test]
    fn temperature_tiers_first_match_wins() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.temperature.points(Some(30.0)), 3);
        assert_eq!(cfg.temperature.points(Some(25.0)), 3);
        assert_eq!(cfg.temperature.points(Some(24.9)), 2);
        assert_eq!(cfg.temperature.points(Some(15.0)), 1);
        assert_eq!(cfg.temperature.points(Some(14.9)), 0);
        assert_eq!(cfg.temperature.points(None), 0);
    }

    #[test]
    fn humidity_tiers_reward_dry_air() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.humidity.points(Some(40.0)), 3);
        assert_eq!(cfg.humidity.points(Some(50.0)), 3);
        assert_eq!(cfg.humidity.points(Some(65.0)), 2);
        assert_eq!(cfg.humidity.points(Some(75.0)), 1);
        assert_eq!(cfg.humidity.points(Some(75.1)), 0);
    }

    #[test]
    fn wind_tiers() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.wind.points(Some(4.0)), 3);
        assert_eq!(cfg.wind.points(Some(2.0)), 2);
        assert_eq!(cfg.wind.points(Some(1.5)), 1);
        assert_eq!(cfg.wind.points(Some(0.5)), 0);
    }

    #[test]
    fn condition_points_by_code_group() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.condition_points(Some(0)), 2);
        assert_eq!(cfg.condition_points(Some(1)), 2);
        assert_eq!(cfg.condition_points(Some(2)), 1);
        assert_eq!(cfg.condition_points(Some(3)), 1);
        assert_eq!(cfg.condition_points(Some(45)), 0);
        assert_eq!(cfg.condition_points(None), 0);
    }

    #[test]
    fn text_condition_points_mirror_code_groups() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.text_condition_points(TextCondition::Clear), 2);
        assert_eq!(cfg.text_condition_points(TextCondition::Cloudy), 1);
        assert_eq!(cfg.text_condition_points(TextCondition::Other), 0);
    }

    #[test]
    fn score_bands() {
        let bands = ScoreBands::default();
        assert_eq!(bands.status(11), DryingStatus::VeryEasy);
        assert_eq!(bands.status(7), DryingStatus::VeryEasy);
        assert_eq!(bands.status(6), DryingStatus::Easy);
        assert_eq!(bands.status(4), DryingStatus::Moderate);
        assert_eq!(bands.status(2), DryingStatus::Difficult);
    }
}
