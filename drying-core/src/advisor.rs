//! The drying advisor: maps a weather observation to a drying advisory.
//!
//! Evaluation runs in two stages. First an ordered list of override guards
//! (precipitation, likely rain, extreme cold) is checked; the first one that
//! matches decides. Otherwise the observation's [`Richness`] selects either
//! the numeric scoring rules or the text-summary rules.

use tracing::debug;

use crate::{
    condition::TextCondition,
    messages::{MessageKey, Messages},
    model::{DryingAdvisory, DryingScore, DryingStatus, Rule, WeatherObservation},
    rules::RuleConfig,
};

/// Which evaluation strategy an observation supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Richness {
    /// At least one of humidity, wind or condition code is known, or there is
    /// numeric data but no text summary.
    Numeric,
    /// Only a text summary, possibly with temperature or rain chance.
    Text,
    /// Nothing at all.
    Empty,
}

impl Richness {
    pub fn of(observation: &WeatherObservation) -> Self {
        let has_numeric_factors = observation.humidity_pct.is_some()
            || observation.wind_speed_mps.is_some()
            || observation.condition_code.is_some();

        if has_numeric_factors {
            Richness::Numeric
        } else if observation.condition_text.is_some() {
            Richness::Text
        } else if observation.is_empty() {
            Richness::Empty
        } else {
            Richness::Numeric
        }
    }
}

struct Guard {
    rule: Rule,
    status: DryingStatus,
    message: MessageKey,
    applies: fn(&RuleConfig, &WeatherObservation) -> bool,
}

/// Checked in order before any scoring.
const GUARDS: &[Guard] = &[
    Guard {
        rule: Rule::Precipitation,
        status: DryingStatus::RecommendIndoor,
        message: MessageKey::Precipitation,
        applies: is_precipitating,
    },
    Guard {
        rule: Rule::RainChance,
        status: DryingStatus::RecommendIndoor,
        message: MessageKey::RainChance,
        applies: rain_likely,
    },
    Guard {
        rule: Rule::ExtremeCold,
        status: DryingStatus::Difficult,
        message: MessageKey::ExtremeCold,
        applies: too_cold,
    },
];

fn is_precipitating(rules: &RuleConfig, obs: &WeatherObservation) -> bool {
    obs.precipitation_mm.is_some_and(|mm| mm > rules.precipitation_mm)
        || obs.condition_code.is_some_and(|code| rules.is_precipitation_code(code))
        || obs
            .condition_text
            .as_deref()
            .is_some_and(|text| TextCondition::parse(text) == TextCondition::Precipitation)
}

fn rain_likely(rules: &RuleConfig, obs: &WeatherObservation) -> bool {
    obs.rain_chance_pct.is_some_and(|pct| pct > rules.rain_chance_pct)
}

fn too_cold(rules: &RuleConfig, obs: &WeatherObservation) -> bool {
    obs.temperature_c.is_some_and(|t| t < rules.cold_below_c)
}

/// Stateless classifier. Cheap to clone and safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct DryingAdvisor {
    rules: RuleConfig,
    messages: Messages,
}

impl DryingAdvisor {
    pub fn new(rules: RuleConfig, messages: Messages) -> Self {
        Self { rules, messages }
    }

    /// Classify one observation. Never fails: missing or out-of-range values
    /// are repaired or ignored, and an empty observation yields
    /// [`DryingStatus::Unknown`].
    pub fn classify(&self, observation: &WeatherObservation) -> DryingAdvisory {
        let observation = observation.sanitized();
        let advisory = self.evaluate(&observation);

        debug!(
            rule = ?advisory.rule,
            status = ?advisory.status,
            score = ?advisory.score.map(|s| s.total()),
            "classified weather observation"
        );

        advisory
    }

    /// Numeric score of an observation, regardless of which path
    /// [`classify`](Self::classify) would take.
    pub fn score(&self, observation: &WeatherObservation) -> DryingScore {
        self.tally(&observation.sanitized())
    }

    fn evaluate(&self, obs: &WeatherObservation) -> DryingAdvisory {
        if let Some(guard) = GUARDS.iter().find(|guard| (guard.applies)(&self.rules, obs)) {
            return self.advisory(guard.status, guard.rule, guard.message);
        }

        match Richness::of(obs) {
            Richness::Numeric => self.classify_score(obs),
            Richness::Text => self.classify_text(obs),
            Richness::Empty => self.advisory(DryingStatus::Unknown, Rule::NoSignal, MessageKey::Unknown),
        }
    }

    fn classify_text(&self, obs: &WeatherObservation) -> DryingAdvisory {
        let text = obs.condition_text.as_deref().unwrap_or_default();
        let limits = &self.rules.text;
        let warm_enough = |limit: f64| obs.temperature_c.is_some_and(|t| t >= limit);

        let (status, message) = match TextCondition::parse(text) {
            TextCondition::Clear if warm_enough(limits.clear_very_easy_c) => {
                (DryingStatus::VeryEasy, MessageKey::TextClearHot)
            }
            TextCondition::Clear if warm_enough(limits.clear_easy_c) => {
                (DryingStatus::Easy, MessageKey::TextClearWarm)
            }
            TextCondition::Clear => (DryingStatus::Moderate, MessageKey::TextClearMild),
            TextCondition::Cloudy if warm_enough(limits.cloudy_moderate_c) => {
                (DryingStatus::Moderate, MessageKey::TextCloudyMild)
            }
            TextCondition::Cloudy => (DryingStatus::Difficult, MessageKey::TextCloudyCold),
            // normally caught by the precipitation guard
            TextCondition::Precipitation => (DryingStatus::RecommendIndoor, MessageKey::Precipitation),
            TextCondition::Other => (DryingStatus::Moderate, MessageKey::TextOther),
        };

        self.advisory(status, Rule::TextCondition, message)
    }

    fn classify_score(&self, obs: &WeatherObservation) -> DryingAdvisory {
        let score = self.tally(obs);
        let status = self.rules.bands.status(score.total());

        let message = match status {
            DryingStatus::VeryEasy => self.messages.text(MessageKey::ScoreVeryEasy).to_owned(),
            DryingStatus::Easy => self.messages.text(MessageKey::ScoreEasy).to_owned(),
            DryingStatus::Moderate => self.messages.text(MessageKey::ScoreModerate).to_owned(),
            DryingStatus::Difficult | DryingStatus::RecommendIndoor | DryingStatus::Unknown => {
                self.difficult_message(obs)
            }
        };

        DryingAdvisory { status, message, rule: Rule::Score, score: Some(score) }
    }

    /// Humidity tip takes precedence over the wind tip.
    fn difficult_message(&self, obs: &WeatherObservation) -> String {
        let base = self.messages.text(MessageKey::ScoreDifficult);

        let tip = if obs.humidity_pct.is_some_and(|h| h > self.rules.humid_tip_above_pct) {
            Some(MessageKey::TipDehumidifier)
        } else if obs.wind_speed_mps.is_some_and(|w| w < self.rules.calm_tip_below_mps) {
            Some(MessageKey::TipFan)
        } else {
            None
        };

        match tip {
            Some(key) => self.messages.join(base, self.messages.text(key)),
            None => base.to_owned(),
        }
    }

    fn tally(&self, obs: &WeatherObservation) -> DryingScore {
        DryingScore {
            temperature: self.rules.temperature.points(obs.temperature_c),
            humidity: self.rules.humidity.points(obs.humidity_pct),
            wind: self.rules.wind.points(obs.wind_speed_mps),
            condition: self.sky_points(obs),
        }
    }

    /// The condition code wins; the text summary only counts without one.
    fn sky_points(&self, obs: &WeatherObservation) -> u32 {
        match (obs.condition_code, obs.condition_text.as_deref()) {
            (Some(code), _) => self.rules.condition_points(Some(code)),
            (None, Some(text)) => self.rules.text_condition_points(TextCondition::parse(text)),
            (None, None) => 0,
        }
    }

    fn advisory(&self, status: DryingStatus, rule: Rule, message: MessageKey) -> DryingAdvisory {
        DryingAdvisory {
            status,
            message: self.messages.text(message).to_owned(),
            rule,
            score: None,
        }
    }
}

/// Classify with the default rules and Japanese messages.
pub fn classify(observation: &WeatherObservation) -> DryingAdvisory {
    DryingAdvisor::default().classify(observation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Locale;

    fn numeric(temp: f64, humidity: f64, wind: f64, precip: f64, code: i32) -> WeatherObservation {
        WeatherObservation::new()
            .with_temperature(temp)
            .with_humidity(humidity)
            .with_wind_speed(wind)
            .with_precipitation(precip)
            .with_condition_code(code)
    }

    fn text(summary: &str, temp: Option<f64>) -> WeatherObservation {
        let obs = WeatherObservation::new().with_condition_text(summary);
        match temp {
            Some(t) => obs.with_temperature(t),
            None => obs,
        }
    }

    #[test]
    fn ideal_drying_day() {
        let advisory = classify(&numeric(28.0, 40.0, 4.0, 0.0, 0));
        assert_eq!(advisory.status, DryingStatus::VeryEasy);
        assert_eq!(advisory.rule, Rule::Score);
        assert_eq!(advisory.score.map(|s| s.total()), Some(11));
    }

    #[test]
    fn borderline_day_is_moderate() {
        let advisory = classify(&numeric(18.0, 70.0, 1.5, 0.0, 2));
        assert_eq!(advisory.score.map(|s| s.total()), Some(4));
        assert_eq!(advisory.status, DryingStatus::Moderate);
    }

    #[test]
    fn rain_overrides_good_numbers() {
        let advisory = classify(&numeric(28.0, 30.0, 5.0, 2.0, 61));
        assert_eq!(advisory.status, DryingStatus::RecommendIndoor);
        assert_eq!(advisory.rule, Rule::Precipitation);
        assert!(advisory.score.is_none());
    }

    #[test]
    fn precipitation_code_alone_forces_indoor() {
        let advisory = classify(&numeric(28.0, 30.0, 5.0, 0.0, 95));
        assert_eq!(advisory.status, DryingStatus::RecommendIndoor);
    }

    #[test]
    fn trace_precipitation_is_not_rain() {
        let advisory = classify(&numeric(28.0, 40.0, 4.0, 0.1, 0));
        assert_eq!(advisory.status, DryingStatus::VeryEasy);
    }

    #[test]
    fn extreme_cold_beats_high_score() {
        let advisory = classify(&numeric(2.0, 50.0, 3.0, 0.0, 0));
        assert_eq!(advisory.status, DryingStatus::Difficult);
        assert_eq!(advisory.rule, Rule::ExtremeCold);
    }

    #[test]
    fn empty_observation_is_unknown() {
        let advisory = classify(&WeatherObservation::new());
        assert_eq!(advisory.status, DryingStatus::Unknown);
        assert_eq!(advisory.rule, Rule::NoSignal);
        assert!(!advisory.message.is_empty());
    }

    #[test]
    fn clear_text_with_heat_is_very_easy() {
        let advisory = classify(&text("clear", Some(26.0)));
        assert_eq!(advisory.status, DryingStatus::VeryEasy);
        assert_eq!(advisory.rule, Rule::TextCondition);
    }

    #[test]
    fn clear_text_tiers() {
        assert_eq!(classify(&text("晴れ", Some(21.0))).status, DryingStatus::Easy);
        assert_eq!(classify(&text("晴れ", Some(12.0))).status, DryingStatus::Moderate);
        assert_eq!(classify(&text("晴れ", None)).status, DryingStatus::Moderate);
    }

    #[test]
    fn cloudy_text_tiers() {
        assert_eq!(classify(&text("曇り", Some(16.0))).status, DryingStatus::Moderate);
        assert_eq!(classify(&text("曇り", Some(10.0))).status, DryingStatus::Difficult);
        assert_eq!(classify(&text("overcast", None)).status, DryingStatus::Difficult);
    }

    #[test]
    fn unrecognised_text_falls_back_to_moderate() {
        let advisory = classify(&text("霧", Some(20.0)));
        assert_eq!(advisory.status, DryingStatus::Moderate);
        assert_eq!(advisory.message, Messages::new(Locale::Ja).text(MessageKey::TextOther));
    }

    #[test]
    fn rain_in_text_forces_indoor_even_with_numbers() {
        let obs = WeatherObservation::new()
            .with_condition_text("light rain")
            .with_temperature(27.0)
            .with_humidity(40.0);
        assert_eq!(classify(&obs).status, DryingStatus::RecommendIndoor);
    }

    #[test]
    fn high_rain_chance_forces_indoor() {
        let advisory = classify(&text("晴れ", Some(28.0)).with_rain_chance(60.0));
        assert_eq!(advisory.status, DryingStatus::RecommendIndoor);
        assert_eq!(advisory.rule, Rule::RainChance);

        let advisory = classify(&text("晴れ", Some(28.0)).with_rain_chance(50.0));
        assert_eq!(advisory.status, DryingStatus::VeryEasy);
    }

    #[test]
    fn cold_text_observation_is_difficult() {
        let advisory = classify(&text("晴れ", Some(3.0)));
        assert_eq!(advisory.rule, Rule::ExtremeCold);
    }

    #[test]
    fn difficult_day_suggests_dehumidifier_first() {
        let advisory = classify(&numeric(10.0, 85.0, 0.5, 0.0, 3));
        let messages = Messages::new(Locale::Ja);
        assert_eq!(advisory.status, DryingStatus::Difficult);
        assert!(advisory.message.starts_with(messages.text(MessageKey::ScoreDifficult)));
        assert!(advisory.message.ends_with(messages.text(MessageKey::TipDehumidifier)));
    }

    #[test]
    fn difficult_calm_day_suggests_fan() {
        let advisory = classify(&numeric(10.0, 78.0, 0.5, 0.0, 45));
        let messages = Messages::new(Locale::Ja);
        assert_eq!(advisory.status, DryingStatus::Difficult);
        assert!(advisory.message.ends_with(messages.text(MessageKey::TipFan)));
    }

    #[test]
    fn difficult_day_without_tip() {
        let advisory = classify(&numeric(10.0, 78.0, 1.2, 0.0, 45));
        assert_eq!(advisory.status, DryingStatus::Difficult);
        assert_eq!(advisory.message, Messages::new(Locale::Ja).text(MessageKey::ScoreDifficult));
    }

    #[test]
    fn partial_numeric_data_still_scores() {
        let obs = WeatherObservation::new().with_humidity(45.0).with_wind_speed(2.5);
        let advisory = classify(&obs);
        assert_eq!(advisory.rule, Rule::Score);
        assert_eq!(advisory.status, DryingStatus::Easy);
    }

    #[test]
    fn richness_selection() {
        assert_eq!(Richness::of(&WeatherObservation::new()), Richness::Empty);
        assert_eq!(Richness::of(&text("sunny", Some(20.0))), Richness::Text);
        assert_eq!(Richness::of(&text("sunny", None).with_condition_code(0)), Richness::Numeric);
        assert_eq!(Richness::of(&WeatherObservation::new().with_temperature(20.0)), Richness::Numeric);
    }

    #[test]
    fn english_messages() {
        let advisor = DryingAdvisor::new(RuleConfig::default(), Messages::new(Locale::En));
        let advisory = advisor.classify(&numeric(10.0, 90.0, 0.5, 0.0, 3));
        assert_eq!(
            advisory.message,
            "Laundry will dry slowly today. If you can, dry indoors or use a tumble dryer. \
             Humidity is especially high, so a dehumidifier helps too."
        );
    }

    #[test]
    fn bands_are_configurable() {
        let mut rules = RuleConfig::default();
        rules.bands.very_easy = 12;
        let advisor = DryingAdvisor::new(rules, Messages::default());
        assert_eq!(advisor.classify(&numeric(28.0, 40.0, 4.0, 0.0, 0)).status, DryingStatus::Easy);
    }

    #[test]
    fn text_summary_counts_when_code_is_missing() {
        let advisor = DryingAdvisor::default();
        let base = WeatherObservation::new().with_temperature(24.0).with_humidity(55.0).with_wind_speed(2.5);

        let coded = advisor.score(&base.clone().with_condition_code(0));
        let described = advisor.score(&base.clone().with_condition_text("clear sky"));
        assert_eq!(described, coded);
        assert_eq!(advisor.score(&base.clone().with_condition_text("曇り")).condition, 1);

        let both = base.with_condition_code(3).with_condition_text("sunny");
        assert_eq!(advisor.score(&both).condition, 1);
    }

    #[test]
    fn oversized_configured_points_do_not_overflow() {
        let mut rules = RuleConfig::default();
        rules.clear_points = u32::MAX;
        let advisor = DryingAdvisor::new(rules, Messages::default());
        let obs = WeatherObservation::new()
            .with_temperature(26.0)
            .with_humidity(40.0)
            .with_condition_code(0);

        let advisory = advisor.classify(&obs);

        assert_eq!(advisory.status, DryingStatus::VeryEasy);
        assert_eq!(advisory.score.map(|s| s.total()), Some(u32::MAX));
    }

    #[test]
    fn score_ignores_overrides() {
        let advisor = DryingAdvisor::default();
        let score = advisor.score(&numeric(2.0, 50.0, 3.0, 5.0, 0));
        assert_eq!(score, DryingScore { temperature: 0, humidity: 3, wind: 3, condition: 2 });
    }
}
