//! Core library for the `drying` advisor.
//!
//! This crate defines:
//! - Shared domain models (weather observations, drying advisories)
//! - The rule engine that decides how well laundry will dry outdoors
//! - Configuration of thresholds and advice texts
//! - Translators from weather provider payloads to observations
//!
//! It is used by `drying-cli`, but can also be embedded in other front ends.
//! Classification is pure and never fails; fetching weather is up to the
//! caller.

pub mod advisor;
pub mod condition;
pub mod config;
pub mod messages;
pub mod model;
pub mod provider;
pub mod rules;

pub use advisor::{DryingAdvisor, Richness, classify};
pub use condition::{TextCondition, WeatherCondition};
pub use config::{Config, ConfigError};
pub use messages::{Locale, MessageKey, Messages};
pub use model::{DryingAdvisory, DryingScore, DryingStatus, Rule, Severity, WeatherObservation};
pub use provider::{PayloadNormalizer, ProviderError, ProviderId};
pub use rules::RuleConfig;
