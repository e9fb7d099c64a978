//! Runtime configuration from environment variables.
//!
//! Call `dotenvy::dotenv()` before [`LandingConfig::from_env`] to pick up a `.env` file.

use std::{str::FromStr, time::Duration};

use crate::infra::contact::DEFAULT_SUBMIT_DELAY;

const SUBMIT_DELAY_VAR: &str = "LANDING_SUBMIT_DELAY_MS";
const CAROUSEL_INTERVAL_VAR: &str = "LANDING_CAROUSEL_INTERVAL_SECS";
const LOG_VAR: &str = "LANDING_LOG";

const DEFAULT_CAROUSEL_INTERVAL: Duration = Duration::from_secs(5);
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingConfig {
    /// Simulated round-trip of the contact form.
    pub submit_delay: Duration,
    /// Testimonial autoplay period.
    pub carousel_interval: Duration,
    /// `tracing_subscriber` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            carousel_interval: DEFAULT_CAROUSEL_INTERVAL,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LandingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let submit_delay = parse_var::<u64>(&lookup, SUBMIT_DELAY_VAR)
            .map(Duration::from_millis)
            .unwrap_or(defaults.submit_delay);
        let carousel_interval = parse_var::<u64>(&lookup, CAROUSEL_INTERVAL_VAR)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.carousel_interval);
        let log_filter = lookup(LOG_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            submit_delay,
            carousel_interval,
            log_filter,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring malformed configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> LandingConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        LandingConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), LandingConfig::default());
        assert_eq!(LandingConfig::default().submit_delay, Duration::from_millis(1500));
        assert_eq!(LandingConfig::default().carousel_interval, Duration::from_secs(5));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (SUBMIT_DELAY_VAR, "250"),
            (CAROUSEL_INTERVAL_VAR, " 8 "),
            (LOG_VAR, "debug"),
        ]);
        assert_eq!(config.submit_delay, Duration::from_millis(250));
        assert_eq!(config.carousel_interval, Duration::from_secs(8));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = config_from(&[
            (SUBMIT_DELAY_VAR, "soon"),
            (CAROUSEL_INTERVAL_VAR, "0"),
            (LOG_VAR, "  "),
        ]);
        assert_eq!(config, LandingConfig::default());
    }
}
