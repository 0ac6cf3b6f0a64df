//! Match configuration.

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of simulated minutes (default: 45).
    /// Each minute executes exactly one phase transition.
    pub total_minutes: u32,

    /// Seed for the match RNG.
    /// Same seed and rosters produce an identical match.
    pub seed: u64,

    /// Real-time pause between minutes, in milliseconds (default: 0).
    /// Purely presentational; has no effect on the outcome.
    pub step_delay_ms: u64,

    /// Probability that a midfield contest is ruled a draw and
    /// possession is re-resolved from scratch (default: 0.1).
    pub midfield_draw_chance: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_minutes: 45,
            seed: 42,
            step_delay_ms: 0,
            midfield_draw_chance: 0.1,
        }
    }
}

impl MatchConfig {
    /// Set the number of minutes.
    #[must_use]
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.total_minutes = minutes;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the pacing delay between minutes.
    #[must_use]
    pub fn with_step_delay_ms(mut self, delay_ms: u64) -> Self {
        self.step_delay_ms = delay_ms;
        self
    }

    /// Set the midfield draw probability.
    #[must_use]
    pub fn with_midfield_draw_chance(mut self, chance: f64) -> Self {
        self.midfield_draw_chance = chance;
        self
    }

    /// Check the configuration before a match is built.
    pub fn validate(&self) -> Result<()> {
        let chance = self.midfield_draw_chance;
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(MatchError::InvalidConfig(format!(
                "midfield_draw_chance must be within [0, 1], got {}",
                chance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.total_minutes, 45);
        assert_eq!(config.seed, 42);
        assert_eq!(config.step_delay_ms, 0);
        assert!((config.midfield_draw_chance - 0.1).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_minutes(90)
            .with_seed(123)
            .with_step_delay_ms(250)
            .with_midfield_draw_chance(0.0);

        assert_eq!(config.total_minutes, 90);
        assert_eq!(config.seed, 123);
        assert_eq!(config.step_delay_ms, 250);
        assert_eq!(config.midfield_draw_chance, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_draw_chance() {
        for chance in [-0.1, 1.5, f64::NAN] {
            let config = MatchConfig::default().with_midfield_draw_chance(chance);
            assert!(matches!(config.validate(), Err(MatchError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"total_minutes": 90}"#).unwrap();
        assert_eq!(config.total_minutes, 90);
        assert_eq!(config.seed, 42);
    }
}
