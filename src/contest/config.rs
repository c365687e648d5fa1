//! Scoring configuration.

/// Parameters for blending audience and judge scores.
///
/// # Examples
///
/// ```
/// use songvote::contest::ScoringConfig;
///
/// let config = ScoringConfig::default()
///     .with_audience_percent(60)
///     .with_zero_threshold(1e-12);
/// assert_eq!(config.audience_percent, 60);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    /// Share of the final score taken from the audience, in percent (1–100).
    /// The judges supply the remainder.
    pub audience_percent: u8,
    /// Final scores strictly below this value are reported as exactly `0.0`.
    pub zero_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            audience_percent: 50,
            zero_threshold: 1e-19,
        }
    }
}

impl ScoringConfig {
    /// Sets the audience share in percent.
    pub fn with_audience_percent(mut self, percent: u8) -> Self {
        self.audience_percent = percent;
        self
    }

    /// Sets the zero-clamping threshold.
    pub fn with_zero_threshold(mut self, threshold: f64) -> Self {
        self.zero_threshold = threshold;
        self
    }

    /// Audience weight as a fraction in `(0, 1]`.
    pub fn audience_weight(&self) -> f64 {
        f64::from(self.audience_percent) / 100.0
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=100).contains(&self.audience_percent) {
            return Err(format!(
                "audience_percent must be in 1..=100, got {}",
                self.audience_percent
            ));
        }
        if !self.zero_threshold.is_finite() || self.zero_threshold < 0.0 {
            return Err(format!(
                "zero_threshold must be finite and non-negative, got {}",
                self.zero_threshold
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ScoringConfig::default();
        assert_eq!(config.audience_percent, 50);
        assert_eq!(config.zero_threshold, 1e-19);
        assert!(config.validate().is_ok());
        assert!((config.audience_weight() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_validate_percent() {
        assert!(ScoringConfig::default().with_audience_percent(0).validate().is_err());
        assert!(ScoringConfig::default().with_audience_percent(101).validate().is_err());
        assert!(ScoringConfig::default().with_audience_percent(1).validate().is_ok());
        assert!(ScoringConfig::default().with_audience_percent(100).validate().is_ok());
    }

    #[test]
    fn test_validate_threshold() {
        assert!(ScoringConfig::default().with_zero_threshold(-1.0).validate().is_err());
        assert!(ScoringConfig::default().with_zero_threshold(f64::NAN).validate().is_err());
        assert!(ScoringConfig::default().with_zero_threshold(0.0).validate().is_ok());
    }
}
