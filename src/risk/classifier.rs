//! Maps the model's fraud probability onto a risk tier with guidance attached.

use super::RiskLevel;
use crate::config::RiskConfig;
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};

impl RiskLevel {
    /// `p > high` is High, `medium < p <= high` is Medium, everything else Low.
    pub fn from_probability(p: f64, config: &RiskConfig) -> Self {
        if p > config.high_threshold {
            RiskLevel::High
        } else if p > config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Response body of a successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Probability as a percentage, two decimal places
    pub risk_probability: f64,
    pub risk_level: RiskLevel,
    pub description: String,
    pub remediation_steps: Vec<String>,
}

pub struct RiskClassifier {
    config: RiskConfig,
}

impl RiskClassifier {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, probability: f64) -> Result<RiskAssessment, ScoringError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ScoringError::InvariantViolation(probability));
        }
        let level = RiskLevel::from_probability(probability, &self.config);
        let guidance = level.guidance();
        Ok(RiskAssessment {
            risk_probability: to_percent(probability),
            risk_level: level,
            description: guidance.description.to_string(),
            remediation_steps: guidance
                .remediation_steps
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}

/// Scale [0, 1] to a percentage rounded half away from zero at 2 decimals.
pub fn to_percent(probability: f64) -> f64 {
    (probability * 10_000.0).round() / 100.0
}
