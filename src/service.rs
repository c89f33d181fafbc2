//! Per-request scoring: payload → features → model → risk tier.

use crate::config::RiskConfig;
use crate::error::ScoringError;
use crate::features::{FeatureAssembler, FEATURE_NAMES};
use crate::model::RiskModel;
use crate::risk::{RiskAssessment, RiskClassifier};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Stateless apart from the shared read-only model; safe to call concurrently.
pub struct RiskService {
    model: Arc<dyn RiskModel>,
    assembler: FeatureAssembler,
    classifier: RiskClassifier,
}

impl RiskService {
    pub fn new(model: Arc<dyn RiskModel>, risk: RiskConfig) -> Self {
        Self {
            model,
            assembler: FeatureAssembler::new(),
            classifier: RiskClassifier::new(risk),
        }
    }

    pub fn handle(&self, payload: &Value) -> Result<RiskAssessment, ScoringError> {
        let features = self.assembler.assemble(payload)?;
        if tracing::enabled!(tracing::Level::DEBUG) {
            let named: Vec<String> = FEATURE_NAMES
                .iter()
                .zip(features.as_slice())
                .map(|(n, v)| format!("{}={}", n, v))
                .collect();
            debug!(features = %named.join(","), "assembled feature vector");
        }

        let probability = self.model.predict_proba(&features)?;
        let assessment = self.classifier.classify(probability)?;
        debug!(
            probability,
            level = %assessment.risk_level,
            "transaction scored"
        );
        Ok(assessment)
    }
}
