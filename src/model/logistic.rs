//! Logistic regression artifact stored as JSON coefficients.
//! `{"coefficients": [18 numbers], "intercept": number}`; p = sigmoid(b + w·x).

use super::RiskModel;
use crate::error::{ModelError, StartupError};
use crate::features::{FeatureVector, FEATURE_DIM};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let data = std::fs::read_to_string(path).map_err(|source| StartupError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: LogisticModel =
            serde_json::from_str(&data).map_err(|e| StartupError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        if model.coefficients.len() != FEATURE_DIM {
            return Err(StartupError::Corrupt {
                path: path.to_path_buf(),
                reason: format!(
                    "expected {} coefficients, found {}",
                    FEATURE_DIM,
                    model.coefficients.len()
                ),
            });
        }
        if !model.intercept.is_finite() || model.coefficients.iter().any(|w| !w.is_finite()) {
            return Err(StartupError::Corrupt {
                path: path.to_path_buf(),
                reason: "non-finite coefficient".to_string(),
            });
        }
        tracing::info!(path = %path.display(), "logistic model loaded");
        Ok(model)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl RiskModel for LogisticModel {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::Shape {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.as_slice())
                .map(|(w, x)| w * f64::from(*x))
                .sum::<f64>();
        Ok(sigmoid(z))
    }
}
