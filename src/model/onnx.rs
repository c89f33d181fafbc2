//! ONNX Runtime inference. Input: [1, 18] f32. Output: fraud probability.
//! Classifiers exported with class probabilities as a plain tensor (no ZipMap)
//! give `[1, n_classes]`; the configured positive column is read.

use super::RiskModel;
use crate::config::ModelConfig;
use crate::error::{ModelError, StartupError};
use crate::features::{FeatureVector, FEATURE_DIM};
use ndarray::Array2;
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;

pub struct OnnxModel {
    session: Session,
    input_name: String,
    output_name: String,
    positive_class: usize,
}

impl OnnxModel {
    pub fn load(path: &Path, config: &ModelConfig) -> Result<Self, StartupError> {
        let session = Session::builder()?.commit_from_file(path)?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| StartupError::Corrupt {
                path: path.to_path_buf(),
                reason: "model declares no inputs".to_string(),
            })?;

        let output_name = match &config.output_name {
            Some(name) => {
                if !session.outputs.iter().any(|o| &o.name == name) {
                    return Err(StartupError::Corrupt {
                        path: path.to_path_buf(),
                        reason: format!("model has no output named `{}`", name),
                    });
                }
                name.clone()
            }
            None => session
                .outputs
                .last()
                .map(|o| o.name.clone())
                .ok_or_else(|| StartupError::Corrupt {
                    path: path.to_path_buf(),
                    reason: "model declares no outputs".to_string(),
                })?,
        };

        tracing::info!(
            path = %path.display(),
            input = %input_name,
            output = %output_name,
            "ONNX model loaded"
        );

        Ok(Self {
            session,
            input_name,
            output_name,
            positive_class: config.positive_class,
        })
    }
}

impl RiskModel for OnnxModel {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != FEATURE_DIM {
            return Err(ModelError::Shape {
                expected: FEATURE_DIM,
                got: features.len(),
            });
        }
        let arr = Array2::from_shape_vec((1, FEATURE_DIM), features.values.clone())
            .map_err(|e| ModelError::Output(e.to_string()))?;
        let input = Tensor::from_array(arr)?;

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input]?)?;
        let out = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| ModelError::Output(format!("missing output `{}`", self.output_name)))?;
        let view = out.try_extract_tensor::<f32>()?;

        let scores: Vec<f32> = view.iter().copied().collect();
        let score = match scores.len() {
            0 => return Err(ModelError::Output("empty output tensor".to_string())),
            1 => scores[0],
            n => *scores.get(self.positive_class).ok_or_else(|| {
                ModelError::Output(format!(
                    "positive class {} out of range for {} classes",
                    self.positive_class, n
                ))
            })?,
        };
        Ok(widen_probability(score))
    }
}

/// f32 → f64 through the shortest decimal form, so an output of `0.6f32`
/// compares as `0.6` against the tier thresholds instead of `0.6000000238...`.
pub(crate) fn widen_probability(score: f32) -> f64 {
    score
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(score))
}
