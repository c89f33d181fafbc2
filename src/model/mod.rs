//! Trained classifier, loaded once at startup and shared read-only.

mod logistic;
mod onnx;

pub use logistic::LogisticModel;
pub use onnx::OnnxModel;

use crate::config::ModelConfig;
use crate::error::{ModelError, StartupError};
use crate::features::FeatureVector;
use std::path::Path;
use std::sync::Arc;

/// Scoring capability of a loaded model. Implementations must not mutate
/// shared state; one instance serves all requests concurrently.
pub trait RiskModel: Send + Sync {
    /// Fraud probability for one feature vector. Not clamped; callers check range.
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// Load the artifact at `path`, choosing the backend by file extension.
pub fn load_model(path: &Path, config: &ModelConfig) -> Result<Arc<dyn RiskModel>, StartupError> {
    if !path.exists() {
        return Err(StartupError::ArtifactMissing(path.to_path_buf()));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("onnx") => Ok(Arc::new(OnnxModel::load(path, config)?)),
        Some("json") => Ok(Arc::new(LogisticModel::load(path)?)),
        _ => Err(StartupError::UnsupportedArtifact(path.to_path_buf())),
    }
}
