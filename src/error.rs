//! Error taxonomy: startup failures are fatal, scoring failures are per-request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::path::PathBuf;

/// Configuration file could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid risk thresholds: {0}")]
    Thresholds(String),
    #[error("invalid bind address: {0}")]
    Bind(String),
}

/// Model artifact missing, corrupt or incompatible. The process must not serve.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("model artifact not found: {0}")]
    ArtifactMissing(PathBuf),
    #[error("unsupported model artifact {0} (expected .onnx or .json)")]
    UnsupportedArtifact(PathBuf),
    #[error("cannot read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt model artifact {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    #[error("onnx runtime: {0}")]
    Onnx(#[from] ort::Error),
}

/// Inference call failed inside the model backend.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("onnx runtime: {0}")]
    Onnx(#[from] ort::Error),
    #[error("unexpected model output: {0}")]
    Output(String),
    #[error("feature vector has {got} values, model expects {expected}")]
    Shape { expected: usize, got: usize },
}

/// Per-request failure, mapped onto an HTTP error response.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("model returned probability {0} outside [0, 1]")]
    InvariantViolation(f64),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ScoringError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        ScoringError::MalformedRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ScoringError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ScoringError::InvariantViolation(_) | ScoringError::Model(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ScoringError::MalformedRequest(_) => "MALFORMED_REQUEST",
            ScoringError::InvariantViolation(_) => "INVARIANT_VIOLATION",
            ScoringError::Model(_) => "MODEL_ERROR",
        }
    }
}

impl IntoResponse for ScoringError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({
                "error": self.code(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ScoringError::malformed("missing field `amt`").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ScoringError::InvariantViolation(1.5).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let e = ScoringError::from(ModelError::Output("empty".into()));
        assert_eq!(e.code(), "MODEL_ERROR");
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
