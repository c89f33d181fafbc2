//! Risk scorer — transaction fraud scoring service.
//!
//! Modular structure:
//! - [`features`] — Request payload validation and fixed-order feature vector
//! - [`model`] — Trained classifier (ONNX or logistic JSON), loaded once
//! - [`risk`] — Probability → Low/Medium/High tier with analyst guidance
//! - [`service`] — Per-request orchestration
//! - [`server`] — HTTP `POST /predict`
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod risk;
pub mod server;
pub mod service;

pub use config::ScorerConfig;
pub use error::{ConfigError, ModelError, ScoringError, StartupError};
pub use features::{Category, FeatureAssembler, FeatureVector};
pub use model::{load_model, LogisticModel, OnnxModel, RiskModel};
pub use risk::{RiskAssessment, RiskClassifier, RiskLevel};
pub use service::RiskService;
