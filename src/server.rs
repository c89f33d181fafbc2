//! HTTP surface: `POST /predict` with permissive CORS.

use crate::error::ScoringError;
use crate::risk::RiskAssessment;
use crate::service::RiskService;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info_span, warn};
use uuid::Uuid;

pub fn router(service: Arc<RiskService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// The body is parsed by hand so every malformed payload maps to 400,
/// whatever its content type.
async fn predict(
    State(service): State<Arc<RiskService>>,
    body: Bytes,
) -> Result<Json<RiskAssessment>, ScoringError> {
    let request_id = Uuid::new_v4();
    info_span!("predict", %request_id).in_scope(|| {
        let payload = serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| ScoringError::malformed(format!("invalid JSON body: {}", e)));

        match payload.and_then(|p| service.handle(&p)) {
            Ok(assessment) => Ok(Json(assessment)),
            Err(e) => {
                warn!(error = %e, code = e.code(), "prediction rejected");
                Err(e)
            }
        }
    })
}
