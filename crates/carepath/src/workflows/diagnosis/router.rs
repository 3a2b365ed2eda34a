use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AnswerSet, LeadDetails, ModelVersion, RawAnswer};
use super::service::{DiagnosisService, DiagnosisServiceError, DiagnosisSubmission};
use crate::workflows::leads::LeadPublisher;

/// Wire shape of a quiz submission.
#[derive(Debug, Deserialize)]
pub struct DiagnosisRequest {
    pub answers: BTreeMap<u16, RawAnswer>,
    #[serde(default)]
    pub model: Option<ModelVersion>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl From<DiagnosisRequest> for DiagnosisSubmission {
    fn from(request: DiagnosisRequest) -> Self {
        DiagnosisSubmission {
            answers: AnswerSet::from(request.answers),
            model: request.model,
            lead: LeadDetails {
                profession: request.profession,
                postal_code: request.postal_code,
            },
        }
    }
}

/// Router builder exposing HTTP endpoints for quiz submission and the
/// question catalog.
pub fn diagnosis_router<N>(service: Arc<DiagnosisService<N>>) -> Router
where
    N: LeadPublisher + 'static,
{
    Router::new()
        .route("/api/v1/diagnosis", post(submit_handler::<N>))
        .route("/api/v1/diagnosis/questions", get(questions_handler::<N>))
        .with_state(service)
}

pub(crate) async fn submit_handler<N>(
    State(service): State<Arc<DiagnosisService<N>>>,
    axum::Json(request): axum::Json<DiagnosisRequest>,
) -> Response
where
    N: LeadPublisher + 'static,
{
    match service.submit(request.into()) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(DiagnosisServiceError::Lead(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questions_handler<N>(
    State(service): State<Arc<DiagnosisService<N>>>,
) -> Response
where
    N: LeadPublisher + 'static,
{
    let payload = json!({
        "questions": service.engine().catalog().questions(),
        "legacy_questions": service.engine().legacy_catalog().questions(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
