use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};

use super::domain::ApplicantId;
use super::error::AdmissionError;
use super::repository::{AdmissionRepository, RepositoryError};
use super::service::{AdmissionScoringService, ScoringServiceError};

/// Router builder exposing the applicant listing and scoring endpoints.
pub fn admission_router<R>(service: Arc<AdmissionScoringService<R>>) -> Router
where
    R: AdmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/applicants", get(list_handler::<R>))
        .route(
            "/api/v1/applicants/:applicant_id/score",
            get(score_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<AdmissionScoringService<R>>>,
) -> Response
where
    R: AdmissionRepository + 'static,
{
    match service.list() {
        Ok(applicants) => {
            (StatusCode::OK, axum::Json(json!({ "data": applicants }))).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AdmissionScoringService<R>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: AdmissionRepository + 'static,
{
    let id = ApplicantId(applicant_id);
    match service.score(&id) {
        Ok(score) => (StatusCode::OK, axum::Json(json!({ "data": score.view() }))).into_response(),
        Err(other) => error_response(other),
    }
}

fn error_response(error: ScoringServiceError) -> Response {
    match error {
        ScoringServiceError::Admission(error) => {
            let status = if error.is_input_validation() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            (status, axum::Json(admission_error_payload(&error))).into_response()
        }
        ScoringServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "applicant not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        ScoringServiceError::Repository(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Client payload: the message plus the fields a frontend needs to highlight the input.
pub fn admission_error_payload(error: &AdmissionError) -> Value {
    let message = error.to_string();
    match error {
        AdmissionError::OutOfRangePercentage { percentage } => {
            json!({ "error": message, "percentage": percentage })
        }
        AdmissionError::FailedExam {
            subject,
            percentage,
        } => json!({ "error": message, "subject": subject, "percentage": percentage }),
        AdmissionError::MissingProgramMandatorySubject { subject } => {
            json!({ "error": message, "subject": subject })
        }
        AdmissionError::ProgramMandatorySubjectLevel {
            subject,
            required_level,
        } => json!({ "error": message, "subject": subject, "required_level": required_level }),
        AdmissionError::MissingGlobalMandatorySubject
        | AdmissionError::MissingElectiveSubject
        | AdmissionError::UnknownProgram => json!({ "error": message }),
    }
}
