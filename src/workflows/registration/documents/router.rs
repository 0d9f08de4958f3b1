use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{RawPolicyContext, SubmissionValue};
use super::policy::{PolicyConfig, PolicyOverrides};
use super::{evaluate, normalize, resolve};

/// Body accepted by the document endpoints and by the CLI `evaluate` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationRequest {
    pub context: RawPolicyContext,
    pub policy: PolicyOverrides,
    pub submission: SubmissionValue,
}

/// Router exposing requirement resolution and submission checks over HTTP.
///
/// `default_policy` is the organizer baseline; each request may override it.
pub fn document_router(default_policy: Arc<PolicyConfig>) -> Router {
    Router::new()
        .route(
            "/api/v1/registration/documents/requirements",
            post(requirements_handler),
        )
        .route(
            "/api/v1/registration/documents/evaluate",
            post(evaluate_handler),
        )
        .with_state(default_policy)
}

pub(crate) async fn requirements_handler(
    State(default_policy): State<Arc<PolicyConfig>>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    let policy = default_policy.with_overrides(&request.policy);
    let profile = resolve(&normalize(&request.context), &policy);
    (StatusCode::OK, Json(profile)).into_response()
}

pub(crate) async fn evaluate_handler(
    State(default_policy): State<Arc<PolicyConfig>>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    let policy = default_policy.with_overrides(&request.policy);
    let evaluation = evaluate(&request.context, &policy, &request.submission);
    (StatusCode::OK, Json(evaluation)).into_response()
}
