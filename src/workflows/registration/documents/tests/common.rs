use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::registration::documents::domain::{
    DocumentType, PolicyContext, RawAge, RawPolicyContext, RequirementProfile, SubmissionValue,
};
use crate::workflows::registration::documents::policy::PolicyConfig;
use crate::workflows::registration::documents::{document_router, normalize, resolve};

pub(super) fn raw_context(country: &str, activity: &str) -> RawPolicyContext {
    RawPolicyContext {
        country: Some(country.to_string()),
        activity_category: Some(activity.to_string()),
        ..RawPolicyContext::default()
    }
}

pub(super) fn context(country: &str, activity: &str) -> PolicyContext {
    normalize(&raw_context(country, activity))
}

pub(super) fn minor_context(country: &str, activity: &str, age: u32) -> PolicyContext {
    normalize(&RawPolicyContext {
        participant_age: Some(RawAge::from(age)),
        ..raw_context(country, activity)
    })
}

pub(super) fn default_policy() -> PolicyConfig {
    PolicyConfig::DEFAULT
}

/// French trail runner under the default policy.
pub(super) fn trail_profile() -> RequirementProfile {
    resolve(&context("FR", "trail"), &default_policy())
}

pub(super) fn filled_other_license() -> SubmissionValue {
    SubmissionValue {
        license_number: Some("A12345".to_string()),
        federation_code: Some("FFTRI".to_string()),
        ..SubmissionValue::selecting(DocumentType::LicenseOtherFederation)
    }
}

pub(super) fn router_with_default_policy() -> axum::Router {
    document_router(Arc::new(default_policy()))
}

pub(super) async fn json_body(response: Response) -> Value {
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
