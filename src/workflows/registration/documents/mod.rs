//! Eligibility-document requirements for registrations.
//!
//! Data flows one way: raw context and policy are normalized, resolved into a
//! [`RequirementProfile`], and a caller-owned [`SubmissionValue`] is validated
//! against it. Every function here is pure; callers re-run them on each edit.

mod catalog;
mod context;
mod domain;
mod policy;
mod recommendation;
mod requirements;
pub mod router;
mod validation;

#[cfg(test)]
mod tests;

pub use context::normalize;
pub use domain::{
    DocumentEvaluation, DocumentType, PolicyContext, RawAge, RawPolicyContext, RequiredField,
    RequirementProfile, SubmissionValue, ValidationIssue, ValidationResult,
};
pub use policy::{PolicyConfig, PolicyOverrides};
pub use recommendation::select_recommendation;
pub use requirements::resolve;
pub use router::{document_router, EvaluationRequest};
pub use validation::validate;

use tracing::debug;

/// Normalize, resolve and validate in one pass.
pub fn evaluate(
    raw: &RawPolicyContext,
    policy: &PolicyConfig,
    value: &SubmissionValue,
) -> DocumentEvaluation {
    let context = normalize(raw);
    let profile = resolve(&context, policy);
    let validation = validate(&profile, value);

    debug!(
        selected = ?value.selected_type,
        ok = validation.ok,
        errors = validation.errors.len(),
        "evaluated document submission"
    );

    DocumentEvaluation {
        profile,
        validation,
    }
}
