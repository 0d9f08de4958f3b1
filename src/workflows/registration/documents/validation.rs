use super::domain::{RequirementProfile, SubmissionValue, ValidationIssue, ValidationResult};

/// Check a submission against a resolved profile.
///
/// An empty allowed set means nothing is required, whatever was selected.
/// Otherwise falls back to the recommended type when nothing is selected, and
/// every blank required field is reported in the profile's field order.
pub fn validate(profile: &RequirementProfile, value: &SubmissionValue) -> ValidationResult {
    if profile.allowed_types.is_empty() {
        return ValidationResult::passed();
    }

    let Some(document_type) = value.selected_type.or(profile.recommended_type) else {
        return ValidationResult::passed();
    };

    if !profile.allows(document_type) {
        return ValidationResult::from_issues(vec![ValidationIssue::PolicyViolation {
            document_type,
        }]);
    }

    let issues = profile
        .required_fields(document_type)
        .iter()
        .filter(|field| value.field(**field).trim().is_empty())
        .map(|field| ValidationIssue::MissingField { field: *field })
        .collect();

    ValidationResult::from_issues(issues)
}
