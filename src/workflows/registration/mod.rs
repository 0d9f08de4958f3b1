pub mod documents;

pub use documents::{
    document_router, evaluate, normalize, resolve, select_recommendation, validate,
    DocumentEvaluation, DocumentType, PolicyConfig, PolicyContext, PolicyOverrides, RawAge,
    RawPolicyContext, RequiredField, RequirementProfile, SubmissionValue, ValidationIssue,
    ValidationResult,
};
