use std::collections::BTreeMap;

use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

/// Proof-of-eligibility document a participant can submit.
///
/// Declaration order doubles as the canonical ordering used by the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Health-screening code issued ahead of running events.
    Pps,
    LicenseHomeFederation,
    LicenseOtherFederation,
    MedicalCertificate,
    OtherDocument,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Pps,
        DocumentType::LicenseHomeFederation,
        DocumentType::LicenseOtherFederation,
        DocumentType::MedicalCertificate,
        DocumentType::OtherDocument,
    ];

    /// Whether the proof is a file handed to the storage collaborator.
    pub const fn is_upload(self) -> bool {
        matches!(
            self,
            DocumentType::MedicalCertificate | DocumentType::OtherDocument
        )
    }
}

/// Sub-value a document type needs before it counts as provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    IdentifierCode,
    ExpiryDate,
    LicenseNumber,
    FederationCode,
    /// Opaque pointer returned by the storage collaborator after an upload.
    DocumentReference,
}

/// Untrusted registration context as received from a form or request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPolicyContext {
    pub country: Option<String>,
    pub activity_category: Option<String>,
    pub participant_age: Option<RawAge>,
    pub home_federation_code: Option<String>,
    pub birth_date: Option<String>,
    pub event_date: Option<String>,
}

/// Age as typed by a form: a JSON number or a numeric string.
///
/// Any other JSON shape lands in `Other` and normalizes to an unknown age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAge {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<u32> for RawAge {
    fn from(value: u32) -> Self {
        RawAge::Number(f64::from(value))
    }
}

/// Canonical, defaulted context. Built by [`super::normalize`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyContext {
    pub(crate) country: String,
    pub(crate) activity_category: String,
    pub(crate) participant_age: Option<u32>,
    pub(crate) home_federation_code: String,
}

impl PolicyContext {
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn activity_category(&self) -> &str {
        &self.activity_category
    }

    pub fn participant_age(&self) -> Option<u32> {
        self.participant_age
    }

    pub fn home_federation_code(&self) -> &str {
        &self.home_federation_code
    }

    pub fn is_minor(&self) -> bool {
        self.participant_age.map(|age| age < 18).unwrap_or(false)
    }
}

/// Outcome of resolving a context against a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementProfile {
    pub allowed_types: Vec<DocumentType>,
    pub required_fields_by_type: BTreeMap<DocumentType, Vec<RequiredField>>,
    pub recommended_type: Option<DocumentType>,
    pub notes: Vec<String>,
}

impl RequirementProfile {
    pub fn allows(&self, document_type: DocumentType) -> bool {
        self.allowed_types.contains(&document_type)
    }

    pub fn required_fields(&self, document_type: DocumentType) -> &[RequiredField] {
        self.required_fields_by_type
            .get(&document_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Caller-owned form state; absent values are treated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionValue {
    #[serde(deserialize_with = "deserialize_selected_type")]
    pub selected_type: Option<DocumentType>,
    pub identifier_code: Option<String>,
    pub expiry_date: Option<String>,
    pub license_number: Option<String>,
    pub federation_code: Option<String>,
    pub document_reference: Option<String>,
}

impl SubmissionValue {
    pub fn selecting(document_type: DocumentType) -> Self {
        Self {
            selected_type: Some(document_type),
            ..Self::default()
        }
    }

    pub fn field(&self, field: RequiredField) -> &str {
        let value = match field {
            RequiredField::IdentifierCode => &self.identifier_code,
            RequiredField::ExpiryDate => &self.expiry_date,
            RequiredField::LicenseNumber => &self.license_number,
            RequiredField::FederationCode => &self.federation_code,
            RequiredField::DocumentReference => &self.document_reference,
        };
        value.as_deref().unwrap_or("")
    }
}

fn deserialize_selected_type<'de, D>(deserializer: D) -> Result<Option<DocumentType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => {
            let code: StrDeserializer<'_, D::Error> = code.into_deserializer();
            DocumentType::deserialize(code).map(Some)
        }
    }
}

/// Reason a submission failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("type not permitted in this context")]
    PolicyViolation { document_type: DocumentType },
    #[error("{} required", .field.label())]
    MissingField { field: RequiredField },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<String>,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn passed() -> Self {
        Self::from_issues(Vec::new())
    }

    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            ok: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
            issues,
        }
    }
}

/// Profile plus validation, as returned by [`super::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEvaluation {
    pub profile: RequirementProfile,
    pub validation: ValidationResult,
}
