use std::collections::BTreeMap;

use tracing::debug;

use super::catalog::base_fields;
use super::domain::{DocumentType, PolicyContext, RequiredField, RequirementProfile};
use super::policy::PolicyConfig;
use super::recommendation::select_recommendation;

pub(crate) const NOT_REQUIRED_NOTE: &str = "document not required";
pub(crate) const MINOR_GUARDIAN_NOTE: &str =
    "participant is a minor: a guardian authorisation document is recommended";

/// Derive the allowed proofs, their fields and the pre-selected type.
pub fn resolve(context: &PolicyContext, policy: &PolicyConfig) -> RequirementProfile {
    if !policy.document_required {
        debug!(country = %context.country(), "document requirement disabled by policy");
        return RequirementProfile {
            allowed_types: Vec::new(),
            required_fields_by_type: BTreeMap::new(),
            recommended_type: None,
            notes: vec![NOT_REQUIRED_NOTE.to_string()],
        };
    }

    let forced = policy.forced_types();
    let mut allowed_types = match forced {
        Some(types) => dedup(types.iter().copied()),
        None => dedup(base_allowed_types(context, policy)),
    };

    let mut notes = Vec::new();
    if context.is_minor() && policy.minor_requires_guardian_document {
        notes.push(MINOR_GUARDIAN_NOTE.to_string());
        if forced.is_none()
            && policy.other_document_enabled()
            && !allowed_types.contains(&DocumentType::OtherDocument)
        {
            allowed_types.push(DocumentType::OtherDocument);
        }
    }

    let required_fields_by_type = allowed_types
        .iter()
        .map(|kind| (*kind, required_fields(*kind, policy)))
        .collect();

    let recommended_type =
        select_recommendation(context, &allowed_types, context.home_federation_code());

    debug!(
        country = %context.country(),
        activity = %context.activity_category(),
        forced = forced.is_some(),
        allowed = ?allowed_types,
        recommended = ?recommended_type,
        "resolved document requirements"
    );

    RequirementProfile {
        allowed_types,
        required_fields_by_type,
        recommended_type,
        notes,
    }
}

fn base_allowed_types(context: &PolicyContext, policy: &PolicyConfig) -> Vec<DocumentType> {
    let mut types = if context.is_french() && context.is_running_like() {
        vec![
            DocumentType::Pps,
            DocumentType::LicenseHomeFederation,
            DocumentType::LicenseOtherFederation,
        ]
    } else {
        vec![DocumentType::LicenseOtherFederation]
    };

    if policy.medical_certificate_enabled() {
        types.push(DocumentType::MedicalCertificate);
    }
    if policy.other_document_enabled() {
        types.push(DocumentType::OtherDocument);
    }
    types
}

fn required_fields(document_type: DocumentType, policy: &PolicyConfig) -> Vec<RequiredField> {
    let mut fields = base_fields(document_type).to_vec();
    if document_type == DocumentType::Pps && policy.require_expiry_for_identifier_code {
        fields.push(RequiredField::ExpiryDate);
    }
    fields
}

fn dedup(types: impl IntoIterator<Item = DocumentType>) -> Vec<DocumentType> {
    let mut unique = Vec::new();
    for kind in types {
        if !unique.contains(&kind) {
            unique.push(kind);
        }
    }
    unique
}
