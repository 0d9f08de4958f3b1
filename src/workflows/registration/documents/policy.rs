use serde::{Deserialize, Serialize};

use super::domain::DocumentType;

/// Organizer toggles controlling which proofs and fields are in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyConfig {
    pub document_required: bool,
    pub uploads_enabled: bool,
    pub allow_medical_certificate: bool,
    pub allow_other_document: bool,
    pub require_expiry_for_identifier_code: bool,
    pub minor_requires_guardian_document: bool,
    /// Replaces the derived allow-list when present and non-empty.
    pub forced_allowed_types: Option<Vec<DocumentType>>,
}

impl PolicyConfig {
    pub const DEFAULT: PolicyConfig = PolicyConfig {
        document_required: true,
        uploads_enabled: true,
        allow_medical_certificate: false,
        allow_other_document: true,
        require_expiry_for_identifier_code: false,
        minor_requires_guardian_document: false,
        forced_allowed_types: None,
    };

    /// Returns a copy of `self` with every option set in `overrides` applied.
    pub fn with_overrides(&self, overrides: &PolicyOverrides) -> PolicyConfig {
        PolicyConfig {
            document_required: overrides
                .document_required
                .unwrap_or(self.document_required),
            uploads_enabled: overrides.uploads_enabled.unwrap_or(self.uploads_enabled),
            allow_medical_certificate: overrides
                .allow_medical_certificate
                .unwrap_or(self.allow_medical_certificate),
            allow_other_document: overrides
                .allow_other_document
                .unwrap_or(self.allow_other_document),
            require_expiry_for_identifier_code: overrides
                .require_expiry_for_identifier_code
                .unwrap_or(self.require_expiry_for_identifier_code),
            minor_requires_guardian_document: overrides
                .minor_requires_guardian_document
                .unwrap_or(self.minor_requires_guardian_document),
            forced_allowed_types: overrides
                .forced_allowed_types
                .clone()
                .or_else(|| self.forced_allowed_types.clone()),
        }
    }

    pub(crate) fn forced_types(&self) -> Option<&[DocumentType]> {
        self.forced_allowed_types
            .as_deref()
            .filter(|types| !types.is_empty())
    }

    pub(crate) fn medical_certificate_enabled(&self) -> bool {
        self.uploads_enabled && self.allow_medical_certificate
    }

    pub(crate) fn other_document_enabled(&self) -> bool {
        self.uploads_enabled && self.allow_other_document
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Partial policy as supplied per event; unset options fall through to a base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyOverrides {
    pub document_required: Option<bool>,
    pub uploads_enabled: Option<bool>,
    pub allow_medical_certificate: Option<bool>,
    pub allow_other_document: Option<bool>,
    pub require_expiry_for_identifier_code: Option<bool>,
    pub minor_requires_guardian_document: Option<bool>,
    pub forced_allowed_types: Option<Vec<DocumentType>>,
}
