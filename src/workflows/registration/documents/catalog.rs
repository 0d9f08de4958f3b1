use super::domain::{DocumentType, RequiredField};

const PPS_FIELDS: &[RequiredField] = &[RequiredField::IdentifierCode];
const HOME_LICENSE_FIELDS: &[RequiredField] = &[RequiredField::LicenseNumber];
const OTHER_LICENSE_FIELDS: &[RequiredField] =
    &[RequiredField::LicenseNumber, RequiredField::FederationCode];
const UPLOAD_FIELDS: &[RequiredField] = &[RequiredField::DocumentReference];

/// Fields every submission of `document_type` carries, before policy additions.
pub(crate) fn base_fields(document_type: DocumentType) -> &'static [RequiredField] {
    match document_type {
        DocumentType::Pps => PPS_FIELDS,
        DocumentType::LicenseHomeFederation => HOME_LICENSE_FIELDS,
        DocumentType::LicenseOtherFederation => OTHER_LICENSE_FIELDS,
        DocumentType::MedicalCertificate | DocumentType::OtherDocument => UPLOAD_FIELDS,
    }
}

impl RequiredField {
    pub const fn label(self) -> &'static str {
        match self {
            RequiredField::IdentifierCode => "identifier code",
            RequiredField::ExpiryDate => "expiry date",
            RequiredField::LicenseNumber => "license number",
            RequiredField::FederationCode => "federation code",
            RequiredField::DocumentReference => "document reference",
        }
    }
}
