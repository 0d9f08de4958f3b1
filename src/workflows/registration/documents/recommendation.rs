use super::domain::{DocumentType, PolicyContext};

/// Pick the pre-selected document among `allowed_types`.
///
/// The national running default (PPS in France) beats a federation-code hint,
/// which in turn beats the home federation license. Anything else falls back
/// to the first allowed type, so the result is always a member of the list.
pub fn select_recommendation(
    context: &PolicyContext,
    allowed_types: &[DocumentType],
    home_federation_code: &str,
) -> Option<DocumentType> {
    let first = *allowed_types.first()?;
    let allows = |kind: DocumentType| allowed_types.contains(&kind);

    if context.is_french() && context.is_running_like() && allows(DocumentType::Pps) {
        return Some(DocumentType::Pps);
    }

    if !home_federation_code.trim().is_empty() && allows(DocumentType::LicenseOtherFederation) {
        return Some(DocumentType::LicenseOtherFederation);
    }

    if allows(DocumentType::LicenseHomeFederation) {
        return Some(DocumentType::LicenseHomeFederation);
    }

    Some(first)
}
