//! End-to-end scenarios for document requirements through the public API only.

mod common {
    use registration_docs::workflows::registration::{
        DocumentType, PolicyConfig, RawAge, RawPolicyContext, SubmissionValue,
    };

    pub(super) fn raw(country: &str, activity: Option<&str>) -> RawPolicyContext {
        RawPolicyContext {
            country: Some(country.to_string()),
            activity_category: activity.map(str::to_string),
            ..RawPolicyContext::default()
        }
    }

    pub(super) fn raw_with_age(country: &str, activity: &str, age: u32) -> RawPolicyContext {
        RawPolicyContext {
            participant_age: Some(RawAge::from(age)),
            ..raw(country, Some(activity))
        }
    }

    pub(super) fn policies() -> Vec<PolicyConfig> {
        let base = PolicyConfig::DEFAULT;
        vec![
            base.clone(),
            PolicyConfig {
                allow_medical_certificate: true,
                ..base.clone()
            },
            PolicyConfig {
                uploads_enabled: false,
                allow_medical_certificate: true,
                ..base.clone()
            },
            PolicyConfig {
                allow_other_document: false,
                minor_requires_guardian_document: true,
                ..base.clone()
            },
            PolicyConfig {
                minor_requires_guardian_document: true,
                require_expiry_for_identifier_code: true,
                ..base.clone()
            },
            PolicyConfig {
                forced_allowed_types: Some(Vec::new()),
                ..base.clone()
            },
            PolicyConfig {
                document_required: false,
                ..base
            },
        ]
    }

    pub(super) fn contexts() -> Vec<RawPolicyContext> {
        let mut federated = raw("FR", Some("cycling"));
        federated.home_federation_code = Some("ffc".to_string());
        vec![
            RawPolicyContext::default(),
            raw("FR", Some("trail")),
            raw("FR", Some("route")),
            raw("FR", Some("swimming")),
            raw("ES", None),
            raw_with_age("FR", "running", 15),
            raw_with_age("IT", "trail", 12),
            federated,
        ]
    }

    pub(super) fn filled(kind: DocumentType) -> SubmissionValue {
        SubmissionValue {
            identifier_code: Some("PPS-2026-0001".to_string()),
            expiry_date: Some("2026-12-31".to_string()),
            license_number: Some("1834567".to_string()),
            federation_code: Some("FFA".to_string()),
            document_reference: Some("registrations/77/proof.pdf".to_string()),
            ..SubmissionValue::selecting(kind)
        }
    }
}

use common::*;
use registration_docs::workflows::registration::{
    evaluate, normalize, resolve, validate, DocumentType, PolicyConfig, SubmissionValue,
};
use DocumentType::*;

#[test]
fn french_trail_scenario() {
    let profile = resolve(&normalize(&raw("FR", Some("trail"))), &PolicyConfig::DEFAULT);

    assert_eq!(
        profile.allowed_types,
        vec![Pps, LicenseHomeFederation, LicenseOtherFederation, OtherDocument]
    );
    assert_eq!(profile.recommended_type, Some(Pps));
}

#[test]
fn french_trail_with_medical_certificate_scenario() {
    let policy = PolicyConfig {
        allow_medical_certificate: true,
        ..PolicyConfig::DEFAULT
    };

    let profile = resolve(&normalize(&raw("FR", Some("trail"))), &policy);

    assert_eq!(profile.allowed_types.last(), Some(&OtherDocument));
    assert!(profile.allows(MedicalCertificate));
    assert_eq!(
        profile.allowed_types,
        vec![
            Pps,
            LicenseHomeFederation,
            LicenseOtherFederation,
            MedicalCertificate,
            OtherDocument
        ]
    );
}

#[test]
fn spanish_default_scenario() {
    let profile = resolve(&normalize(&raw("ES", None)), &PolicyConfig::DEFAULT);

    assert_eq!(profile.allowed_types, vec![LicenseOtherFederation, OtherDocument]);
    assert_eq!(profile.recommended_type, Some(LicenseOtherFederation));
}

#[test]
fn minor_scenario_keeps_other_document_out() {
    let policy = PolicyConfig {
        minor_requires_guardian_document: true,
        allow_other_document: false,
        uploads_enabled: true,
        ..PolicyConfig::DEFAULT
    };

    let profile = resolve(&normalize(&raw_with_age("FR", "running", 15)), &policy);

    assert!(profile.notes.iter().any(|note| note.contains("minor")));
    assert!(!profile.allows(OtherDocument));
}

#[test]
fn blank_pps_code_scenario() {
    let evaluation = evaluate(
        &raw("FR", Some("trail")),
        &PolicyConfig::DEFAULT,
        &SubmissionValue {
            identifier_code: Some(String::new()),
            ..SubmissionValue::selecting(Pps)
        },
    );

    assert!(!evaluation.validation.ok);
    assert_eq!(
        evaluation.validation.errors,
        vec!["identifier code required".to_string()]
    );
}

#[test]
fn not_required_scenario() {
    let policy = PolicyConfig {
        document_required: false,
        ..PolicyConfig::DEFAULT
    };
    let profile = resolve(&normalize(&raw("FR", Some("trail"))), &policy);

    assert!(profile.allowed_types.is_empty());
    for kind in DocumentType::ALL {
        assert!(validate(&profile, &SubmissionValue::selecting(kind)).ok);
    }
    assert!(validate(&profile, &SubmissionValue::default()).ok);
}

#[test]
fn forced_override_wins_everywhere() {
    let policy = PolicyConfig {
        forced_allowed_types: Some(vec![OtherDocument]),
        ..PolicyConfig::DEFAULT
    };

    for context in contexts() {
        let profile = resolve(&normalize(&context), &policy);
        assert_eq!(profile.allowed_types, vec![OtherDocument], "{context:?}");
    }
}

#[test]
fn other_federation_license_reports_both_missing_fields() {
    let evaluation = evaluate(
        &raw("ES", None),
        &PolicyConfig::DEFAULT,
        &SubmissionValue {
            license_number: Some(" ".to_string()),
            ..SubmissionValue::selecting(LicenseOtherFederation)
        },
    );

    assert_eq!(evaluation.validation.errors.len(), 2);
}

#[test]
fn recommendation_is_always_allowed() {
    for policy in policies() {
        for context in contexts() {
            let profile = resolve(&normalize(&context), &policy);
            match profile.recommended_type {
                Some(kind) => assert!(profile.allows(kind), "{profile:?}"),
                None => assert!(profile.allowed_types.is_empty(), "{profile:?}"),
            }
        }
    }
}

#[test]
fn uploads_disabled_never_allows_upload_types() {
    for mut policy in policies() {
        policy.uploads_enabled = false;
        policy.allow_medical_certificate = true;
        policy.allow_other_document = true;
        for context in contexts() {
            let profile = resolve(&normalize(&context), &policy);
            assert!(
                profile.allowed_types.iter().all(|kind| !kind.is_upload()),
                "{profile:?}"
            );
        }
    }
}

#[test]
fn allowed_types_have_no_duplicates() {
    for policy in policies() {
        for context in contexts() {
            let profile = resolve(&normalize(&context), &policy);
            let mut seen = profile.allowed_types.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), profile.allowed_types.len(), "{profile:?}");
        }
    }
}

#[test]
fn fully_filled_submissions_pass_for_every_allowed_type() {
    for policy in policies() {
        for context in contexts() {
            let profile = resolve(&normalize(&context), &policy);
            for kind in profile.allowed_types.clone() {
                let result = validate(&profile, &filled(kind));
                assert!(result.ok, "{kind:?} under {profile:?}: {result:?}");
            }
        }
    }
}

#[test]
fn evaluation_is_deterministic_across_threads() {
    let policy = PolicyConfig {
        allow_medical_certificate: true,
        minor_requires_guardian_document: true,
        ..PolicyConfig::DEFAULT
    };
    let context = raw_with_age("FR", "trail", 16);
    let value = SubmissionValue::selecting(LicenseOtherFederation);
    let expected = evaluate(&context, &policy, &value);

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| evaluate(&context, &policy, &value)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("evaluation thread panicked"))
            .collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn profile_serializes_with_wire_codes() {
    let profile = resolve(&normalize(&raw("FR", Some("trail"))), &PolicyConfig::DEFAULT);

    let json = serde_json::to_value(&profile).expect("serializes");

    assert_eq!(json["recommendedType"], serde_json::json!("PPS"));
    assert_eq!(
        json["requiredFieldsByType"]["PPS"],
        serde_json::json!(["identifier_code"])
    );
}
