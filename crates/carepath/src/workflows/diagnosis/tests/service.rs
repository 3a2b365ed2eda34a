use std::sync::Arc;

use super::common::*;
use crate::workflows::diagnosis::{
    DiagnosisService, DiagnosisServiceError, DiagnosisSubmission, ModelVersion,
};

#[test]
fn submit_scores_and_publishes_the_lead() {
    let (service, leads) = build_service();

    let record = service
        .submit(DiagnosisSubmission {
            answers: all_max_answers(),
            model: None,
            lead: lead(),
        })
        .expect("submission succeeds");

    assert_eq!(record.type_key, "scholar");

    let events = leads.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].type_key, "scholar");
    assert_eq!(events[0].model, ModelVersion::Archetype);
    assert_eq!(events[0].profession.as_deref(), Some("ICU nurse"));
    assert_eq!(events[0].region.as_deref(), Some("50309"));
}

#[test]
fn lead_payload_never_contains_raw_answers() {
    let (service, leads) = build_service();
    service
        .submit(DiagnosisSubmission {
            answers: all_max_answers(),
            model: None,
            lead: lead(),
        })
        .expect("submission succeeds");

    let payload = serde_json::to_value(&leads.events()[0]).expect("alert serializes");
    let fields: Vec<&str> = payload
        .as_object()
        .expect("alert is an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(fields, ["type_key", "model", "profession", "region"]);
}

#[test]
fn submission_model_overrides_the_service_default() {
    let (service, leads) = build_service();

    let record = service
        .submit(DiagnosisSubmission {
            answers: all_max_answers(),
            model: Some(ModelVersion::LegacyAxis),
            lead: lead(),
        })
        .expect("submission succeeds");

    assert_eq!(record.type_key, "SIHA");
    assert_eq!(leads.events()[0].model, ModelVersion::LegacyAxis);
}

#[test]
fn publisher_failure_surfaces_as_a_lead_error() {
    let service = DiagnosisService::new(
        engine(),
        Arc::new(FailingLeads),
        ModelVersion::Archetype,
    );

    let error = service
        .submit(DiagnosisSubmission {
            answers: all_max_answers(),
            model: None,
            lead: lead(),
        })
        .expect_err("publisher failure propagates");

    assert!(matches!(error, DiagnosisServiceError::Lead(_)));
}
