use super::common::*;
use crate::workflows::diagnosis::{
    AnswerSet, ContentCatalog, DiagnosisEngine, DiagnosisRecord, LeadDetails, LegacyCatalog,
    ModelVersion, QuestionCatalog, RawAnswer, StressPattern, TypeProfile, DEFAULT_TYPE,
};

fn assert_fully_populated(record: &DiagnosisRecord) {
    assert!(!record.type_key.is_empty());
    assert!(!record.profile.title.is_empty());
    assert!(!record.profile.headline.is_empty());
    assert!(!record.profile.traits.is_empty());
    assert!(!record.profile.strengths.is_empty());
    assert!(!record.profile.ideal_workplaces.is_empty());
    assert!(!record.profile.challenging_workplaces.is_empty());
    assert!(!record.profile.figure.is_empty());
    assert!(!record.profile.quote.is_empty());
    assert!(!record.score_series.is_empty());
    assert!(!record.deviation_series.is_empty());
}

#[test]
fn all_max_submission_pins_the_scholar_archetype() {
    let record = engine().diagnose(ModelVersion::Archetype, &all_max_answers(), lead());

    assert_eq!(record.type_key, "scholar");
    assert_eq!(record.profile.title, "The Scholar");
    assert_fully_populated(&record);

    let riasec = &record.deviation_series[0];
    assert_eq!(riasec.name, "riasec");
    let investigative = &riasec.entries[1];
    assert_eq!(investigative.label, "Investigative");
    assert_eq!(investigative.raw_score, 12.0);
    assert_eq!(investigative.deviation_score, 67);

    let stress = record.stress.as_ref().expect("archetype records carry stress");
    assert_eq!(stress.dominant, StressPattern::Internalizing);
}

#[test]
fn all_max_submission_pins_the_legacy_code() {
    let record = engine().diagnose(ModelVersion::LegacyAxis, &all_max_answers(), lead());

    assert_eq!(record.type_key, "SIHA");
    assert_eq!(record.profile.title, "The Specialist Pathfinder");
    assert!(record.stress.is_none());
    assert_fully_populated(&record);
}

#[test]
fn empty_submission_composes_the_default_archetype_record() {
    let record = engine().diagnose(ModelVersion::Archetype, &AnswerSet::new(), LeadDetails::default());

    assert_eq!(record.type_key, DEFAULT_TYPE.as_str());
    assert_fully_populated(&record);

    for series in &record.deviation_series {
        for entry in &series.entries {
            assert_eq!(entry.deviation_score, 50, "{}", entry.label);
        }
    }
}

#[test]
fn empty_legacy_submission_yields_the_all_zero_code() {
    let record = engine().diagnose(ModelVersion::LegacyAxis, &AnswerSet::new(), LeadDetails::default());

    assert_eq!(record.type_key, "GCTP");
    assert_eq!(record.profile.title, "The Reliable Professional");
    assert_fully_populated(&record);
}

#[test]
fn legacy_code_without_authored_content_takes_the_complete_fallback() {
    // Positive specialist and human axes, nothing else: "SCHP" has no
    // authored legacy profile.
    let record = engine().diagnose(
        ModelVersion::LegacyAxis,
        &answers_of(&[(101, RawAnswer::Number(3)), (107, RawAnswer::Number(3))]),
        LeadDetails::default(),
    );

    assert_eq!(record.type_key, "SCHP");
    assert_eq!(record.profile.title, "The All-Rounder");
    assert_fully_populated(&record);
}

static THIN_FALLBACK: TypeProfile = TypeProfile {
    title: "The Stand-In",
    headline: "Placeholder persona while content is authored.",
    traits: &["Placeholder"],
    strengths: &["Keeps the funnel running"],
    ideal_workplaces: &["Anywhere"],
    challenging_workplaces: &["Nowhere in particular"],
    figure: "Anonymous",
    quote: "Content to follow.",
};

#[test]
fn missing_archetype_content_takes_the_complete_fallback() {
    let engine = DiagnosisEngine::new(
        QuestionCatalog::standard(),
        LegacyCatalog::standard(),
        ContentCatalog::new(&[], &[], &THIN_FALLBACK),
    );

    let record = engine.diagnose(ModelVersion::Archetype, &all_max_answers(), lead());

    assert_eq!(record.type_key, "scholar");
    assert_eq!(record.profile.title, "The Stand-In");
    assert_fully_populated(&record);
}

#[test]
fn lead_metadata_passes_through_unvalidated() {
    let details = LeadDetails {
        profession: Some("travel nurse".to_string()),
        postal_code: Some("not-even-a-postcode".to_string()),
    };
    let record = engine().diagnose(ModelVersion::Archetype, &all_max_answers(), details.clone());

    assert_eq!(record.lead, details);
}

#[test]
fn diagnosis_is_idempotent_for_identical_answer_sets() {
    let engine = engine();
    let answers = all_max_answers();

    let first = engine.diagnose(ModelVersion::Archetype, &answers, lead());
    let second = engine.diagnose(ModelVersion::Archetype, &answers, lead());
    assert_eq!(first, second);

    let first_legacy = engine.diagnose(ModelVersion::LegacyAxis, &answers, lead());
    let second_legacy = engine.diagnose(ModelVersion::LegacyAxis, &answers, lead());
    assert_eq!(first_legacy, second_legacy);
}
