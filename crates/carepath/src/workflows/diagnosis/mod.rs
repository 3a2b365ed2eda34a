//! Diagnostic scoring engine for the CarePath quiz.
//!
//! Two scoring models coexist and stay independent: the legacy 4-axis bipolar
//! model and the current RIASEC + behavior-style archetype model. Both are
//! pure, synchronous functions from an [`AnswerSet`] plus read-only catalogs
//! to an immutable [`DiagnosisRecord`]; no component here performs I/O or
//! raises an error toward the caller.

mod answers;
mod axes;
mod catalog;
mod categories;
mod content;
mod deviation;
mod domain;
mod resolver;
mod result;
pub mod router;
pub mod service;
mod stress;

#[cfg(test)]
mod tests;

use tracing::debug;

pub use axes::{aggregate_axes, AxisOutcome, AxisScores, TypeCode};
pub use catalog::{LegacyCatalog, QuestionCatalog};
pub use categories::{aggregate_categories, BehaviorScores, RiasecScores};
pub use content::{ContentCatalog, TypeProfile};
pub use deviation::deviation_entries;
pub use domain::{
    AnswerSet, BehaviorStyle, BipolarAxis, DeviationEntry, LeadDetails, LegacyQuestion,
    ModelVersion, PatternOption, PersonalityTypeId, Question, QuestionId, QuestionKind, RawAnswer,
    RiasecCategory, ScoreEntry, StressPattern, StyleOption,
};
pub use resolver::{resolve_type, DEFAULT_TYPE};
pub use result::{DeviationSeries, DiagnosisRecord, ScoreSeries, StressSummary};
pub use router::diagnosis_router;
pub use service::{DiagnosisService, DiagnosisServiceError, DiagnosisSubmission};
pub use stress::{analyze_stress, profile_for, StressOutcome, StressProfile, StressScores};

use result::{compose_record, ModelOutcome, ResolvedType};

/// Stateless engine holding the read-only catalogs for both scoring models.
/// Every diagnosis is a pure function over the submitted answers.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    catalog: QuestionCatalog,
    legacy: LegacyCatalog,
    content: ContentCatalog,
}

impl DiagnosisEngine {
    pub fn new(catalog: QuestionCatalog, legacy: LegacyCatalog, content: ContentCatalog) -> Self {
        Self {
            catalog,
            legacy,
            content,
        }
    }

    /// Engine wired with the published question banks and content.
    pub fn standard() -> Self {
        Self::new(
            QuestionCatalog::standard(),
            LegacyCatalog::standard(),
            ContentCatalog::standard(),
        )
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn legacy_catalog(&self) -> &LegacyCatalog {
        &self.legacy
    }

    /// Run one scoring model over an answer set and compose the final record.
    pub fn diagnose(
        &self,
        model: ModelVersion,
        answers: &AnswerSet,
        lead: LeadDetails,
    ) -> DiagnosisRecord {
        let outcome = match model {
            ModelVersion::Archetype => self.archetype_outcome(answers),
            ModelVersion::LegacyAxis => self.legacy_outcome(answers),
        };

        debug!(
            model = model.label(),
            answered = outcome.answered,
            "model outcome ready"
        );

        compose_record(outcome, &self.content, lead)
    }

    fn archetype_outcome(&self, answers: &AnswerSet) -> ModelOutcome {
        let (riasec, behavior) = aggregate_categories(answers, &self.catalog);
        let stress = analyze_stress(answers, &self.catalog);
        let resolved = resolve_type(riasec.dominant(), behavior.dominant());

        let riasec_entries = riasec.entries();
        let behavior_entries = behavior.entries();

        ModelOutcome {
            model: ModelVersion::Archetype,
            resolved: ResolvedType::Archetype(resolved),
            deviation_series: vec![
                DeviationSeries {
                    name: "riasec",
                    entries: deviation_entries(&riasec_entries),
                },
                DeviationSeries {
                    name: "behavior_styles",
                    entries: deviation_entries(&behavior_entries),
                },
            ],
            score_series: vec![
                ScoreSeries {
                    name: "riasec",
                    entries: riasec_entries,
                },
                ScoreSeries {
                    name: "behavior_styles",
                    entries: behavior_entries,
                },
            ],
            stress: Some(stress.into()),
            answered: self.answered_current(answers),
        }
    }

    fn legacy_outcome(&self, answers: &AnswerSet) -> ModelOutcome {
        let outcome = aggregate_axes(answers, &self.legacy);
        let axis_entries = outcome.scores.entries();

        ModelOutcome {
            model: ModelVersion::LegacyAxis,
            resolved: ResolvedType::Legacy(outcome.code),
            deviation_series: vec![DeviationSeries {
                name: "axes",
                entries: deviation_entries(&axis_entries),
            }],
            score_series: vec![ScoreSeries {
                name: "axes",
                entries: axis_entries,
            }],
            stress: None,
            answered: self.answered_legacy(answers),
        }
    }

    fn answered_current(&self, answers: &AnswerSet) -> usize {
        answers
            .ids()
            .filter(|id| self.catalog.question(*id).is_some())
            .count()
    }

    fn answered_legacy(&self, answers: &AnswerSet) -> usize {
        answers
            .ids()
            .filter(|id| self.legacy.question(*id).is_some())
            .count()
    }
}
