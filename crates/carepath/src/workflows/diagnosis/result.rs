use serde::Serialize;
use tracing::{info, warn};

use super::axes::TypeCode;
use super::content::{ContentCatalog, TypeProfile};
use super::domain::{
    DeviationEntry, LeadDetails, ModelVersion, PersonalityTypeId, ScoreEntry, StressPattern,
};
use super::resolver::DEFAULT_TYPE;
use super::stress::{StressOutcome, StressProfile};

/// One named raw score vector inside a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSeries {
    pub name: &'static str,
    pub entries: Vec<ScoreEntry>,
}

/// One named chart-ready deviation vector inside a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationSeries {
    pub name: &'static str,
    pub entries: Vec<DeviationEntry>,
}

/// Stress analysis as carried on a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressSummary {
    pub scores: Vec<ScoreEntry>,
    pub dominant: StressPattern,
    pub profile: &'static StressProfile,
}

impl From<StressOutcome> for StressSummary {
    fn from(outcome: StressOutcome) -> Self {
        Self {
            scores: outcome.scores.entries(),
            dominant: outcome.dominant,
            profile: outcome.profile,
        }
    }
}

/// The final immutable result of a quiz submission. Constructed once,
/// consumed read-only by rendering and lead routing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisRecord {
    pub model: ModelVersion,
    pub type_key: String,
    pub profile: &'static TypeProfile,
    pub score_series: Vec<ScoreSeries>,
    pub deviation_series: Vec<DeviationSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress: Option<StressSummary>,
    pub lead: LeadDetails,
}

/// Identifier resolved by a scoring model, still typed per model.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResolvedType {
    Archetype(PersonalityTypeId),
    Legacy(TypeCode),
}

/// Numeric result of one scoring model, before content is attached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ModelOutcome {
    pub model: ModelVersion,
    pub resolved: ResolvedType,
    pub score_series: Vec<ScoreSeries>,
    pub deviation_series: Vec<DeviationSeries>,
    pub stress: Option<StressSummary>,
    /// Submitted answers that referenced a catalog question.
    pub answered: usize,
}

/// Join a model outcome with static descriptive content into the final
/// record.
///
/// This is the only place business fallback content applies: an identifier
/// with no authored entry takes the complete fallback profile, and an
/// insufficient submission (no usable answers at all) takes the default
/// archetype wholesale so the respondent still receives a coherent,
/// fully-populated result.
pub(crate) fn compose_record(
    outcome: ModelOutcome,
    content: &ContentCatalog,
    lead: LeadDetails,
) -> DiagnosisRecord {
    let resolved = if outcome.answered == 0 {
        info!(model = outcome.model.label(), "empty submission, composing default record");
        match outcome.model {
            ModelVersion::Archetype => ResolvedType::Archetype(DEFAULT_TYPE),
            ModelVersion::LegacyAxis => outcome.resolved,
        }
    } else {
        outcome.resolved
    };

    let (type_key, profile) = match &resolved {
        ResolvedType::Archetype(id) => {
            let profile = content.archetype(*id).unwrap_or_else(|| {
                warn!(type_key = id.as_str(), "no authored content for archetype, using fallback");
                content.fallback()
            });
            (id.as_str().to_string(), profile)
        }
        ResolvedType::Legacy(code) => {
            let profile = content.legacy_profile(code.as_str()).unwrap_or_else(|| {
                warn!(type_key = code.as_str(), "no authored content for type code, using fallback");
                content.fallback()
            });
            (code.as_str().to_string(), profile)
        }
    };

    DiagnosisRecord {
        model: outcome.model,
        type_key,
        profile,
        score_series: outcome.score_series,
        deviation_series: outcome.deviation_series,
        stress: outcome.stress,
        lead,
    }
}
