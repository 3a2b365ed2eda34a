use serde::Serialize;
use tracing::debug;

use super::answers::normalize_scaled;
use super::catalog::LegacyCatalog;
use super::domain::{AnswerSet, BipolarAxis, ScoreEntry};

/// Expected maximum number of contributing questions per axis; every axis
/// total is divided by this before clamping.
const AXIS_DIVISOR: f64 = 4.0;

/// Normalized bipolar axis totals, each in [-1, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AxisScores([f64; 4]);

impl AxisScores {
    pub fn get(&self, axis: BipolarAxis) -> f64 {
        self.0[axis.index()]
    }

    fn add(&mut self, axis: BipolarAxis, value: f64) {
        self.0[axis.index()] += value;
    }

    pub fn entries(&self) -> Vec<ScoreEntry> {
        BipolarAxis::ALL
            .iter()
            .map(|axis| ScoreEntry {
                label: axis.label(),
                raw: self.get(*axis),
            })
            .collect()
    }
}

/// Four-letter legacy classification code, one letter per axis in fixed
/// order, drawn from {S,G}{I,C}{H,T}{A,P}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeCode(String);

impl TypeCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_scores(scores: &AxisScores) -> Self {
        let code = BipolarAxis::ALL
            .iter()
            .map(|axis| {
                if scores.get(*axis) > 0.0 {
                    axis.positive_letter()
                } else {
                    axis.negative_letter()
                }
            })
            .collect();
        Self(code)
    }
}

/// Result of folding an answer set through the legacy 4-axis model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisOutcome {
    pub scores: AxisScores,
    pub code: TypeCode,
}

/// Fold scaled answers into the four bipolar axis scores and derive the
/// legacy type code. Contributions are rescaled to [-1, 1] per answer, summed
/// per governing axis, divided by the fixed divisor, and clamped.
pub fn aggregate_axes(answers: &AnswerSet, catalog: &LegacyCatalog) -> AxisOutcome {
    let mut totals = AxisScores::default();

    for (index, question) in catalog.questions().iter().enumerate() {
        let Some(raw) = answers.get(question.id) else {
            continue;
        };

        let value = normalize_scaled(Some(raw));
        if value == 0 {
            debug!(question = %question.id, "neutral or unusable answer skipped");
            continue;
        }

        let axis = catalog.axis_for(index, question.id);
        totals.add(axis, f64::from(value) / 3.0);
    }

    let mut scores = AxisScores::default();
    for axis in BipolarAxis::ALL {
        let normalized = (totals.get(axis) / AXIS_DIVISOR).clamp(-1.0, 1.0);
        scores.add(axis, normalized);
    }

    let code = TypeCode::from_scores(&scores);
    AxisOutcome { scores, code }
}
