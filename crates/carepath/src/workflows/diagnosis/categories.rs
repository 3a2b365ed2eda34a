use serde::Serialize;

use super::answers::{normalize_choice, normalize_scaled};
use super::catalog::QuestionCatalog;
use super::domain::{AnswerSet, BehaviorStyle, QuestionKind, RiasecCategory, ScoreEntry};

/// Accumulated raw scores for the six RIASEC trait categories. Unbounded;
/// chart display rescales through the deviation normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RiasecScores([f64; 6]);

impl RiasecScores {
    pub fn get(&self, category: RiasecCategory) -> f64 {
        self.0[category.index()]
    }

    pub(crate) fn add(&mut self, category: RiasecCategory, value: f64) {
        self.0[category.index()] += value;
    }

    pub fn entries(&self) -> Vec<ScoreEntry> {
        RiasecCategory::ALL
            .iter()
            .map(|category| ScoreEntry {
                label: category.label(),
                raw: self.get(*category),
            })
            .collect()
    }

    /// Category with the strictly greatest total. Ties resolve to the
    /// first-declared category.
    pub fn dominant(&self) -> RiasecCategory {
        let mut best = RiasecCategory::ALL[0];
        for category in RiasecCategory::ALL {
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }
}

/// Accumulated raw scores for the four behavior styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BehaviorScores([f64; 4]);

impl BehaviorScores {
    pub fn get(&self, style: BehaviorStyle) -> f64 {
        self.0[style.index()]
    }

    pub(crate) fn add(&mut self, style: BehaviorStyle, value: f64) {
        self.0[style.index()] += value;
    }

    pub fn entries(&self) -> Vec<ScoreEntry> {
        BehaviorStyle::ALL
            .iter()
            .map(|style| ScoreEntry {
                label: style.label(),
                raw: self.get(*style),
            })
            .collect()
    }

    /// Style with the strictly greatest total; ties resolve to the
    /// first-declared style.
    pub fn dominant(&self) -> BehaviorStyle {
        let mut best = BehaviorStyle::ALL[0];
        for style in BehaviorStyle::ALL {
            if self.get(style) > self.get(best) {
                best = style;
            }
        }
        best
    }
}

/// Fold an answer set into the RIASEC and behavior-style accumulators.
///
/// Scaled questions add `value * weight` to their declared category. Behavior
/// questions add the selected option's points times the question weight to
/// the option's declared style. Stress questions are excluded here and
/// handled by the stress analyzer.
pub fn aggregate_categories(
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
) -> (RiasecScores, BehaviorScores) {
    let mut riasec = RiasecScores::default();
    let mut behavior = BehaviorScores::default();

    for question in catalog.questions() {
        match &question.kind {
            QuestionKind::Scaled { category } => {
                if answers.get(question.id).is_some() {
                    let value = normalize_scaled(answers.get(question.id));
                    riasec.add(*category, f64::from(value) * question.weight);
                }
            }
            QuestionKind::BehaviorChoice { options } => {
                if let Some(index) = normalize_choice(answers.get(question.id), options) {
                    let option = &options[index];
                    behavior.add(option.style, option.points * question.weight);
                }
            }
            QuestionKind::StressChoice { .. } => {}
        }
    }

    (riasec, behavior)
}
