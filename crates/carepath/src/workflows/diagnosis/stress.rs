use serde::Serialize;

use super::answers::normalize_choice;
use super::catalog::QuestionCatalog;
use super::domain::{AnswerSet, QuestionKind, ScoreEntry, StressPattern};

/// Accumulated raw scores for the four stress-response patterns. Always
/// non-negative; option point values are never negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StressScores([f64; 4]);

impl StressScores {
    pub fn get(&self, pattern: StressPattern) -> f64 {
        self.0[pattern.index()]
    }

    pub(crate) fn add(&mut self, pattern: StressPattern, value: f64) {
        self.0[pattern.index()] += value;
    }

    pub fn entries(&self) -> Vec<ScoreEntry> {
        StressPattern::ALL
            .iter()
            .map(|pattern| ScoreEntry {
                label: pattern.label(),
                raw: self.get(*pattern),
            })
            .collect()
    }

    /// Pattern with the strictly greatest total; ties resolve to the
    /// first-declared pattern.
    pub fn dominant(&self) -> StressPattern {
        let mut best = StressPattern::ALL[0];
        for pattern in StressPattern::ALL {
            if self.get(pattern) > self.get(best) {
                best = pattern;
            }
        }
        best
    }
}

/// Static coping guidance attached to a dominant stress pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressProfile {
    pub title: &'static str,
    pub symptoms: &'static [&'static str],
    pub coping_actions: &'static [&'static str],
}

/// Result of folding the stress answer subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressOutcome {
    pub scores: StressScores,
    pub dominant: StressPattern,
    pub profile: &'static StressProfile,
}

/// Fold stress-choice answers into per-pattern totals and pick the dominant
/// pattern. Option points accumulate directly; the per-question weight field
/// only applies to behavior-style scoring, never here.
pub fn analyze_stress(answers: &AnswerSet, catalog: &QuestionCatalog) -> StressOutcome {
    let mut scores = StressScores::default();

    for question in catalog.questions() {
        if let QuestionKind::StressChoice { options } = &question.kind {
            if let Some(index) = normalize_choice(answers.get(question.id), options) {
                let option = &options[index];
                scores.add(option.pattern, option.points);
            }
        }
    }

    let dominant = scores.dominant();
    StressOutcome {
        scores,
        dominant,
        profile: profile_for(dominant),
    }
}

/// Total lookup from pattern to coping guidance; four fixed patterns, four
/// fixed profiles.
pub fn profile_for(pattern: StressPattern) -> &'static StressProfile {
    match pattern {
        StressPattern::Internalizing => &INTERNALIZING_PROFILE,
        StressPattern::Confronting => &CONFRONTING_PROFILE,
        StressPattern::Withdrawing => &WITHDRAWING_PROFILE,
        StressPattern::Diverting => &DIVERTING_PROFILE,
    }
}

static INTERNALIZING_PROFILE: StressProfile = StressProfile {
    title: "Pressure turns inward",
    symptoms: &[
        "Replaying shifts long after they end",
        "Physical tension, headaches, or poor sleep before symptoms are named",
        "Holding yourself to a harsher standard than you hold anyone else",
    ],
    coping_actions: &[
        "Book a short debrief with a trusted colleague after hard shifts",
        "Write the worry down and park it until a set review time",
        "Treat rest as a scheduled task, not a reward",
    ],
};

static CONFRONTING_PROFILE: StressProfile = StressProfile {
    title: "Pressure turns into push",
    symptoms: &[
        "Working harder and longer instead of pausing",
        "Sharper pushback in meetings and handoffs",
        "Frustration when others do not match your urgency",
    ],
    coping_actions: &[
        "Pick one battle per week and let the rest wait",
        "Schedule recovery blocks with the same discipline as overtime",
        "Route escalations through a charge nurse or manager early",
    ],
};

static WITHDRAWING_PROFILE: StressProfile = StressProfile {
    title: "Pressure pulls you back",
    symptoms: &[
        "Going quiet and keeping colleagues at a distance",
        "Declining extras you would normally volunteer for",
        "Daydreaming about calling in or transferring out",
    ],
    coping_actions: &[
        "Keep one standing social commitment even on heavy weeks",
        "Tell one trusted colleague when you feel yourself pulling away",
        "Shrink obligations instead of dropping them entirely",
    ],
};

static DIVERTING_PROFILE: StressProfile = StressProfile {
    title: "Pressure gets routed around",
    symptoms: &[
        "A suddenly packed calendar that leaves no quiet time",
        "Joking past concerns you would normally raise",
        "New hobbies or plans that crowd out recovery",
    ],
    coping_actions: &[
        "Keep one evening a week deliberately unplanned",
        "Name the stressor out loud once a week, even briefly",
        "Check whether the distraction is restoring you or just filling time",
    ],
};
