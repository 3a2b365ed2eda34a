use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u16);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Raw answer token as collected by the quiz UI. Scaled questions arrive as
/// integers, numeric-looking strings, or named sentiment tokens; choice
/// questions arrive as an option label or zero-based index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(i64),
    Text(String),
}

/// The respondent's submitted answers keyed by question id. May be partial;
/// unanswered questions contribute nothing. Immutable once handed to the
/// engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, RawAnswer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: QuestionId, answer: RawAnswer) {
        self.answers.insert(id, answer);
    }

    pub fn get(&self, id: QuestionId) -> Option<&RawAnswer> {
        self.answers.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.answers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl From<BTreeMap<u16, RawAnswer>> for AnswerSet {
    fn from(raw: BTreeMap<u16, RawAnswer>) -> Self {
        Self {
            answers: raw
                .into_iter()
                .map(|(id, answer)| (QuestionId(id), answer))
                .collect(),
        }
    }
}

impl FromIterator<(QuestionId, RawAnswer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, RawAnswer)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// The six unipolar trait categories of the current scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiasecCategory {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecCategory {
    /// Declaration order doubles as the tie-break order for dominant
    /// selection; it must never depend on map iteration order.
    pub const ALL: [RiasecCategory; 6] = [
        RiasecCategory::Realistic,
        RiasecCategory::Investigative,
        RiasecCategory::Artistic,
        RiasecCategory::Social,
        RiasecCategory::Enterprising,
        RiasecCategory::Conventional,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RiasecCategory::Realistic => "Realistic",
            RiasecCategory::Investigative => "Investigative",
            RiasecCategory::Artistic => "Artistic",
            RiasecCategory::Social => "Social",
            RiasecCategory::Enterprising => "Enterprising",
            RiasecCategory::Conventional => "Conventional",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            RiasecCategory::Realistic => 0,
            RiasecCategory::Investigative => 1,
            RiasecCategory::Artistic => 2,
            RiasecCategory::Social => 3,
            RiasecCategory::Enterprising => 4,
            RiasecCategory::Conventional => 5,
        }
    }
}

/// The four categorical response tendencies of the current scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorStyle {
    Supporting,
    Controlling,
    Conserving,
    Adapting,
}

impl BehaviorStyle {
    pub const ALL: [BehaviorStyle; 4] = [
        BehaviorStyle::Supporting,
        BehaviorStyle::Controlling,
        BehaviorStyle::Conserving,
        BehaviorStyle::Adapting,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            BehaviorStyle::Supporting => "Supporting",
            BehaviorStyle::Controlling => "Controlling",
            BehaviorStyle::Conserving => "Conserving",
            BehaviorStyle::Adapting => "Adapting",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            BehaviorStyle::Supporting => 0,
            BehaviorStyle::Controlling => 1,
            BehaviorStyle::Conserving => 2,
            BehaviorStyle::Adapting => 3,
        }
    }
}

/// The four stress-response patterns analyzed alongside the current model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressPattern {
    Internalizing,
    Confronting,
    Withdrawing,
    Diverting,
}

impl StressPattern {
    pub const ALL: [StressPattern; 4] = [
        StressPattern::Internalizing,
        StressPattern::Confronting,
        StressPattern::Withdrawing,
        StressPattern::Diverting,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            StressPattern::Internalizing => "Internalizing",
            StressPattern::Confronting => "Confronting",
            StressPattern::Withdrawing => "Withdrawing",
            StressPattern::Diverting => "Diverting",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            StressPattern::Internalizing => 0,
            StressPattern::Confronting => 1,
            StressPattern::Withdrawing => 2,
            StressPattern::Diverting => 3,
        }
    }
}

/// One of the four bipolar dimensions of the legacy scoring model. Each axis
/// maps a positive total to its first letter and a zero or negative total to
/// its second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BipolarAxis {
    SpecialistGeneralist,
    InnovativeConservative,
    HumanTechnical,
    AnalyticalPractical,
}

impl BipolarAxis {
    /// Fixed order used for round-robin assignment and type-code letters.
    pub const ALL: [BipolarAxis; 4] = [
        BipolarAxis::SpecialistGeneralist,
        BipolarAxis::InnovativeConservative,
        BipolarAxis::HumanTechnical,
        BipolarAxis::AnalyticalPractical,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            BipolarAxis::SpecialistGeneralist => "Specialist/Generalist",
            BipolarAxis::InnovativeConservative => "Innovative/Conservative",
            BipolarAxis::HumanTechnical => "Human/Technical",
            BipolarAxis::AnalyticalPractical => "Analytical/Practical",
        }
    }

    pub const fn positive_letter(self) -> char {
        match self {
            BipolarAxis::SpecialistGeneralist => 'S',
            BipolarAxis::InnovativeConservative => 'I',
            BipolarAxis::HumanTechnical => 'H',
            BipolarAxis::AnalyticalPractical => 'A',
        }
    }

    pub const fn negative_letter(self) -> char {
        match self {
            BipolarAxis::SpecialistGeneralist => 'G',
            BipolarAxis::InnovativeConservative => 'C',
            BipolarAxis::HumanTechnical => 'T',
            BipolarAxis::AnalyticalPractical => 'P',
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            BipolarAxis::SpecialistGeneralist => 0,
            BipolarAxis::InnovativeConservative => 1,
            BipolarAxis::HumanTechnical => 2,
            BipolarAxis::AnalyticalPractical => 3,
        }
    }
}

/// One of the sixteen canonical archetype identifiers of the current model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTypeId {
    Guardian,
    Director,
    Craftsman,
    Explorer,
    Scholar,
    Analyst,
    Planner,
    Innovator,
    Artisan,
    Trailblazer,
    Harmonizer,
    Advocate,
    Anchor,
    Mediator,
    Promoter,
    Organizer,
}

impl PersonalityTypeId {
    pub const ALL: [PersonalityTypeId; 16] = [
        PersonalityTypeId::Guardian,
        PersonalityTypeId::Director,
        PersonalityTypeId::Craftsman,
        PersonalityTypeId::Explorer,
        PersonalityTypeId::Scholar,
        PersonalityTypeId::Analyst,
        PersonalityTypeId::Planner,
        PersonalityTypeId::Innovator,
        PersonalityTypeId::Artisan,
        PersonalityTypeId::Trailblazer,
        PersonalityTypeId::Harmonizer,
        PersonalityTypeId::Advocate,
        PersonalityTypeId::Anchor,
        PersonalityTypeId::Mediator,
        PersonalityTypeId::Promoter,
        PersonalityTypeId::Organizer,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PersonalityTypeId::Guardian => "guardian",
            PersonalityTypeId::Director => "director",
            PersonalityTypeId::Craftsman => "craftsman",
            PersonalityTypeId::Explorer => "explorer",
            PersonalityTypeId::Scholar => "scholar",
            PersonalityTypeId::Analyst => "analyst",
            PersonalityTypeId::Planner => "planner",
            PersonalityTypeId::Innovator => "innovator",
            PersonalityTypeId::Artisan => "artisan",
            PersonalityTypeId::Trailblazer => "trailblazer",
            PersonalityTypeId::Harmonizer => "harmonizer",
            PersonalityTypeId::Advocate => "advocate",
            PersonalityTypeId::Anchor => "anchor",
            PersonalityTypeId::Mediator => "mediator",
            PersonalityTypeId::Promoter => "promoter",
            PersonalityTypeId::Organizer => "organizer",
        }
    }
}

/// Which scoring model produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVersion {
    Archetype,
    LegacyAxis,
}

impl ModelVersion {
    pub const fn label(self) -> &'static str {
        match self {
            ModelVersion::Archetype => "archetype",
            ModelVersion::LegacyAxis => "legacy_axis",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "archetype" | "current" => Some(ModelVersion::Archetype),
            "legacy" | "legacy_axis" | "axis" => Some(ModelVersion::LegacyAxis),
            _ => None,
        }
    }
}

/// A selectable option on a behavior-style question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleOption {
    pub label: &'static str,
    pub style: BehaviorStyle,
    pub points: f64,
}

/// A selectable option on a stress-pattern question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternOption {
    pub label: &'static str,
    pub pattern: StressPattern,
    pub points: f64,
}

/// How a question is answered and which accumulator it feeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum QuestionKind {
    Scaled { category: RiasecCategory },
    BehaviorChoice { options: Vec<StyleOption> },
    StressChoice { options: Vec<PatternOption> },
}

/// A current-model catalog question. Scaled questions take an integer in
/// [-3, +3]; choice questions take exactly one declared option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub weight: f64,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// A legacy-model catalog question; always scaled, axis derived from catalog
/// position unless overridden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyQuestion {
    pub id: QuestionId,
    pub prompt: &'static str,
}

/// One labeled raw score inside a score vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub label: &'static str,
    pub raw: f64,
}

/// Chart-ready rescaling of one raw score: 50 is average, 10 points per
/// standard deviation, clamped to [20, 80].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationEntry {
    pub label: &'static str,
    pub raw_score: f64,
    pub deviation_score: u8,
}

/// Pass-through lead-routing metadata captured with a submission. Presence
/// only; never validated or interpreted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadDetails {
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}
