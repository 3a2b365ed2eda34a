use super::domain::{
    BehaviorStyle, BipolarAxis, LegacyQuestion, PatternOption, Question, QuestionId, QuestionKind,
    RiasecCategory, StressPattern, StyleOption,
};

/// Read-only question bank for the current archetype model. Loaded once at
/// startup and passed to the engine by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }
}

/// Read-only question bank for the legacy 4-axis model, including the pinned
/// per-question axis overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyCatalog {
    questions: Vec<LegacyQuestion>,
    overrides: Vec<(QuestionId, BipolarAxis)>,
}

impl LegacyCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_legacy_questions(),
            overrides: AXIS_OVERRIDES.to_vec(),
        }
    }

    pub fn new(questions: Vec<LegacyQuestion>, overrides: Vec<(QuestionId, BipolarAxis)>) -> Self {
        Self {
            questions,
            overrides,
        }
    }

    pub fn questions(&self) -> &[LegacyQuestion] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&LegacyQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Governing axis for the question at `index`: the override table wins,
    /// otherwise assignment round-robins through the fixed axis order.
    pub fn axis_for(&self, index: usize, id: QuestionId) -> BipolarAxis {
        self.overrides
            .iter()
            .find(|(overridden, _)| *overridden == id)
            .map(|(_, axis)| *axis)
            .unwrap_or(BipolarAxis::ALL[index % BipolarAxis::ALL.len()])
    }
}

/// Historical axis assignments that deviate from the round-robin rule. These
/// mirror the published quiz content exactly; do not re-derive them.
const AXIS_OVERRIDES: &[(QuestionId, BipolarAxis)] = &[
    (QuestionId(103), BipolarAxis::AnalyticalPractical),
    (QuestionId(108), BipolarAxis::HumanTechnical),
    (QuestionId(110), BipolarAxis::SpecialistGeneralist),
    (QuestionId(114), BipolarAxis::AnalyticalPractical),
];

fn scaled(id: u16, prompt: &'static str, category: RiasecCategory, weight: f64) -> Question {
    Question {
        id: QuestionId(id),
        prompt,
        weight,
        kind: QuestionKind::Scaled { category },
    }
}

fn standard_questions() -> Vec<Question> {
    let mut questions = vec![
        scaled(
            1,
            "I enjoy hands-on clinical tasks like wound care and patient transfers.",
            RiasecCategory::Realistic,
            1.0,
        ),
        scaled(
            2,
            "Operating and troubleshooting medical equipment comes naturally to me.",
            RiasecCategory::Realistic,
            1.0,
        ),
        scaled(
            3,
            "I would rather be on my feet assisting than working at a desk.",
            RiasecCategory::Realistic,
            1.0,
        ),
        scaled(
            4,
            "I like digging into lab values to understand why a patient is trending.",
            RiasecCategory::Investigative,
            1.5,
        ),
        scaled(
            5,
            "I read clinical research or case studies outside of work hours.",
            RiasecCategory::Investigative,
            1.5,
        ),
        scaled(
            6,
            "Colleagues come to me to puzzle out unusual symptoms.",
            RiasecCategory::Investigative,
            1.0,
        ),
        scaled(
            7,
            "I look for creative ways to brighten a patient's day.",
            RiasecCategory::Artistic,
            1.0,
        ),
        scaled(
            8,
            "I enjoy designing patient education materials or unit displays.",
            RiasecCategory::Artistic,
            1.0,
        ),
        scaled(
            9,
            "Rigid protocols with no room for personal expression drain me.",
            RiasecCategory::Artistic,
            0.5,
        ),
        scaled(
            10,
            "Patients open up to me quickly.",
            RiasecCategory::Social,
            1.0,
        ),
        scaled(
            11,
            "Supporting a frightened family feels energizing rather than draining.",
            RiasecCategory::Social,
            1.5,
        ),
        scaled(
            12,
            "I notice when a colleague is struggling before they say anything.",
            RiasecCategory::Social,
            1.0,
        ),
        scaled(
            13,
            "I volunteer to lead huddles, committees, or unit projects.",
            RiasecCategory::Enterprising,
            1.0,
        ),
        scaled(
            14,
            "I enjoy persuading stakeholders to adopt a better process.",
            RiasecCategory::Enterprising,
            1.0,
        ),
        scaled(
            15,
            "Being trusted with more responsibility motivates me.",
            RiasecCategory::Enterprising,
            1.0,
        ),
        scaled(
            16,
            "I double-check charting until it is exactly right.",
            RiasecCategory::Conventional,
            1.0,
        ),
        scaled(
            17,
            "Clear checklists and standard work put me at ease.",
            RiasecCategory::Conventional,
            0.5,
        ),
        scaled(
            18,
            "I keep meticulous records without being asked.",
            RiasecCategory::Conventional,
            1.0,
        ),
    ];

    questions.push(Question {
        id: QuestionId(19),
        prompt: "A new graduate on your unit looks overwhelmed mid-shift. You...",
        weight: 1.0,
        kind: QuestionKind::BehaviorChoice {
            options: vec![
                StyleOption {
                    label: "Quietly pick up two of their tasks and check in afterward",
                    style: BehaviorStyle::Supporting,
                    points: 3.0,
                },
                StyleOption {
                    label: "Step in, re-prioritize their assignment, and direct the reset",
                    style: BehaviorStyle::Controlling,
                    points: 3.0,
                },
                StyleOption {
                    label: "Walk them through the routine you always use",
                    style: BehaviorStyle::Conserving,
                    points: 3.0,
                },
                StyleOption {
                    label: "Swap assignments on the fly so the load balances out",
                    style: BehaviorStyle::Adapting,
                    points: 3.0,
                },
            ],
        },
    });

    questions.push(Question {
        id: QuestionId(20),
        prompt: "Your unit adopts a new handoff format. Your first instinct is to...",
        weight: 2.0,
        kind: QuestionKind::BehaviorChoice {
            options: vec![
                StyleOption {
                    label: "Help hesitant colleagues practice it",
                    style: BehaviorStyle::Supporting,
                    points: 2.0,
                },
                StyleOption {
                    label: "Push leadership for a faster rollout",
                    style: BehaviorStyle::Controlling,
                    points: 2.0,
                },
                StyleOption {
                    label: "Keep the parts of the old format that worked",
                    style: BehaviorStyle::Conserving,
                    points: 2.0,
                },
                StyleOption {
                    label: "Try it immediately and adjust as you go",
                    style: BehaviorStyle::Adapting,
                    points: 2.0,
                },
            ],
        },
    });

    questions.push(Question {
        id: QuestionId(21),
        prompt: "In a code situation you are most often the one who...",
        weight: 1.0,
        kind: QuestionKind::BehaviorChoice {
            options: vec![
                StyleOption {
                    label: "Reassures the family and the junior staff",
                    style: BehaviorStyle::Supporting,
                    points: 2.0,
                },
                StyleOption {
                    label: "Calls the roles and runs the clock",
                    style: BehaviorStyle::Controlling,
                    points: 3.0,
                },
                StyleOption {
                    label: "Preps exactly what the protocol calls for",
                    style: BehaviorStyle::Conserving,
                    points: 2.0,
                },
                StyleOption {
                    label: "Fills whatever gap opens up",
                    style: BehaviorStyle::Adapting,
                    points: 3.0,
                },
            ],
        },
    });

    questions.push(Question {
        id: QuestionId(22),
        prompt: "When schedules change at the last minute, you usually...",
        weight: 1.0,
        kind: QuestionKind::BehaviorChoice {
            options: vec![
                StyleOption {
                    label: "Cover for whoever is hit hardest",
                    style: BehaviorStyle::Supporting,
                    points: 2.0,
                },
                StyleOption {
                    label: "Negotiate a fairer rotation with the charge nurse",
                    style: BehaviorStyle::Controlling,
                    points: 2.0,
                },
                StyleOption {
                    label: "Stick to your planned routine where possible",
                    style: BehaviorStyle::Conserving,
                    points: 2.0,
                },
                StyleOption {
                    label: "Take it as a chance to try a different unit",
                    style: BehaviorStyle::Adapting,
                    points: 2.0,
                },
            ],
        },
    });

    questions.push(Question {
        id: QuestionId(23),
        prompt: "After a brutal shift you tend to...",
        weight: 1.0,
        kind: QuestionKind::StressChoice {
            options: vec![
                PatternOption {
                    label: "Replay the shift in your head for hours",
                    pattern: StressPattern::Internalizing,
                    points: 3.0,
                },
                PatternOption {
                    label: "Channel it into working even harder",
                    pattern: StressPattern::Confronting,
                    points: 3.0,
                },
                PatternOption {
                    label: "Go quiet and keep people at a distance",
                    pattern: StressPattern::Withdrawing,
                    points: 3.0,
                },
                PatternOption {
                    label: "Distract yourself until the feeling passes",
                    pattern: StressPattern::Diverting,
                    points: 3.0,
                },
            ],
        },
    });

    questions.push(Question {
        id: QuestionId(24),
        prompt: "When staffing is short for the third week running, you...",
        weight: 2.0,
        kind: QuestionKind::StressChoice {
            options: vec![
                PatternOption {
                    label: "Blame yourself for not coping better",
                    pattern: StressPattern::Internalizing,
                    points: 3.0,
                },
                PatternOption {
                    label: "Escalate loudly until someone fixes it",
                    pattern: StressPattern::Confronting,
                    points: 3.0,
                },
                PatternOption {
                    label: "Stop volunteering for anything extra",
                    pattern: StressPattern::Withdrawing,
                    points: 3.0,
                },
                PatternOption {
                    label: "Joke it off and pick up a side hobby",
                    pattern: StressPattern::Diverting,
                    points: 3.0,
                },
            ],
        },
    });

    questions.push(Question {
        id: QuestionId(25),
        prompt: "Under sustained pressure you are most likely to...",
        weight: 1.0,
        kind: QuestionKind::StressChoice {
            options: vec![
                PatternOption {
                    label: "Notice physical symptoms before you notice the stress",
                    pattern: StressPattern::Internalizing,
                    points: 2.0,
                },
                PatternOption {
                    label: "Confront the source of the problem head on",
                    pattern: StressPattern::Confronting,
                    points: 3.0,
                },
                PatternOption {
                    label: "Fantasize about calling in",
                    pattern: StressPattern::Withdrawing,
                    points: 2.0,
                },
                PatternOption {
                    label: "Fill every evening so there is no time to think",
                    pattern: StressPattern::Diverting,
                    points: 2.0,
                },
            ],
        },
    });

    questions.push(Question {
        id: QuestionId(26),
        prompt: "Colleagues would say your tell for stress is...",
        weight: 1.0,
        kind: QuestionKind::StressChoice {
            options: vec![
                PatternOption {
                    label: "Getting harder on yourself than anyone else would be",
                    pattern: StressPattern::Internalizing,
                    points: 3.0,
                },
                PatternOption {
                    label: "Sharper pushback in meetings and huddles",
                    pattern: StressPattern::Confronting,
                    points: 2.0,
                },
                PatternOption {
                    label: "Eating lunch alone more often",
                    pattern: StressPattern::Withdrawing,
                    points: 3.0,
                },
                PatternOption {
                    label: "A suddenly very full social calendar",
                    pattern: StressPattern::Diverting,
                    points: 3.0,
                },
            ],
        },
    });

    questions
}

fn legacy(id: u16, prompt: &'static str) -> LegacyQuestion {
    LegacyQuestion {
        id: QuestionId(id),
        prompt,
    }
}

fn standard_legacy_questions() -> Vec<LegacyQuestion> {
    vec![
        legacy(101, "I would rather master one clinical specialty than rotate broadly."),
        legacy(102, "I am quick to try new care techniques before they are standard."),
        legacy(103, "The relationship side of care matters more to me than the technology."),
        legacy(104, "I want to understand the reasoning behind an order before acting on it."),
        legacy(105, "Being the unit's go-to person for one skill appeals to me."),
        legacy(106, "I get restless when a workplace resists change."),
        legacy(107, "I would choose a patient-facing role over a lab or records role."),
        legacy(108, "I prefer analyzing a problem on paper before touching anything."),
        legacy(109, "Depth of expertise impresses me more than breadth of experience."),
        legacy(110, "New tools are worth adopting even when the old ones still work."),
        legacy(111, "Comforting people is the part of care I would miss most."),
        legacy(112, "I trust data over intuition when the two disagree."),
        legacy(113, "I would accept a narrower role in exchange for deeper mastery."),
        legacy(114, "I like experimenting with how my shift routine is organized."),
        legacy(115, "Listening to patients teaches me more than any monitor."),
        legacy(116, "Hands-on practice teaches me more than theory ever has."),
    ]
}
