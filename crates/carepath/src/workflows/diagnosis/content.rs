use serde::Serialize;

use super::domain::PersonalityTypeId;

/// Descriptive marketing content attached to a resolved type. Every field is
/// always populated; downstream rendering never checks for absence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeProfile {
    pub title: &'static str,
    pub headline: &'static str,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub ideal_workplaces: &'static [&'static str],
    pub challenging_workplaces: &'static [&'static str],
    pub figure: &'static str,
    pub quote: &'static str,
}

/// Read-only mapping from type identifiers to descriptive content, plus the
/// complete fallback profile used for identifiers with no authored entry.
#[derive(Debug, Clone, Copy)]
pub struct ContentCatalog {
    archetypes: &'static [(PersonalityTypeId, TypeProfile)],
    legacy: &'static [(&'static str, TypeProfile)],
    fallback: &'static TypeProfile,
}

impl ContentCatalog {
    pub fn standard() -> Self {
        Self {
            archetypes: &ARCHETYPE_PROFILES,
            legacy: &LEGACY_PROFILES,
            fallback: &FALLBACK_PROFILE,
        }
    }

    pub fn new(
        archetypes: &'static [(PersonalityTypeId, TypeProfile)],
        legacy: &'static [(&'static str, TypeProfile)],
        fallback: &'static TypeProfile,
    ) -> Self {
        Self {
            archetypes,
            legacy,
            fallback,
        }
    }

    pub fn archetype(&self, id: PersonalityTypeId) -> Option<&'static TypeProfile> {
        self.archetypes
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, profile)| profile)
    }

    pub fn legacy_profile(&self, code: &str) -> Option<&'static TypeProfile> {
        self.legacy
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, profile)| profile)
    }

    pub fn fallback(&self) -> &'static TypeProfile {
        self.fallback
    }
}

static FALLBACK_PROFILE: TypeProfile = TypeProfile {
    title: "The All-Rounder",
    headline: "A balanced profile that adapts to almost any care setting.",
    traits: &["Balanced", "Steady", "Open-minded"],
    strengths: &[
        "Comfortable across varied assignments",
        "Keeps a level head when priorities shift",
        "Works well with every kind of teammate",
    ],
    ideal_workplaces: &["Float pools and flexible staffing programs", "Mixed acuity units"],
    challenging_workplaces: &["Roles that demand one narrow specialty from day one"],
    figure: "Clara Barton",
    quote: "You must never so much as think whether you like it or not, whether it is bearable or not; you must never think of anything except the need, and how to meet it.",
};

static ARCHETYPE_PROFILES: [(PersonalityTypeId, TypeProfile); 16] = [
    (
        PersonalityTypeId::Guardian,
        TypeProfile {
            title: "The Guardian",
            headline: "Hands-on, dependable, and happiest keeping people safe.",
            traits: &["Practical", "Protective", "Consistent"],
            strengths: &[
                "Calm, skilled hands in physically demanding care",
                "Quiet reliability colleagues plan around",
                "Spots safety risks before they become incidents",
            ],
            ideal_workplaces: &["Long-term care and rehab units", "Community health programs"],
            challenging_workplaces: &["Roles that are mostly paperwork and meetings"],
            figure: "Florence Nightingale",
            quote: "I attribute my success to this: I never gave or took any excuse.",
        },
    ),
    (
        PersonalityTypeId::Director,
        TypeProfile {
            title: "The Director",
            headline: "Decisive and hands-on; takes charge when stakes are high.",
            traits: &["Decisive", "Direct", "Action-oriented"],
            strengths: &[
                "Runs a crisis without losing the room",
                "Turns ambiguity into clear assignments",
                "Raises the tempo of an underperforming team",
            ],
            ideal_workplaces: &["Emergency departments", "Charge and house-supervisor tracks"],
            challenging_workplaces: &["Slow-moving settings with diffuse accountability"],
            figure: "Margaret Sanger",
            quote: "A free race cannot be born of slave mothers.",
        },
    ),
    (
        PersonalityTypeId::Craftsman,
        TypeProfile {
            title: "The Craftsman",
            headline: "Masters a skill completely and keeps it sharp.",
            traits: &["Meticulous", "Patient", "Skill-driven"],
            strengths: &[
                "Deep procedural expertise others borrow",
                "Repeatable quality under production pressure",
                "Teaches technique by example",
            ],
            ideal_workplaces: &["Operating rooms and procedural suites", "Dialysis and infusion centers"],
            challenging_workplaces: &["Constant rotation across unrelated specialties"],
            figure: "Virginia Apgar",
            quote: "Nobody, but nobody, is going to stop breathing on me.",
        },
    ),
    (
        PersonalityTypeId::Explorer,
        TypeProfile {
            title: "The Explorer",
            headline: "Thrives on variety and lands on their feet anywhere.",
            traits: &["Versatile", "Curious", "Unflappable"],
            strengths: &[
                "Picks up new units and systems fast",
                "Keeps perspective when plans dissolve",
                "Brings fresh practice from every assignment",
            ],
            ideal_workplaces: &["Travel and agency contracts", "Float pools across campuses"],
            challenging_workplaces: &["Years of the same assignment with no change"],
            figure: "Mary Seacole",
            quote: "Unless I am allowed to tell the story of my life in my own way, I cannot tell it at all.",
        },
    ),
    (
        PersonalityTypeId::Scholar,
        TypeProfile {
            title: "The Scholar",
            headline: "Understands the why behind every order, and shares it.",
            traits: &["Analytical", "Generous", "Thorough"],
            strengths: &[
                "Turns research into bedside practice",
                "Mentors juniors without being asked",
                "Catches the detail everyone else skimmed",
            ],
            ideal_workplaces: &["Teaching hospitals", "Clinical education and research teams"],
            challenging_workplaces: &["High-churn settings with no time to ask why"],
            figure: "Marie Curie",
            quote: "Nothing in life is to be feared, it is only to be understood.",
        },
    ),
    (
        PersonalityTypeId::Analyst,
        TypeProfile {
            title: "The Analyst",
            headline: "Follows the data wherever it leads and acts on it.",
            traits: &["Rigorous", "Skeptical", "Driven"],
            strengths: &[
                "Builds the case that changes protocol",
                "Separates signal from anecdote",
                "Holds decisions to measurable outcomes",
            ],
            ideal_workplaces: &["Quality and outcomes teams", "Critical care with heavy monitoring"],
            challenging_workplaces: &["Cultures that decide by seniority instead of evidence"],
            figure: "Elizabeth Blackwell",
            quote: "If society will not admit of woman's free development, then society must be remodeled.",
        },
    ),
    (
        PersonalityTypeId::Planner,
        TypeProfile {
            title: "The Planner",
            headline: "Thinks three shifts ahead so nothing is a surprise.",
            traits: &["Methodical", "Forward-looking", "Careful"],
            strengths: &[
                "Builds schedules and protocols that hold up",
                "Anticipates supply and staffing gaps early",
                "Documents so well that handoffs feel seamless",
            ],
            ideal_workplaces: &["Surgical scheduling and pre-op", "Case management"],
            challenging_workplaces: &["Improvised workflows that reset every day"],
            figure: "Dorothea Dix",
            quote: "In a world where there is so much to be done, I felt strongly impressed that there must be something for me to do.",
        },
    ),
    (
        PersonalityTypeId::Innovator,
        TypeProfile {
            title: "The Innovator",
            headline: "Sees the better workflow hiding inside the current one.",
            traits: &["Inventive", "Restless", "Optimistic"],
            strengths: &[
                "Prototypes fixes instead of filing complaints",
                "Bridges clinical and technical teams",
                "Comfortable being first to try a tool",
            ],
            ideal_workplaces: &["Informatics and digital health teams", "Units piloting new models of care"],
            challenging_workplaces: &["Environments where 'we have always done it this way' wins"],
            figure: "Ada Lovelace",
            quote: "That brain of mine is something more than merely mortal; as time will show.",
        },
    ),
    (
        PersonalityTypeId::Artisan,
        TypeProfile {
            title: "The Artisan",
            headline: "Brings humanity and craft into clinical routine.",
            traits: &["Expressive", "Empathetic", "Original"],
            strengths: &[
                "Makes patients feel like people, not cases",
                "Communicates hard topics with warmth",
                "Designs materials people actually read",
            ],
            ideal_workplaces: &["Pediatrics and family-centered units", "Patient education and experience teams"],
            challenging_workplaces: &["Strictly scripted, metric-only interactions"],
            figure: "Walt Whitman",
            quote: "I am large, I contain multitudes.",
        },
    ),
    (
        PersonalityTypeId::Trailblazer,
        TypeProfile {
            title: "The Trailblazer",
            headline: "Charts the new path and pulls the team along it.",
            traits: &["Bold", "Persuasive", "Energetic"],
            strengths: &[
                "Champions change others only talk about",
                "Absorbs setbacks and keeps momentum",
                "Makes the unfamiliar feel achievable",
            ],
            ideal_workplaces: &["New program launches", "Startups and mobile health services"],
            challenging_workplaces: &["Heavily layered approval chains"],
            figure: "Amelia Earhart",
            quote: "The most effective way to do it, is to do it.",
        },
    ),
    (
        PersonalityTypeId::Harmonizer,
        TypeProfile {
            title: "The Harmonizer",
            headline: "The steady center every team quietly relies on.",
            traits: &["Warm", "Attentive", "Loyal"],
            strengths: &[
                "Defuses friction before it hardens",
                "Reads what patients cannot put into words",
                "Keeps morale afloat on the hardest weeks",
            ],
            ideal_workplaces: &["Medical-surgical units with stable teams", "Hospice and palliative care"],
            challenging_workplaces: &["Competitive, siloed departments"],
            figure: "Fred Rogers",
            quote: "Anyone who does anything to help a child in his life is a hero to me.",
        },
    ),
    (
        PersonalityTypeId::Advocate,
        TypeProfile {
            title: "The Advocate",
            headline: "Speaks up for patients and colleagues who cannot.",
            traits: &["Principled", "Vocal", "Caring"],
            strengths: &[
                "Escalates concerns with evidence and tact",
                "Builds trust with overlooked patients",
                "Moves policy, not just individual cases",
            ],
            ideal_workplaces: &["Community and public health", "Ethics and patient-advocacy roles"],
            challenging_workplaces: &["Cultures that punish raised hands"],
            figure: "Eleanor Roosevelt",
            quote: "Do what you feel in your heart to be right, for you'll be criticized anyway.",
        },
    ),
    (
        PersonalityTypeId::Anchor,
        TypeProfile {
            title: "The Anchor",
            headline: "Order, rhythm, and calm in any storm of a shift.",
            traits: &["Steady", "Organized", "Devoted"],
            strengths: &[
                "Keeps the unit's routines intact under load",
                "A predictable presence patients trust",
                "Absorbs chaos without passing it on",
            ],
            ideal_workplaces: &["Skilled nursing and long-term care", "Night-shift teams"],
            challenging_workplaces: &["Perpetually restructuring organizations"],
            figure: "Edith Cavell",
            quote: "I can't stop while there are lives to be saved.",
        },
    ),
    (
        PersonalityTypeId::Mediator,
        TypeProfile {
            title: "The Mediator",
            headline: "Meets every person and problem where they are.",
            traits: &["Flexible", "Diplomatic", "Perceptive"],
            strengths: &[
                "Translates between patients, families, and teams",
                "Finds the workable middle under pressure",
                "Adjusts approach per patient without losing standards",
            ],
            ideal_workplaces: &["Care coordination and discharge planning", "Interdisciplinary teams"],
            challenging_workplaces: &["Rigid hierarchies that discourage negotiation"],
            figure: "Desmond Tutu",
            quote: "Hope is being able to see that there is light despite all of the darkness.",
        },
    ),
    (
        PersonalityTypeId::Promoter,
        TypeProfile {
            title: "The Promoter",
            headline: "Connects people to opportunities and makes both better.",
            traits: &["Outgoing", "Encouraging", "Ambitious"],
            strengths: &[
                "Recruits and energizes teams naturally",
                "Represents the unit well to outsiders",
                "Celebrates wins loudly enough to matter",
            ],
            ideal_workplaces: &["Liaison and outreach roles", "Growing clinics building their name"],
            challenging_workplaces: &["Isolated roles with little human contact"],
            figure: "Dale Carnegie",
            quote: "Success is getting what you want. Happiness is wanting what you get.",
        },
    ),
    (
        PersonalityTypeId::Organizer,
        TypeProfile {
            title: "The Organizer",
            headline: "Builds the systems that let everyone else do their jobs.",
            traits: &["Efficient", "Structured", "Dependable"],
            strengths: &[
                "Turns a messy process into a checklist that sticks",
                "Audit-ready documentation as a habit",
                "Makes resource limits stretch further",
            ],
            ideal_workplaces: &["Utilization review and compliance", "Clinic operations"],
            challenging_workplaces: &["Teams allergic to any process at all"],
            figure: "Frances Perkins",
            quote: "The door might not be opened to a woman again for a long, long time, and I had a kind of duty to other women to walk in and sit down on the chair that was offered.",
        },
    ),
];

static LEGACY_PROFILES: [(&str, TypeProfile); 8] = [
    (
        "SIHA",
        TypeProfile {
            title: "The Specialist Pathfinder",
            headline: "Deep expertise, new methods, and a people-first compass.",
            traits: &["Focused", "Progressive", "Empathetic"],
            strengths: &[
                "Pushes a specialty forward without losing the patient",
                "Evaluates new techniques on evidence, then adopts fast",
                "Explains complex care in human terms",
            ],
            ideal_workplaces: &["Specialty units adopting new protocols"],
            challenging_workplaces: &["Generalist roles that dilute their craft"],
            figure: "Marie Curie",
            quote: "One never notices what has been done; one can only see what remains to be done.",
        },
    ),
    (
        "SIHP",
        TypeProfile {
            title: "The Bedside Pioneer",
            headline: "Specialized, forward-leaning, and relentlessly practical.",
            traits: &["Skilled", "Modern", "Pragmatic"],
            strengths: &[
                "First to master the new device and teach it",
                "Keeps innovation grounded in what works on shift",
                "Reads patients as fluently as monitors",
            ],
            ideal_workplaces: &["High-acuity units with current equipment"],
            challenging_workplaces: &["Settings stuck on outdated tooling"],
            figure: "Virginia Apgar",
            quote: "Women are liberated from the time they leave the womb.",
        },
    ),
    (
        "SCHA",
        TypeProfile {
            title: "The Steadfast Expert",
            headline: "Proven methods, deep craft, and a caring analytical eye.",
            traits: &["Reliable", "Traditional", "Thoughtful"],
            strengths: &[
                "Defends standards that protect patients",
                "Institutional memory colleagues depend on",
                "Weighs change carefully and adopts what lasts",
            ],
            ideal_workplaces: &["Established programs with strong standards"],
            challenging_workplaces: &["Perpetual-pilot environments"],
            figure: "Florence Nightingale",
            quote: "Were there none who were discontented with what they have, the world would never reach anything better.",
        },
    ),
    (
        "SCTP",
        TypeProfile {
            title: "The Precision Specialist",
            headline: "One craft, proven tools, and flawless execution.",
            traits: &["Exact", "Disciplined", "Technical"],
            strengths: &[
                "Procedural quality that never drifts",
                "Calm mastery of demanding equipment",
                "Documentation other units copy",
            ],
            ideal_workplaces: &["Procedural and perioperative suites"],
            challenging_workplaces: &["Roles with no technical depth"],
            figure: "Wilhelm Roentgen",
            quote: "I didn't think; I investigated.",
        },
    ),
    (
        "GIHA",
        TypeProfile {
            title: "The Versatile Catalyst",
            headline: "Broad range, new ideas, and a warm analytical core.",
            traits: &["Adaptable", "Inventive", "Personable"],
            strengths: &[
                "Connects practices across departments",
                "Spots improvements wherever they land",
                "Builds rapport across every specialty",
            ],
            ideal_workplaces: &["Cross-functional improvement teams"],
            challenging_workplaces: &["Narrow single-specialty tracks"],
            figure: "Benjamin Franklin",
            quote: "Without continual growth and progress, such words as improvement, achievement, and success have no meaning.",
        },
    ),
    (
        "GIHP",
        TypeProfile {
            title: "The Frontline Generalist",
            headline: "Goes anywhere, tries anything, keeps people first.",
            traits: &["Broad", "Open", "Hands-on"],
            strengths: &[
                "Useful on any unit within a week",
                "Adopts whatever tool the day requires",
                "Practical warmth patients remember",
            ],
            ideal_workplaces: &["Float pools and rural generalist roles"],
            challenging_workplaces: &["Deep-specialization career ladders"],
            figure: "Mary Seacole",
            quote: "Wherever the need arises, on whatever distant shore, I ask no greater or higher privilege than to minister to it.",
        },
    ),
    (
        "GCHA",
        TypeProfile {
            title: "The Community Steward",
            headline: "Broad, steady, and devoted to the people in front of them.",
            traits: &["Grounded", "Consistent", "Kind"],
            strengths: &[
                "Keeps long-running services dependable",
                "Earns trust across generations of patients",
                "Careful judgment over quick fixes",
            ],
            ideal_workplaces: &["Community clinics and home health"],
            challenging_workplaces: &["Disruption-minded startups"],
            figure: "Clara Barton",
            quote: "The door that nobody else will go in at, seems always to swing open widely for me.",
        },
    ),
    (
        "GCTP",
        TypeProfile {
            title: "The Reliable Professional",
            headline: "Broad skills, proven methods, and work that simply gets done.",
            traits: &["Dependable", "Sensible", "Even-keeled"],
            strengths: &[
                "Competent across the whole routine board",
                "Chooses the proven path under uncertainty",
                "Unbothered by unglamorous essential work",
            ],
            ideal_workplaces: &["Stable departments with clear expectations"],
            challenging_workplaces: &["Roles demanding constant reinvention"],
            figure: "George Washington Carver",
            quote: "When you do the common things in life in an uncommon way, you will command the attention of the world.",
        },
    ),
];
