use tracing::debug;

use super::domain::{BehaviorStyle, PersonalityTypeId, RiasecCategory};

/// Identifier returned for any category/behavior combination missing from the
/// table. A missing entry is the designed fallback path, not an error.
pub const DEFAULT_TYPE: PersonalityTypeId = PersonalityTypeId::Harmonizer;

/// Static combination table: 6 categories x 4 behavior styles onto the 16
/// canonical archetypes. Several combinations deliberately substitute an
/// existing archetype because no bespoke persona was authored for them.
const COMBINATION_TABLE: &[((RiasecCategory, BehaviorStyle), PersonalityTypeId)] = &[
    (
        (RiasecCategory::Realistic, BehaviorStyle::Supporting),
        PersonalityTypeId::Guardian,
    ),
    (
        (RiasecCategory::Realistic, BehaviorStyle::Controlling),
        PersonalityTypeId::Director,
    ),
    (
        (RiasecCategory::Realistic, BehaviorStyle::Conserving),
        PersonalityTypeId::Craftsman,
    ),
    (
        (RiasecCategory::Realistic, BehaviorStyle::Adapting),
        PersonalityTypeId::Explorer,
    ),
    (
        (RiasecCategory::Investigative, BehaviorStyle::Supporting),
        PersonalityTypeId::Scholar,
    ),
    (
        (RiasecCategory::Investigative, BehaviorStyle::Controlling),
        PersonalityTypeId::Analyst,
    ),
    (
        (RiasecCategory::Investigative, BehaviorStyle::Conserving),
        PersonalityTypeId::Planner,
    ),
    (
        (RiasecCategory::Investigative, BehaviorStyle::Adapting),
        PersonalityTypeId::Innovator,
    ),
    (
        (RiasecCategory::Artistic, BehaviorStyle::Supporting),
        PersonalityTypeId::Artisan,
    ),
    (
        (RiasecCategory::Artistic, BehaviorStyle::Controlling),
        PersonalityTypeId::Trailblazer,
    ),
    // substitute: no bespoke artistic/conserving persona
    (
        (RiasecCategory::Artistic, BehaviorStyle::Conserving),
        PersonalityTypeId::Craftsman,
    ),
    // substitute: no bespoke artistic/adapting persona
    (
        (RiasecCategory::Artistic, BehaviorStyle::Adapting),
        PersonalityTypeId::Explorer,
    ),
    (
        (RiasecCategory::Social, BehaviorStyle::Supporting),
        PersonalityTypeId::Harmonizer,
    ),
    (
        (RiasecCategory::Social, BehaviorStyle::Controlling),
        PersonalityTypeId::Advocate,
    ),
    (
        (RiasecCategory::Social, BehaviorStyle::Conserving),
        PersonalityTypeId::Anchor,
    ),
    (
        (RiasecCategory::Social, BehaviorStyle::Adapting),
        PersonalityTypeId::Mediator,
    ),
    (
        (RiasecCategory::Enterprising, BehaviorStyle::Supporting),
        PersonalityTypeId::Promoter,
    ),
    // substitute: shares the realistic/controlling persona
    (
        (RiasecCategory::Enterprising, BehaviorStyle::Controlling),
        PersonalityTypeId::Director,
    ),
    (
        (RiasecCategory::Enterprising, BehaviorStyle::Conserving),
        PersonalityTypeId::Organizer,
    ),
    // substitute: shares the artistic/controlling persona
    (
        (RiasecCategory::Enterprising, BehaviorStyle::Adapting),
        PersonalityTypeId::Trailblazer,
    ),
    // substitute: shares the social/conserving persona
    (
        (RiasecCategory::Conventional, BehaviorStyle::Supporting),
        PersonalityTypeId::Anchor,
    ),
    // substitute: shares the investigative/conserving persona
    (
        (RiasecCategory::Conventional, BehaviorStyle::Controlling),
        PersonalityTypeId::Planner,
    ),
    // substitute: shares the enterprising/conserving persona
    (
        (RiasecCategory::Conventional, BehaviorStyle::Conserving),
        PersonalityTypeId::Organizer,
    ),
    // substitute: shares the social/adapting persona
    (
        (RiasecCategory::Conventional, BehaviorStyle::Adapting),
        PersonalityTypeId::Mediator,
    ),
];

/// Map a dominant category/behavior combination to its archetype. Never
/// fails; combinations absent from the table resolve to [`DEFAULT_TYPE`].
pub fn resolve_type(category: RiasecCategory, behavior: BehaviorStyle) -> PersonalityTypeId {
    COMBINATION_TABLE
        .iter()
        .find(|((c, b), _)| *c == category && *b == behavior)
        .map(|(_, id)| *id)
        .unwrap_or_else(|| {
            debug!(
                category = category.label(),
                behavior = behavior.label(),
                "combination missing from table, using default archetype"
            );
            DEFAULT_TYPE
        })
}
