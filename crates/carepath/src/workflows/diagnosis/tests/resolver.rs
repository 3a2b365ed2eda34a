use crate::workflows::diagnosis::{
    resolve_type, BehaviorStyle, PersonalityTypeId, RiasecCategory, DEFAULT_TYPE,
};

#[test]
fn resolver_is_total_over_all_combinations() {
    for category in RiasecCategory::ALL {
        for behavior in BehaviorStyle::ALL {
            let resolved = resolve_type(category, behavior);
            assert!(
                PersonalityTypeId::ALL.contains(&resolved),
                "{category:?}/{behavior:?} resolved outside the canonical set"
            );
        }
    }
}

#[test]
fn bespoke_combinations_resolve_to_their_own_archetypes() {
    assert_eq!(
        resolve_type(RiasecCategory::Investigative, BehaviorStyle::Supporting),
        PersonalityTypeId::Scholar
    );
    assert_eq!(
        resolve_type(RiasecCategory::Social, BehaviorStyle::Supporting),
        PersonalityTypeId::Harmonizer
    );
    assert_eq!(
        resolve_type(RiasecCategory::Realistic, BehaviorStyle::Adapting),
        PersonalityTypeId::Explorer
    );
}

#[test]
fn substitute_combinations_alias_existing_archetypes() {
    // No bespoke persona exists for these combinations; they collapse onto
    // an authored archetype on purpose.
    assert_eq!(
        resolve_type(RiasecCategory::Artistic, BehaviorStyle::Conserving),
        resolve_type(RiasecCategory::Realistic, BehaviorStyle::Conserving)
    );
    assert_eq!(
        resolve_type(RiasecCategory::Enterprising, BehaviorStyle::Controlling),
        PersonalityTypeId::Director
    );
    assert_eq!(
        resolve_type(RiasecCategory::Conventional, BehaviorStyle::Controlling),
        PersonalityTypeId::Planner
    );
    assert_eq!(
        resolve_type(RiasecCategory::Conventional, BehaviorStyle::Adapting),
        PersonalityTypeId::Mediator
    );
}

#[test]
fn sixteen_distinct_archetypes_are_reachable() {
    let mut seen = Vec::new();
    for category in RiasecCategory::ALL {
        for behavior in BehaviorStyle::ALL {
            let resolved = resolve_type(category, behavior);
            if !seen.contains(&resolved) {
                seen.push(resolved);
            }
        }
    }
    assert_eq!(seen.len(), PersonalityTypeId::ALL.len());
}

#[test]
fn default_archetype_is_fixed() {
    assert_eq!(DEFAULT_TYPE, PersonalityTypeId::Harmonizer);
}
