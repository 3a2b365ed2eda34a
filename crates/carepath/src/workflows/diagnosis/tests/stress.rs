use super::common::*;
use crate::workflows::diagnosis::{
    analyze_stress, profile_for, AnswerSet, QuestionCatalog, RawAnswer, StressPattern,
};

#[test]
fn stress_points_accumulate_without_question_weight() {
    let catalog = QuestionCatalog::standard();
    // Question 24 carries weight 2.0, but stress scoring pins the historical
    // behavior of summing option points alone: 3.0, not 6.0.
    let outcome = analyze_stress(&answers_of(&[(24, RawAnswer::Number(0))]), &catalog);

    assert_eq!(outcome.scores.get(StressPattern::Internalizing), 3.0);
}

#[test]
fn dominant_pattern_wins_by_accumulated_points() {
    let catalog = QuestionCatalog::standard();
    let outcome = analyze_stress(
        &answers_of(&[
            (23, RawAnswer::Number(2)),
            (24, RawAnswer::Number(2)),
            (25, RawAnswer::Number(1)),
        ]),
        &catalog,
    );

    assert_eq!(outcome.scores.get(StressPattern::Withdrawing), 6.0);
    assert_eq!(outcome.scores.get(StressPattern::Confronting), 3.0);
    assert_eq!(outcome.dominant, StressPattern::Withdrawing);
}

#[test]
fn four_way_tie_resolves_to_first_declared_pattern() {
    let catalog = QuestionCatalog::standard();
    // One 3-point option per pattern: {3, 3, 3, 3}.
    let outcome = analyze_stress(
        &answers_of(&[
            (23, RawAnswer::Number(0)),
            (24, RawAnswer::Number(2)),
            (25, RawAnswer::Number(1)),
            (26, RawAnswer::Number(3)),
        ]),
        &catalog,
    );

    for pattern in StressPattern::ALL {
        assert_eq!(outcome.scores.get(pattern), 3.0);
    }
    assert_eq!(outcome.dominant, StressPattern::Internalizing);
}

#[test]
fn empty_answers_still_produce_a_profile() {
    let catalog = QuestionCatalog::standard();
    let outcome = analyze_stress(&AnswerSet::new(), &catalog);

    assert_eq!(outcome.dominant, StressPattern::Internalizing);
    assert!(!outcome.profile.title.is_empty());
    assert!(!outcome.profile.symptoms.is_empty());
    assert!(!outcome.profile.coping_actions.is_empty());
}

#[test]
fn profile_lookup_is_total_over_all_patterns() {
    for pattern in StressPattern::ALL {
        let profile = profile_for(pattern);
        assert!(!profile.title.is_empty());
        assert!(!profile.symptoms.is_empty());
        assert!(!profile.coping_actions.is_empty());
    }
}
