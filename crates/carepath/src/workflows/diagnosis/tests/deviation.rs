use crate::workflows::diagnosis::{deviation_entries, ScoreEntry};

fn series(values: &[f64]) -> Vec<ScoreEntry> {
    const LABELS: [&str; 12] = [
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
    ];
    values
        .iter()
        .enumerate()
        .map(|(index, value)| ScoreEntry {
            label: LABELS[index],
            raw: *value,
        })
        .collect()
}

#[test]
fn all_equal_scores_render_at_the_midpoint() {
    let entries = deviation_entries(&series(&[5.0, 5.0, 5.0, 5.0]));
    assert_eq!(entries.len(), 4);
    for entry in entries {
        assert_eq!(entry.deviation_score, 50);
    }
}

#[test]
fn one_standard_deviation_moves_ten_points() {
    // Two-point vector: each entry sits exactly one population standard
    // deviation from the mean.
    let entries = deviation_entries(&series(&[0.0, 10.0]));
    assert_eq!(entries[0].deviation_score, 40);
    assert_eq!(entries[1].deviation_score, 60);
}

#[test]
fn far_positive_outlier_clamps_at_the_ceiling() {
    let mut values = vec![0.0; 11];
    values.push(50.0);
    let entries = deviation_entries(&series(&values));

    assert_eq!(entries.last().expect("outlier entry").deviation_score, 80);
}

#[test]
fn far_negative_outlier_clamps_at_the_floor() {
    let mut values = vec![0.0; 11];
    values.push(-50.0);
    let entries = deviation_entries(&series(&values));

    assert_eq!(entries.last().expect("outlier entry").deviation_score, 20);
}

#[test]
fn scores_always_stay_inside_the_display_band() {
    let vectors: [&[f64]; 4] = [
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        &[-100.0, 0.0, 100.0],
        &[0.0, 0.0, 0.0, 0.0],
        &[3.5],
    ];

    for values in vectors {
        for entry in deviation_entries(&series(values)) {
            assert!((20..=80).contains(&entry.deviation_score));
        }
    }
}

#[test]
fn empty_vector_yields_no_entries() {
    assert!(deviation_entries(&[]).is_empty());
}

#[test]
fn raw_scores_are_carried_through_unchanged() {
    let entries = deviation_entries(&series(&[2.0, 4.0]));
    assert_eq!(entries[0].raw_score, 2.0);
    assert_eq!(entries[1].raw_score, 4.0);
}
