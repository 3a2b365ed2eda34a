use tracing::debug;

use super::domain::{PatternOption, RawAnswer, StyleOption};

/// Smallest and largest value a scaled answer may take.
pub const SCALE_MIN: i8 = -3;
pub const SCALE_MAX: i8 = 3;

/// Labeled choice options so behavior-style and stress-pattern questions can
/// share one matching routine.
pub(crate) trait LabeledOption {
    fn label(&self) -> &str;
}

impl LabeledOption for StyleOption {
    fn label(&self) -> &str {
        self.label
    }
}

impl LabeledOption for PatternOption {
    fn label(&self) -> &str {
        self.label
    }
}

/// Normalize a raw scaled answer to an integer in [-3, +3].
///
/// Accepts integer literals, numeric-looking strings, and named sentiment
/// tokens. Anything unrecognized, missing, or outside the scale yields the
/// neutral value 0 so downstream aggregation stays total.
pub(crate) fn normalize_scaled(raw: Option<&RawAnswer>) -> i8 {
    let Some(raw) = raw else {
        return 0;
    };

    let value = match raw {
        RawAnswer::Number(n) => *n,
        RawAnswer::Text(text) => {
            if let Some(value) = sentiment_value(text) {
                value
            } else if let Ok(value) = text.trim().parse::<i64>() {
                value
            } else {
                debug!(answer = %text, "unrecognized scaled answer, treating as neutral");
                return 0;
            }
        }
    };

    if (i64::from(SCALE_MIN)..=i64::from(SCALE_MAX)).contains(&value) {
        value as i8
    } else {
        debug!(answer = value, "scaled answer outside [-3, 3], treating as neutral");
        0
    }
}

/// Resolve a raw choice answer to the index of a declared option.
///
/// Matches by zero-based index or by label (case-insensitive). Anything else
/// is discarded and the question counts as unanswered.
pub(crate) fn normalize_choice<O: LabeledOption>(
    raw: Option<&RawAnswer>,
    options: &[O],
) -> Option<usize> {
    let raw = raw?;

    match raw {
        RawAnswer::Number(n) => {
            let index = usize::try_from(*n).ok()?;
            if index < options.len() {
                Some(index)
            } else {
                debug!(answer = n, "choice index out of range, discarding");
                None
            }
        }
        RawAnswer::Text(text) => {
            let trimmed = text.trim();
            let matched = options
                .iter()
                .position(|option| option.label().eq_ignore_ascii_case(trimmed));
            if matched.is_none() {
                debug!(answer = %text, "choice label not declared on question, discarding");
            }
            matched
        }
    }
}

fn sentiment_value(text: &str) -> Option<i64> {
    match text.trim().to_ascii_lowercase().as_str() {
        "strongly agree" | "strong agree" => Some(3),
        "agree" => Some(2),
        "somewhat agree" | "slightly agree" => Some(1),
        "neutral" | "neither" => Some(0),
        "somewhat disagree" | "slightly disagree" => Some(-1),
        "disagree" => Some(-2),
        "strongly disagree" | "strong disagree" => Some(-3),
        _ => None,
    }
}
