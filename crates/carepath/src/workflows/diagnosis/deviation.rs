use super::domain::{DeviationEntry, ScoreEntry};

/// Display midpoint: a raw score equal to the vector mean renders as 50.
const MIDPOINT: f64 = 50.0;
/// Display points per standard deviation of raw score.
const SPREAD: f64 = 10.0;
/// Inclusive bounds of the rendered deviation scale.
const FLOOR: u8 = 20;
const CEILING: u8 = 80;

/// Rescale a raw score vector into bounded, chart-ready deviation scores.
///
/// Uses the population standard deviation of the vector itself; a degenerate
/// all-equal vector substitutes 1.0 to avoid dividing by zero, which renders
/// every entry at the midpoint.
pub fn deviation_entries(raw: &[ScoreEntry]) -> Vec<DeviationEntry> {
    if raw.is_empty() {
        return Vec::new();
    }

    let count = raw.len() as f64;
    let mean = raw.iter().map(|entry| entry.raw).sum::<f64>() / count;
    let variance = raw
        .iter()
        .map(|entry| (entry.raw - mean).powi(2))
        .sum::<f64>()
        / count;
    let std_dev = variance.sqrt();
    let std_dev = if std_dev == 0.0 { 1.0 } else { std_dev };

    raw.iter()
        .map(|entry| {
            let scaled = (MIDPOINT + ((entry.raw - mean) / std_dev) * SPREAD).round();
            let clamped = scaled.clamp(f64::from(FLOOR), f64::from(CEILING));
            DeviationEntry {
                label: entry.label,
                raw_score: entry.raw,
                deviation_score: clamped as u8,
            }
        })
        .collect()
}
