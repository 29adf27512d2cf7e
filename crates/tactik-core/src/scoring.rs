//! Priority scoring and normalization.
//!
//! `score = forward * 2 - backward + difficulty`. Upcoming appearances count
//! double, recent coverage is subtracted, and difficulty is added as-is.

use crate::model::SubjectStats;

/// Weight applied to each appearance in the forward window.
pub const FORWARD_WEIGHT: i64 = 2;

/// Weight subtracted for each appearance in the backward window.
pub const BACKWARD_WEIGHT: i64 = 1;

/// Raw priority score for one subject. May be negative.
pub fn compute_score(forward_count: u32, backward_count: u32, difficulty: u8) -> i64 {
    i64::from(forward_count) * FORWARD_WEIGHT - i64::from(backward_count) * BACKWARD_WEIGHT
        + i64::from(difficulty)
}

/// Express `score` as a percentage of `max_score`.
///
/// A non-positive maximum would divide by zero or flip signs, so every
/// subject normalizes to 0 in that case.
pub fn normalize(score: i64, max_score: i64) -> f64 {
    if max_score <= 0 {
        return 0.0;
    }
    score as f64 / max_score as f64 * 100.0
}

/// Fill in `score` and `normalized_score` for every subject.
///
/// Returns the maximum raw score, or `None` for an empty slice.
pub fn apply_scores(stats: &mut [SubjectStats]) -> Option<i64> {
    for s in stats.iter_mut() {
        s.score = compute_score(s.forward_count, s.backward_count, s.difficulty);
    }

    let max_score = stats.iter().map(|s| s.score).max()?;
    for s in stats.iter_mut() {
        s.normalized_score = normalize(s.score, max_score);
    }

    Some(max_score)
}
