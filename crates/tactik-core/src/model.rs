//! Core data model types for tactik.
//!
//! Per-subject statistics gathered during one prioritization run, the
//! recommendation tiers, and the ranked output handed back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum number of days in a timetable (one week).
pub const MAX_DAYS: usize = 7;

/// Smallest timetable that still has a distinct "tomorrow" and "day after".
pub const MIN_DAYS: usize = 2;

/// Day names for timetable indices, Monday first.
pub const DAY_NAMES: [&str; MAX_DAYS] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Counts and scores for one distinct subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStats {
    /// Trimmed, case-sensitive subject name.
    pub name: String,
    /// Occurrences in tomorrow and the day after.
    pub forward_count: u32,
    /// Occurrences in the three-day backward window.
    pub backward_count: u32,
    /// Difficulty rating in 1..=10.
    pub difficulty: u8,
    /// Weighted score; may be negative.
    pub score: i64,
    /// Score as a percentage of the run's maximum score.
    pub normalized_score: f64,
}

impl SubjectStats {
    /// A freshly registered subject, seen once in the forward window.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            forward_count: 1,
            backward_count: 0,
            difficulty: crate::difficulty::DEFAULT_DIFFICULTY,
            score: 0,
            normalized_score: 0.0,
        }
    }
}

/// Discrete recommendation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Focus,
    Revise,
    Moderate,
    Low,
}

impl Tier {
    /// The recommendation sentence shown next to a ranked subject.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Tier::Focus => "Highly recommended! Focus intensively; important and challenging.",
            Tier::Revise => "Recommended to revise. A solid effort is needed.",
            Tier::Moderate => "Moderate priority. A quick review will suffice.",
            Tier::Low => "Low priority. Minimal effort required; you're well-prepared.",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Focus => write!(f, "focus"),
            Tier::Revise => write!(f, "revise"),
            Tier::Moderate => write!(f, "moderate"),
            Tier::Low => write!(f, "low"),
        }
    }
}

/// Normalized-score cut-offs separating the tiers.
///
/// A subject lands in the first tier whose threshold its normalized score
/// strictly exceeds; anything at or below `low` is [`Tier::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_mid")]
    pub mid: f64,
    #[serde(default = "default_low")]
    pub low: f64,
}

fn default_high() -> f64 {
    75.0
}

fn default_mid() -> f64 {
    50.0
}

fn default_low() -> f64 {
    25.0
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: default_high(),
            mid: default_mid(),
            low: default_low(),
        }
    }
}

impl TierThresholds {
    /// Map a normalized score onto a tier.
    pub fn classify(&self, normalized_score: f64) -> Tier {
        if normalized_score > self.high {
            Tier::Focus
        } else if normalized_score > self.mid {
            Tier::Revise
        } else if normalized_score > self.low {
            Tier::Moderate
        } else {
            Tier::Low
        }
    }

    /// Thresholds must be finite and strictly descending.
    pub fn is_ordered(&self) -> bool {
        [self.high, self.mid, self.low].iter().all(|t| t.is_finite())
            && self.high > self.mid
            && self.mid > self.low
    }
}

/// One entry of the final priority list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSubject {
    /// 1-based position in the list.
    pub rank: usize,
    pub subject: String,
    pub forward_count: u32,
    pub backward_count: u32,
    pub difficulty: u8,
    pub score: i64,
    pub normalized_score: f64,
    pub tier: Tier,
}

/// Ranked subjects, highest priority first.
pub type RankedList = Vec<RankedSubject>;
