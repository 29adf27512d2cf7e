//! Central prioritization pipeline.
//!
//! Parse → aggregate → collect difficulty → score → normalize → rank. Each
//! call starts from an empty registry and keeps nothing afterwards.

use std::collections::HashMap;

use crate::difficulty::{sanitize_difficulty, DifficultySource};
use crate::error::PlanError;
use crate::model::{RankedList, RankedSubject, SubjectStats, TierThresholds, MAX_DAYS, MIN_DAYS};
use crate::parser::{parse_day, Timetable};
use crate::scoring::apply_scores;

/// Day offsets from tomorrow that make up the forward window.
pub const FORWARD_WINDOW: [usize; 2] = [0, 1];

/// Day offsets counted backwards from tomorrow for the backward window.
pub const BACKWARD_WINDOW: [usize; 3] = [0, 1, 2];

/// Configuration for the prioritizer.
#[derive(Debug, Clone, PartialEq)]
pub struct PrioritizerConfig {
    /// Largest accepted day count.
    pub max_days: usize,
    /// Maximum distinct subjects per run (None = unbounded).
    pub max_subjects: Option<usize>,
    /// Tier cut-offs on the normalized score.
    pub thresholds: TierThresholds,
}

impl Default for PrioritizerConfig {
    fn default() -> Self {
        Self {
            max_days: MAX_DAYS,
            max_subjects: None,
            thresholds: TierThresholds::default(),
        }
    }
}

/// Distinct subjects seen in the forward window, in registration order.
struct Registry {
    stats: Vec<SubjectStats>,
    index: HashMap<String, usize>,
    capacity: Option<usize>,
}

impl Registry {
    fn new(capacity: Option<usize>) -> Self {
        Self {
            stats: Vec::new(),
            index: HashMap::new(),
            capacity,
        }
    }

    fn record_forward(&mut self, subject: &str) -> Result<(), PlanError> {
        if let Some(&i) = self.index.get(subject) {
            self.stats[i].forward_count += 1;
            return Ok(());
        }

        if let Some(capacity) = self.capacity {
            if self.stats.len() >= capacity {
                return Err(PlanError::CapacityExceeded {
                    capacity,
                    subject: subject.to_string(),
                });
            }
        }

        self.index.insert(subject.to_string(), self.stats.len());
        self.stats.push(SubjectStats::new(subject));
        Ok(())
    }

    /// Subjects not already registered are ignored.
    fn record_backward(&mut self, subject: &str) {
        if let Some(&i) = self.index.get(subject) {
            self.stats[i].backward_count += 1;
        }
    }
}

/// Count forward and backward occurrences for the subjects of the forward
/// window.
///
/// `days` must already be validated against `timetable`.
pub fn aggregate(
    timetable: &[String],
    days: usize,
    tomorrow: usize,
    max_subjects: Option<usize>,
) -> Result<Vec<SubjectStats>, PlanError> {
    let mut registry = Registry::new(max_subjects);

    for offset in FORWARD_WINDOW {
        let day = (tomorrow + offset) % days;
        for subject in parse_day(&timetable[day]) {
            registry.record_forward(subject)?;
        }
    }

    for offset in BACKWARD_WINDOW {
        let day = (tomorrow + days - offset) % days;
        for subject in parse_day(&timetable[day]) {
            registry.record_backward(subject);
        }
    }

    Ok(registry.stats)
}

/// Stable sort by normalized score, highest first, and assign tiers.
///
/// Equal scores keep registration order.
pub fn rank(mut stats: Vec<SubjectStats>, thresholds: &TierThresholds) -> RankedList {
    stats.sort_by(|a, b| b.normalized_score.total_cmp(&a.normalized_score));

    stats
        .into_iter()
        .enumerate()
        .map(|(i, s)| RankedSubject {
            rank: i + 1,
            tier: thresholds.classify(s.normalized_score),
            subject: s.name,
            forward_count: s.forward_count,
            backward_count: s.backward_count,
            difficulty: s.difficulty,
            score: s.score,
            normalized_score: s.normalized_score,
        })
        .collect()
}

/// Ranks tomorrow's subjects.
#[derive(Debug, Clone, Default)]
pub struct Prioritizer {
    config: PrioritizerConfig,
}

impl Prioritizer {
    pub fn new(config: PrioritizerConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline for one timetable.
    ///
    /// `source` is asked once per distinct forward-window subject, in
    /// registration order. Day arguments are checked before anything is
    /// parsed or any rating is requested.
    pub fn prioritize<D>(
        &self,
        timetable: &[String],
        days: usize,
        tomorrow: usize,
        source: &mut D,
    ) -> Result<RankedList, PlanError>
    where
        D: DifficultySource + ?Sized,
    {
        self.check_days(timetable, days, tomorrow)?;

        let mut stats = aggregate(timetable, days, tomorrow, self.config.max_subjects)?;
        tracing::debug!(
            "registered {} subject(s) for day {tomorrow} of {days}",
            stats.len()
        );

        for s in stats.iter_mut() {
            let raw = source.difficulty(&s.name);
            s.difficulty = sanitize_difficulty(raw);
            if i64::from(s.difficulty) != raw {
                tracing::warn!(
                    "difficulty {raw} for '{}' is outside 1..=10, using {}",
                    s.name,
                    s.difficulty
                );
            }
        }

        if let Some(max_score) = apply_scores(&mut stats) {
            tracing::debug!("maximum score this run: {max_score}");
        }

        Ok(rank(stats, &self.config.thresholds))
    }

    /// [`prioritize`](Self::prioritize) over a loaded [`Timetable`].
    pub fn plan<D>(
        &self,
        timetable: &Timetable,
        tomorrow: usize,
        source: &mut D,
    ) -> Result<RankedList, PlanError>
    where
        D: DifficultySource + ?Sized,
    {
        self.prioritize(&timetable.days, timetable.len(), tomorrow, source)
    }

    fn check_days(&self, timetable: &[String], days: usize, tomorrow: usize) -> Result<(), PlanError> {
        if days < MIN_DAYS || days > self.config.max_days || days != timetable.len() {
            return Err(PlanError::InvalidDayCount {
                days,
                entries: timetable.len(),
                min: MIN_DAYS,
                max: self.config.max_days,
            });
        }
        if tomorrow >= days {
            return Err(PlanError::InvalidDayIndex {
                index: tomorrow,
                days,
            });
        }
        Ok(())
    }
}
