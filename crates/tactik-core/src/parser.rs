//! Timetable parser.
//!
//! Splits day strings into subject tokens, loads timetables from text files
//! (one line per day) and validates them.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::MIN_DAYS;

/// Split one day's subject list into trimmed tokens.
///
/// Tokens are separated by commas. Surrounding whitespace is trimmed and
/// empty tokens are skipped. Order and duplicates are preserved.
pub fn parse_day(day: &str) -> Vec<&str> {
    day.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Re-join a day's tokens with `", "`.
///
/// The result parses back to the same tokens.
pub fn canonicalize(day: &str) -> String {
    parse_day(day).join(", ")
}

/// An ordered list of raw day strings, index 0 being Monday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Raw subject list for each day.
    pub days: Vec<String>,
    /// Lines dropped because the source had more days than allowed.
    #[serde(default)]
    pub truncated_lines: usize,
}

impl Timetable {
    /// Build a timetable from already-collected day strings.
    pub fn from_days<I, S>(days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            truncated_lines: 0,
        }
    }

    /// Number of days in the cycle.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Distinct subjects across the whole timetable, in first-seen order.
    pub fn distinct_subjects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.days
            .iter()
            .flat_map(|d| parse_day(d))
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

/// Load a timetable text file, one line per day.
pub fn parse_timetable_file(path: &Path, max_days: usize) -> Result<Timetable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read timetable file: {}", path.display()))?;

    Ok(parse_timetable_str(&content, max_days))
}

/// Parse timetable text (useful for testing).
///
/// Line endings are stripped, a blank line is a day without subjects, and
/// lines past `max_days` are dropped with a warning.
pub fn parse_timetable_str(content: &str, max_days: usize) -> Timetable {
    let mut days = Vec::new();
    let mut truncated_lines = 0usize;

    for line in content.lines() {
        if days.len() >= max_days {
            truncated_lines += 1;
            continue;
        }
        days.push(line.to_string());
    }

    if truncated_lines > 0 {
        tracing::warn!(
            "timetable has more days than supported ({max_days}), ignoring {truncated_lines} extra line(s)"
        );
    }

    Timetable {
        days,
        truncated_lines,
    }
}

/// A warning from timetable validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The day index (if applicable).
    pub day: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a timetable for common issues.
pub fn validate_timetable(
    timetable: &Timetable,
    max_days: usize,
    max_subjects: Option<usize>,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if timetable.len() < MIN_DAYS || timetable.len() > max_days {
        warnings.push(ValidationWarning {
            day: None,
            message: format!(
                "timetable has {} day(s); between {MIN_DAYS} and {max_days} are needed",
                timetable.len()
            ),
        });
    }

    if timetable.truncated_lines > 0 {
        warnings.push(ValidationWarning {
            day: None,
            message: format!(
                "{} line(s) beyond the {max_days}-day limit were ignored",
                timetable.truncated_lines
            ),
        });
    }

    for (index, day) in timetable.days.iter().enumerate() {
        let tokens = parse_day(day);
        if tokens.is_empty() {
            warnings.push(ValidationWarning {
                day: Some(index),
                message: "no subjects listed".into(),
            });
            continue;
        }

        // Repeats still count once per appearance, so flag them
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for token in tokens {
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }
        for subject in order {
            let n = counts[subject];
            if n > 1 {
                warnings.push(ValidationWarning {
                    day: Some(index),
                    message: format!("'{subject}' is listed {n} times"),
                });
            }
        }
    }

    if let Some(capacity) = max_subjects {
        let distinct = timetable.distinct_subjects().len();
        if distinct > capacity {
            warnings.push(ValidationWarning {
                day: None,
                message: format!(
                    "{distinct} distinct subjects exceed the configured capacity of {capacity}"
                ),
            });
        }
    }

    warnings
}
