//! Priority report types with JSON export and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{RankedList, TierThresholds, DAY_NAMES};

/// A finished priority ranking plus the inputs that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Number of days in the timetable cycle.
    pub days: usize,
    /// Index of the day being prepared for.
    pub tomorrow_index: usize,
    /// Tier cut-offs used for the ranking.
    pub thresholds: TierThresholds,
    /// Ranked subjects, highest priority first.
    pub ranked: RankedList,
}

impl PriorityReport {
    pub fn new(
        days: usize,
        tomorrow_index: usize,
        thresholds: TierThresholds,
        ranked: RankedList,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            days,
            tomorrow_index,
            thresholds,
            ranked,
        }
    }

    /// Weekday name of the day being prepared for.
    pub fn tomorrow_name(&self) -> &'static str {
        DAY_NAMES
            .get(self.tomorrow_index)
            .copied()
            .unwrap_or("Unknown")
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: PriorityReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the ranking as a markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "## Priorities for {} (day {} of {})\n\n",
            self.tomorrow_name(),
            self.tomorrow_index,
            self.days
        ));

        if self.ranked.is_empty() {
            md.push_str("_No subjects scheduled for the next two days._\n");
            return md;
        }

        md.push_str("| # | Subject | Ahead | Recent | Difficulty | Score | Attention | Recommendation |\n");
        md.push_str("|---|---------|-------|--------|------------|-------|-----------|----------------|\n");
        for r in &self.ranked {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {:.2}% | {} |\n",
                r.rank,
                escape_cell(&r.subject),
                r.forward_count,
                r.backward_count,
                r.difficulty,
                r.score,
                r.normalized_score,
                r.tier.recommendation()
            ));
        }

        md
    }
}

/// Keep `|` in a subject name from splitting the table row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
