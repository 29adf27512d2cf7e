//! Planner configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultyMap;
use crate::model::{TierThresholds, MAX_DAYS, MIN_DAYS};
use crate::prioritizer::PrioritizerConfig;

/// Top-level tactik configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TactikConfig {
    /// Largest number of days a timetable may have.
    #[serde(default = "default_max_days")]
    pub max_days: usize,
    /// Maximum distinct subjects per plan (unset = unbounded).
    #[serde(default)]
    pub max_subjects: Option<usize>,
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Tier cut-offs on the normalized score.
    #[serde(default)]
    pub thresholds: TierThresholds,
    /// Preset difficulty ratings keyed by subject.
    #[serde(default)]
    pub difficulty: HashMap<String, i64>,
}

fn default_max_days() -> usize {
    MAX_DAYS
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for TactikConfig {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
            max_subjects: None,
            default_format: default_format(),
            thresholds: TierThresholds::default(),
            difficulty: HashMap::new(),
        }
    }
}

impl TactikConfig {
    /// Reject settings the prioritizer cannot work with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (MIN_DAYS..=MAX_DAYS).contains(&self.max_days),
            "max_days must be between {MIN_DAYS} and {MAX_DAYS}, got {}",
            self.max_days
        );
        anyhow::ensure!(
            self.max_subjects != Some(0),
            "max_subjects must be at least 1 when set"
        );
        anyhow::ensure!(
            self.thresholds.is_ordered(),
            "thresholds must be strictly descending (high > mid > low), got {}/{}/{}",
            self.thresholds.high,
            self.thresholds.mid,
            self.thresholds.low
        );
        Ok(())
    }

    pub fn prioritizer_config(&self) -> PrioritizerConfig {
        PrioritizerConfig {
            max_days: self.max_days,
            max_subjects: self.max_subjects,
            thresholds: self.thresholds,
        }
    }

    /// Preset ratings from the `[difficulty]` table.
    pub fn difficulty_map(&self) -> DifficultyMap {
        self.difficulty
            .iter()
            .map(|(subject, rating)| (subject.clone(), *rating))
            .collect()
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `tactik.toml` in the current directory
/// 2. `~/.config/tactik/config.toml`
///
/// Environment variable override: `TACTIK_MAX_SUBJECTS`.
pub fn load_config_from(path: Option<&Path>) -> Result<TactikConfig> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let max_subjects = std::env::var("TACTIK_MAX_SUBJECTS").ok();
    load_config_with(path, home.as_deref(), max_subjects.as_deref())
}

/// Config loading with the home directory and `TACTIK_MAX_SUBJECTS` value
/// supplied by the caller.
fn load_config_with(
    path: Option<&Path>,
    home: Option<&Path>,
    max_subjects: Option<&str>,
) -> Result<TactikConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("tactik.toml");
        if local.exists() {
            Some(local)
        } else {
            home.map(global_config_path).filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TactikConfig::default(),
    };

    if let Some(value) = max_subjects {
        let max = value
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid TACTIK_MAX_SUBJECTS: '{value}'"))?;
        config.max_subjects = Some(max);
    }

    config.validate()?;
    tracing::debug!(
        "loaded config from {}",
        config_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".into())
    );

    Ok(config)
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config_str(content: &str) -> Result<TactikConfig> {
    let config: TactikConfig = toml::from_str(content)?;
    Ok(config)
}

fn global_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("tactik").join("config.toml")
}
