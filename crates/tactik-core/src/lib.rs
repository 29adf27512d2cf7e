//! tactik-core — Timetable parsing, scoring and ranking.
//!
//! This crate turns a weekly timetable and per-subject difficulty ratings
//! into a ranked list of what to study for tomorrow.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod model;
pub mod parser;
pub mod prioritizer;
pub mod report;
pub mod scoring;

pub use difficulty::{DifficultyMap, DifficultySource};
pub use error::PlanError;
pub use model::{RankedList, RankedSubject, Tier, TierThresholds};
pub use parser::Timetable;
pub use prioritizer::{Prioritizer, PrioritizerConfig};
