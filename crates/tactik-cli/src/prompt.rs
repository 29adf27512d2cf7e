//! Interactive input: timetable entry and difficulty prompts.
//!
//! Prompts are written to the given writer (stderr in the binary) so that
//! stdout only carries the ranking.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use tactik_core::difficulty::{DifficultyMap, DifficultySource, DEFAULT_DIFFICULTY};
use tactik_core::model::{DAY_NAMES, MIN_DAYS};
use tactik_core::Timetable;

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line without its line ending.
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }

    /// Print a line of text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Ask for a day count and one subject list per day, Monday first.
    pub fn read_timetable(&mut self, max_days: usize) -> Result<Timetable> {
        let answer = self
            .ask(&format!("Enter the number of days (max {max_days}): "))?
            .context("no day count given")?;
        let days: usize = answer
            .trim()
            .parse()
            .with_context(|| format!("invalid number of days: '{}'", answer.trim()))?;
        anyhow::ensure!(
            (MIN_DAYS..=max_days).contains(&days),
            "number of days must be between {MIN_DAYS} and {max_days}, got {days}"
        );

        let mut entries = Vec::with_capacity(days);
        for name in DAY_NAMES.iter().take(days) {
            let line = self
                .ask(&format!("Enter subjects for {name} (comma-separated): "))?
                .unwrap_or_default();
            entries.push(line);
        }

        Ok(Timetable::from_days(entries))
    }
}

/// Difficulty source that uses presets first and prompts for the rest.
pub struct PromptDifficulty<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
    presets: DifficultyMap,
    interactive: bool,
    announced: bool,
}

impl<'a, R: BufRead, W: Write> PromptDifficulty<'a, R, W> {
    pub fn new(prompter: &'a mut Prompter<R, W>, presets: DifficultyMap, interactive: bool) -> Self {
        Self {
            prompter,
            presets,
            interactive,
            announced: false,
        }
    }

    fn ask_rating(&mut self, subject: &str) -> Result<Option<String>> {
        if !self.announced {
            self.prompter
                .say("\nRate the difficulty of the subjects (1=Easy, 10=Hard):")?;
            self.announced = true;
        }
        self.prompter.ask(&format!("{subject}: "))
    }
}

impl<R: BufRead, W: Write> DifficultySource for PromptDifficulty<'_, R, W> {
    fn difficulty(&mut self, subject: &str) -> i64 {
        if let Some(rating) = self.presets.get(subject) {
            return rating;
        }
        if !self.interactive {
            return DEFAULT_DIFFICULTY as i64;
        }

        match self.ask_rating(subject) {
            Ok(Some(answer)) => answer.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("'{}' is not a number, rating {subject} as default", answer.trim());
                DEFAULT_DIFFICULTY as i64
            }),
            Ok(None) => DEFAULT_DIFFICULTY as i64,
            Err(e) => {
                tracing::warn!("could not read difficulty for {subject}: {e:#}");
                DEFAULT_DIFFICULTY as i64
            }
        }
    }
}
