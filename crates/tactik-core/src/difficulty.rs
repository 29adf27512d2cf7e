//! Difficulty acquisition.
//!
//! The prioritizer asks a [`DifficultySource`] for one rating per registered
//! subject. Sources return raw integers; [`sanitize_difficulty`] maps anything
//! outside 1..=10 to the default.

use std::collections::HashMap;

/// Rating used when the supplied value is out of range.
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Lowest accepted rating.
pub const MIN_DIFFICULTY: i64 = 1;

/// Highest accepted rating.
pub const MAX_DIFFICULTY: i64 = 10;

/// Supplies a difficulty rating for a subject.
///
/// Called once per distinct subject, in registration order. Blocking is fine:
/// the prioritizer is synchronous.
pub trait DifficultySource {
    /// Raw rating for `subject`. Values outside 1..=10 are replaced by
    /// [`DEFAULT_DIFFICULTY`] by the caller.
    fn difficulty(&mut self, subject: &str) -> i64;
}

impl<F> DifficultySource for F
where
    F: FnMut(&str) -> i64,
{
    fn difficulty(&mut self, subject: &str) -> i64 {
        self(subject)
    }
}

/// Clamp a raw rating into 1..=10, defaulting anything outside it.
pub fn sanitize_difficulty(raw: i64) -> u8 {
    if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&raw) {
        raw as u8
    } else {
        DEFAULT_DIFFICULTY
    }
}

/// Preset ratings keyed by subject name.
///
/// Unknown subjects get [`DEFAULT_DIFFICULTY`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DifficultyMap {
    ratings: HashMap<String, i64>,
}

impl DifficultyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the rating for `subject`.
    pub fn insert(&mut self, subject: impl Into<String>, rating: i64) {
        self.ratings.insert(subject.into().trim().to_string(), rating);
    }

    /// Preset rating for `subject`, if any.
    pub fn get(&self, subject: &str) -> Option<i64> {
        self.ratings.get(subject).copied()
    }

    /// Layer `other` on top of `self`; ratings in `other` win.
    pub fn merge(&mut self, other: &DifficultyMap) {
        for (subject, rating) in &other.ratings {
            self.ratings.insert(subject.clone(), *rating);
        }
    }

    /// Parse a `NAME=N` assignment as used on the command line.
    pub fn parse_assignment(s: &str) -> Result<(String, i64), String> {
        let (name, value) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("expected NAME=N, got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing subject name in '{s}'"));
        }
        let rating = value
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid difficulty '{}' for {name}", value.trim()))?;
        Ok((name.to_string(), rating))
    }
}

impl FromIterator<(String, i64)> for DifficultyMap {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        let mut map = DifficultyMap::new();
        for (subject, rating) in iter {
            map.insert(subject, rating);
        }
        map
    }
}

impl DifficultySource for DifficultyMap {
    fn difficulty(&mut self, subject: &str) -> i64 {
        self.get(subject).unwrap_or(DEFAULT_DIFFICULTY as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_valid_and_defaults_rest() {
        assert_eq!(sanitize_difficulty(1), 1);
        assert_eq!(sanitize_difficulty(10), 10);
        assert_eq!(sanitize_difficulty(0), DEFAULT_DIFFICULTY);
        assert_eq!(sanitize_difficulty(11), DEFAULT_DIFFICULTY);
        assert_eq!(sanitize_difficulty(-3), DEFAULT_DIFFICULTY);
        assert_eq!(sanitize_difficulty(i64::MAX), DEFAULT_DIFFICULTY);
    }

    #[test]
    fn closures_are_sources() {
        let mut asked = Vec::new();
        let mut source = |subject: &str| -> i64 {
            asked.push(subject.to_string());
            7
        };
        assert_eq!(source.difficulty("Math"), 7);
        assert_eq!(asked, vec!["Math"]);
    }

    #[test]
    fn map_lookup_defaults_unknown_subjects() {
        let mut map: DifficultyMap = vec![(" Math ".to_string(), 9)].into_iter().collect();
        assert_eq!(map.difficulty("Math"), 9);
        assert_eq!(map.difficulty("Art"), 5);
    }

    #[test]
    fn merge_prefers_other() {
        let mut base: DifficultyMap = vec![("Math".to_string(), 3), ("Art".to_string(), 4)]
            .into_iter()
            .collect();
        let top: DifficultyMap = vec![("Math".to_string(), 8)].into_iter().collect();
        base.merge(&top);
        assert_eq!(base.get("Math"), Some(8));
        assert_eq!(base.get("Art"), Some(4));
        assert_eq!(base.get("Biology"), None);
    }

    #[test]
    fn parse_assignments() {
        assert_eq!(
            DifficultyMap::parse_assignment("Computer Science=8").unwrap(),
            ("Computer Science".to_string(), 8)
        );
        assert_eq!(
            DifficultyMap::parse_assignment(" Math = 3 ").unwrap(),
            ("Math".to_string(), 3)
        );
        assert!(DifficultyMap::parse_assignment("Math").is_err());
        assert!(DifficultyMap::parse_assignment("=4").is_err());
        assert!(DifficultyMap::parse_assignment("Math=hard").is_err());
    }
}
