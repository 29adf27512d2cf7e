//! Mapping the local clock onto timetable day indices.
//!
//! Timetables start on Monday, so index `i` is `Weekday::num_days_from_monday`.

use chrono::{Datelike, Local, Weekday};

use tactik_core::model::MAX_DAYS;

/// Timetable index of the day after `today`.
pub fn tomorrow_index(today: Weekday) -> usize {
    today.succ().num_days_from_monday() as usize
}

/// Timetable index of tomorrow according to the local clock.
pub fn tomorrow_from_clock() -> usize {
    tomorrow_index(Local::now().weekday())
}

/// Parse `--tomorrow`: a day index (`0`-`6`) or a weekday name.
pub fn parse_day_arg(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if let Ok(index) = s.parse::<usize>() {
        if index < MAX_DAYS {
            return Ok(index);
        }
        return Err(format!("day index must be between 0 and {}", MAX_DAYS - 1));
    }
    s.parse::<Weekday>()
        .map(|day| day.num_days_from_monday() as usize)
        .map_err(|_| format!("expected a day index or weekday name, got '{s}'"))
}
