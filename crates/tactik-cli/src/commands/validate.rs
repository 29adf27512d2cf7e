//! The `tactik validate` command.

use std::path::PathBuf;

use anyhow::Result;

use tactik_core::config::load_config_from;
use tactik_core::model::DAY_NAMES;
use tactik_core::parser;

pub fn execute(file: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let timetable = parser::parse_timetable_file(&file, config.max_days)?;

    println!(
        "Timetable: {} ({} days, {} distinct subjects)",
        file.display(),
        timetable.len(),
        timetable.distinct_subjects().len()
    );
    for (index, day) in timetable.days.iter().enumerate() {
        let name = DAY_NAMES.get(index).copied().unwrap_or("?");
        println!("  {index} {name:<9} {}", parser::canonicalize(day));
    }

    let warnings = parser::validate_timetable(&timetable, config.max_days, config.max_subjects);
    for w in &warnings {
        let prefix = w
            .day
            .and_then(|d| DAY_NAMES.get(d))
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Timetable valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
