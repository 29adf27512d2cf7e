//! The `tactik init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create tactik.toml
    if std::path::Path::new("tactik.toml").exists() {
        println!("tactik.toml already exists, skipping.");
    } else {
        std::fs::write("tactik.toml", SAMPLE_CONFIG)?;
        println!("Created tactik.toml");
    }

    // Create example timetable
    let timetable_path = std::path::Path::new("timetable.txt");
    if timetable_path.exists() {
        println!("timetable.txt already exists, skipping.");
    } else {
        std::fs::write(timetable_path, EXAMPLE_TIMETABLE)?;
        println!("Created timetable.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit timetable.txt: one line per day, Monday first");
    println!("  2. Run: tactik validate --file timetable.txt");
    println!("  3. Run: tactik plan --file timetable.txt");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# tactik configuration

# Days in the timetable cycle (2-7)
max_days = 7

# Refuse plans with more distinct subjects than this (unset = no limit)
# max_subjects = 8

# text, json or markdown
default_format = "text"

# Attention percentage a subject must exceed for each recommendation
[thresholds]
high = 75.0
mid = 50.0
low = 25.0

# Ratings used instead of prompting (1 = easy, 10 = hard)
[difficulty]
Mathematics = 7
"#;

const EXAMPLE_TIMETABLE: &str = "Mathematics, Physics
Chemistry, English
Mathematics, Biology
History, Physics
Mathematics, Chemistry
English
Biology, History
";
