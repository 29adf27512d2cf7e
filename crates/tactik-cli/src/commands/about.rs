//! The `tactik about` command.

use anyhow::Result;

use tactik_core::model::TierThresholds;
use tactik_core::scoring::{BACKWARD_WEIGHT, FORWARD_WEIGHT};

pub fn execute() -> Result<()> {
    let t = TierThresholds::default();

    println!("tactik {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("tactik reads your weekly timetable and tells you what to revise for tomorrow.");
    println!();
    println!("How subjects are scored:");
    println!(
        "  - Every appearance tomorrow or the day after adds {FORWARD_WEIGHT} points: upcoming classes need preparation."
    );
    println!(
        "  - Every appearance in the recent three-day window removes {BACKWARD_WEIGHT} point: material you just covered can wait."
    );
    println!("  - Your difficulty rating (1 = easy, 10 = hard) is added as-is.");
    println!("  - Scores are shown as a percentage of the highest score of the day.");
    println!();
    println!("Recommendations (defaults, see [thresholds] in tactik.toml):");
    println!("  above {:>3}%  Highly recommended, focus intensively", t.high);
    println!("  above {:>3}%  Recommended to revise", t.mid);
    println!("  above {:>3}%  Moderate priority", t.low);
    println!("  otherwise    Low priority");
    println!();
    println!("Only subjects on tomorrow's or the day after's timetable are ranked.");

    Ok(())
}
