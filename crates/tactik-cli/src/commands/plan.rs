//! The `tactik plan` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use tactik_core::config::load_config_from;
use tactik_core::parser;
use tactik_core::report::PriorityReport;
use tactik_core::Prioritizer;

use crate::calendar;
use crate::prompt::{PromptDifficulty, Prompter};

/// How the ranking is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl OutputFormat {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => anyhow::bail!("unknown format '{other}': expected text, json or markdown"),
        }
    }
}

pub fn execute(
    file: Option<PathBuf>,
    tomorrow: Option<usize>,
    difficulties: Vec<(String, i64)>,
    no_prompt: bool,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = OutputFormat::parse(format.as_deref().unwrap_or(&config.default_format))?;

    // Flags override the config file's [difficulty] table
    let mut presets = config.difficulty_map();
    presets.merge(&difficulties.into_iter().collect());

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());

    let timetable = match &file {
        Some(path) => parser::parse_timetable_file(path, config.max_days)?,
        None => prompter.read_timetable(config.max_days)?,
    };

    let tomorrow = tomorrow.unwrap_or_else(calendar::tomorrow_from_clock);
    tracing::debug!("planning for day index {tomorrow}");

    let prioritizer = Prioritizer::new(config.prioritizer_config());
    let mut source = PromptDifficulty::new(&mut prompter, presets, !no_prompt);
    let ranked = prioritizer.plan(&timetable, tomorrow, &mut source)?;

    let report = PriorityReport::new(timetable.len(), tomorrow, config.thresholds, ranked);

    match format {
        OutputFormat::Text => print_ranking(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Markdown => print!("{}", report.to_markdown()),
    }

    if let Some(path) = &output {
        report.save_json(path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_ranking(report: &PriorityReport) {
    use comfy_table::{Cell, Table};

    println!(
        "\nFinal Priorities with Recommendations for {}:\n",
        report.tomorrow_name()
    );

    if report.ranked.is_empty() {
        println!("Nothing scheduled for the next two days.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "Subject",
        "Attention Required",
        "Score",
        "Recommendation",
    ]);

    for r in &report.ranked {
        table.add_row(vec![
            Cell::new(format!("#{}", r.rank)),
            Cell::new(&r.subject),
            Cell::new(format!("{:.2}%", r.normalized_score)),
            Cell::new(r.score),
            Cell::new(r.tier.recommendation()),
        ]);
    }

    println!("{table}");
}
