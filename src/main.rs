use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use statusroll::cli::{Cli, OutputFormat};
use statusroll::{build_breakdown_with, BreakdownConfig, ChildRecord, StatusRollup};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let records: Vec<ChildRecord> =
        serde_json::from_str(&raw).context("input is not a JSON array of child records")?;

    let breakdown = build_breakdown_with(&records, &BreakdownConfig::new(cli.unresolved))?;
    let rollup = StatusRollup::from_breakdown(breakdown, cli.locale);

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&rollup)?,
        OutputFormat::Text => render_text(&rollup),
    };

    match cli.output {
        Some(path) => fs::write(&path, rendered + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Summary line plus one row per entry.
fn render_text(rollup: &StatusRollup) -> String {
    let mut out = rollup.text.bold().to_string();
    for entry in rollup.breakdown.entries() {
        out.push('\n');
        out.push_str(&format!(
            "  {:>4}  {}",
            entry.count,
            entry.display_name(rollup.locale)
        ));
    }
    out
}
