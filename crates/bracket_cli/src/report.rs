//! Probability report: CSV file and console summary

use anyhow::{Context, Result};
use bracket_core::{ProbabilityTable, Round};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// `probs_<YYYY-MM-DD>.csv` in the working directory
pub fn default_probs_path() -> PathBuf {
    PathBuf::from(format!(
        "probs_{}.csv",
        chrono::Local::now().date_naive().format("%Y-%m-%d")
    ))
}

pub fn header() -> Vec<&'static str> {
    let mut columns = vec!["team", "seed", "region"];
    columns.extend(Round::ALL.iter().map(|r| r.column_key()));
    columns
}

/// Write one row per team, already sorted by championship probability.
pub fn write_probabilities<W: std::io::Write>(table: &ProbabilityTable, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(header())?;

    let precision = table.precision as usize;
    for row in &table.rows {
        let mut record = vec![
            row.name.clone(),
            row.seed.to_string(),
            row.region.to_string(),
        ];
        record.extend(
            row.probabilities
                .iter()
                .map(|p| format!("{:.*}", precision, p)),
        );
        writer.write_record(&record)?;
    }

    writer.flush().context("Failed to flush probability CSV")?;
    Ok(())
}

pub fn save_probabilities(table: &ProbabilityTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_probabilities(table, file)
        .with_context(|| format!("Failed to write probabilities to {}", path.display()))
}

/// Console table of the `top` title favourites.
pub fn format_top(table: &ProbabilityTable, top: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {:<25} {:<6} {:<10} {:>7}", "Team", "Seed", "Region", "Champ%");
    let _ = writeln!(out, "  {}", "-".repeat(52));
    for row in table.rows.iter().take(top) {
        let _ = writeln!(
            out,
            "  {:<25} {:<6} {:<10} {:>6.1}%",
            row.name,
            row.seed,
            row.region,
            row.championship() * 100.0
        );
    }
    out
}
