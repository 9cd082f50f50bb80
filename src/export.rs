//! Write the active era's overview and leaderboards to a timestamped JSON
//! report file. These are one-way report dumps; nothing reads them back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::datasets::EraDataset;
use crate::queries::{self, LeaderboardRow};

#[derive(Debug, Serialize)]
pub struct EraReport {
    pub era_key: &'static str,
    pub era_name: &'static str,
    pub generated_at: String,
    pub teams: usize,
    pub players: usize,
    pub matches: usize,
    pub top_run_scorers: Vec<LeaderboardRow>,
    pub top_wicket_takers: Vec<LeaderboardRow>,
}

pub fn build_report(era: &'static EraDataset, top_n: usize) -> EraReport {
    EraReport {
        era_key: era.key,
        era_name: era.name,
        generated_at: Local::now().to_rfc3339(),
        teams: era.teams.len(),
        players: era.players.len(),
        matches: era.matches.len(),
        top_run_scorers: queries::top_run_scorers(&era.players, top_n),
        top_wicket_takers: queries::top_wicket_takers(&era.players, top_n),
    }
}

/// Export the report next to the working directory and return its path.
pub fn export_era_report(era: &'static EraDataset, top_n: usize) -> Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = PathBuf::from(format!("cricvision_{}_{stamp}.json", era.key));
    write_report(&path, &build_report(era, top_n))?;
    Ok(path)
}

fn write_report(path: &Path, report: &EraReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize era report")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).context("write era report")?;
    fs::rename(&tmp, path).context("swap era report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::ERA_CATALOG;

    #[test]
    fn report_counts_match_dataset() {
        let era = &ERA_CATALOG[0];
        let report = build_report(era, 5);
        assert_eq!(report.players, era.players.len());
        assert!(!report.top_run_scorers.is_empty());
        assert!(report.top_run_scorers.len() <= 5);
        assert!(report.top_wicket_takers.len() <= 5);
    }
}
