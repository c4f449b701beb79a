// src/experiment/export.rs
//! Writes experiment results as tabular CSV and a full JSON dump.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::ExperimentReport;

pub const RANKING_FILE: &str = "pagerank_results.csv";
pub const NETWORK_FILE: &str = "network_analysis.csv";
pub const JSON_FILE: &str = "results.json";

#[derive(Serialize)]
struct RankingRow<'a> {
    #[serde(rename = "Rank")]
    rank: usize,
    #[serde(rename = "PageName")]
    page: &'a str,
    #[serde(rename = "PageRank")]
    score: f64,
    #[serde(rename = "Percentage")]
    percentage: f64,
}

#[derive(Serialize)]
struct NetworkRow<'a> {
    #[serde(rename = "PageName")]
    page: &'a str,
    #[serde(rename = "InDegree")]
    in_degree: usize,
    #[serde(rename = "OutDegree")]
    out_degree: usize,
    #[serde(rename = "PageRank")]
    score: f64,
}

/// Writes all result files into `dir`, creating it if needed.
///
/// # Errors
/// Returns error if the directory or any file cannot be written.
pub fn write_all(report: &ExperimentReport, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let ranking = dir.join(RANKING_FILE);
    write_ranking(report, &ranking)?;

    let network = dir.join(NETWORK_FILE);
    write_network(report, &network)?;

    let json = dir.join(JSON_FILE);
    let content = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(&json, content).with_context(|| format!("Failed to write {}", json.display()))?;

    Ok(vec![ranking, network, json])
}

fn write_ranking(report: &ExperimentReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    for row in &report.ranking {
        writer.serialize(RankingRow {
            rank: row.position,
            page: &row.name,
            score: row.score,
            percentage: row.percentage,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn write_network(report: &ExperimentReport, path: &Path) -> Result<()> {
    let ranks = &report.baseline.power.ranks;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    for (i, page) in report.network.pages.iter().enumerate() {
        writer.serialize(NetworkRow {
            page: &page.name,
            in_degree: page.in_degree,
            out_degree: page.out_degree,
            score: ranks.score(i),
        })?;
    }
    writer.flush()?;
    Ok(())
}
