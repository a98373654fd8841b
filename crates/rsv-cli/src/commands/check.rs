use anyhow::Result;
use rsv_validator::{build_safety_summary, evaluate_dampened, DampenedVerdict, Report};
use serde::Serialize;
use tracing::info;

use super::{load_config, load_reports};

#[derive(Serialize)]
struct CheckRow<'a> {
    report: usize,
    levels: &'a Report,
    /// Plain verdict; the violation (if any) is carried in `dampened`.
    safe: bool,
    dampened: DampenedVerdict,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    config_hash: String,
    data: T,
}

/// `rsv check`: one verdict line per report, in input order.
pub fn run_check(input: &str, config_paths: &[String], json: bool) -> Result<()> {
    let loaded = load_config(config_paths)?;
    let band = loaded.settings.band()?;
    let reports = load_reports(input)?;

    let rows: Vec<CheckRow<'_>> = reports
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let d = evaluate_dampened(&band, r);
            CheckRow {
                report: i,
                levels: r,
                safe: d.violation.is_none(),
                dampened: d,
            }
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                config_hash: loaded.config_hash,
                data: &rows,
            })?
        );
        return Ok(());
    }

    for row in &rows {
        println!(
            "report={} safe={} dampened_safe={} removed_index={} violation={}",
            row.report,
            row.safe,
            row.dampened.safe,
            row.dampened
                .removed_index
                .map(|i| i.to_string())
                .unwrap_or_else(|| "none".to_string()),
            row.dampened
                .violation
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "none".to_string()),
        );
    }
    Ok(())
}

/// `rsv summary`: batch counts plus every dampener removal.
pub fn run_summary(input: &str, config_paths: &[String], json: bool) -> Result<()> {
    let loaded = load_config(config_paths)?;
    let band = loaded.settings.band()?;
    let reports = load_reports(input)?;

    let summary = build_safety_summary(&band, &reports);
    info!(
        total = summary.total_reports,
        safe_plain = summary.safe_plain,
        safe_dampened = summary.safe_dampened,
        "summary built"
    );

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                config_hash: loaded.config_hash,
                data: &summary,
            })?
        );
    } else {
        println!("{}", summary);
    }
    Ok(())
}
