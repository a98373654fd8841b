//! Command handler modules for rsv-cli.
//!
//! Shared loading helpers live here. Command-specific logic lives in the
//! submodules.

pub mod check;
pub mod count;

use anyhow::{Context, Result};
use rsv_config::LoadedConfig;
use rsv_validator::Report;
use std::path::Path;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Load layered config, or the built-in defaults when no layers are given.
pub fn load_config(paths: &[String]) -> Result<LoadedConfig> {
    if paths.is_empty() {
        debug!("no --config layers; using built-in defaults");
        return rsv_config::load_defaults();
    }

    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    let loaded = rsv_config::load_layered_yaml(&path_refs)?;
    debug!(
        layers = paths.len(),
        config_hash = %loaded.config_hash,
        "config loaded"
    );
    Ok(loaded)
}

/// Ingest reports from a file path, or stdin when `input` is `-`.
pub fn load_reports(input: &str) -> Result<Vec<Report>> {
    let parsed = if input == "-" {
        rsv_ingest::parse_reports_reader(std::io::stdin().lock())
    } else {
        rsv_ingest::parse_reports_file(Path::new(input))
    };

    let reports = parsed.with_context(|| format!("failed to ingest reports from {input}"))?;
    info!(input, reports = reports.len(), "reports loaded");
    Ok(reports)
}
