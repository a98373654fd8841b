use anyhow::Result;
use rsv_validator::{count_safe_with, Mode};
use tracing::info;

use super::{load_config, load_reports};

/// `rsv count`: number of safe reports under the configured policy.
///
/// `--dampened` forces dampened mode; without it the config's
/// `dampener.enabled` decides.
pub fn run_count(input: &str, dampened: bool, config_paths: &[String]) -> Result<()> {
    let loaded = load_config(config_paths)?;
    let mut cfg = loaded.settings.validator_config()?;
    if dampened {
        cfg.mode = Mode::Dampened;
    }

    let reports = load_reports(input)?;
    let safe = count_safe_with(&cfg, &reports);

    info!(
        mode = cfg.mode.as_str(),
        band = %cfg.band,
        safe,
        total = reports.len(),
        "count complete"
    );

    println!("safe_reports={}", safe);
    println!("total_reports={}", reports.len());
    println!("mode={}", cfg.mode.as_str());
    Ok(())
}
