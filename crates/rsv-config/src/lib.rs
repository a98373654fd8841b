use anyhow::{Context, Result};
use rsv_validator::{Mode, Parallelism, ToleranceBand, ValidatorConfig, MAX_GAP, MIN_GAP};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;

/// Layered config for `rsv`.
///
/// Every section and key is optional; missing keys fall back to the standard
/// band [1, 3], plain mode, parallel evaluation. Unknown keys are rejected so a
/// typo never silently falls back to a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RsvSettings {
    pub tolerance: ToleranceSettings,
    pub dampener: DampenerSettings,
    pub runtime: RuntimeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToleranceSettings {
    pub min_gap: u64,
    pub max_gap: u64,
}

impl Default for ToleranceSettings {
    fn default() -> Self {
        Self {
            min_gap: MIN_GAP,
            max_gap: MAX_GAP,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DampenerSettings {
    /// Default mode for `count` when `--dampened` is not given.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeSettings {
    pub parallel: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl RsvSettings {
    pub fn band(&self) -> Result<ToleranceBand> {
        ToleranceBand::new(self.tolerance.min_gap, self.tolerance.max_gap)
            .context("CONFIG_INVALID_BAND")
    }

    pub fn validator_config(&self) -> Result<ValidatorConfig> {
        Ok(ValidatorConfig {
            band: self.band()?,
            mode: Mode::from_dampened(self.dampener.enabled),
            parallelism: if self.runtime.parallel {
                Parallelism::Parallel
            } else {
                Parallelism::Sequential
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
    pub settings: RsvSettings,
}

/// No layers: the built-in defaults, hashed like any other config.
pub fn load_defaults() -> Result<LoadedConfig> {
    load_layered_yaml_from_strings(&[])
}

pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let docs = paths
        .iter()
        .map(|p| fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}")))
        .collect::<Result<Vec<String>>>()?;
    let layers: Vec<&str> = docs.iter().map(String::as_str).collect();
    load_layered_yaml_from_strings(&layers)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    // Earlier docs are base, later docs override.
    let mut merged = serde_json::json!({});
    for raw in yaml_docs {
        let v_yaml: serde_yaml::Value = serde_yaml::from_str(raw).context("invalid yaml")?;
        // An empty document parses as null; treat it as "no overrides".
        if v_yaml.is_null() {
            continue;
        }
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        merged = deep_merge(merged, v_json);
    }

    let settings: RsvSettings =
        serde_json::from_value(merged.clone()).context("CONFIG_SCHEMA_MISMATCH")?;
    settings.band()?;

    // Hash the effective settings (defaults filled in), so an explicit default
    // and an omitted key hash the same.
    let config_json = serde_json::to_value(&settings).context("settings serialize failed")?;
    let canonical_json = canonicalize_json(&config_json)?;
    let config_hash = sha256_hex(canonical_json.as_bytes());

    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json,
        settings,
    })
}

/// Maps merge key by key; any other overlay value replaces the base outright.
fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut merged), Value::Object(layer)) => {
            for (key, value) in layer {
                let slot = merged.entry(key).or_insert(Value::Null);
                *slot = deep_merge(slot.take(), value);
            }
            Value::Object(merged)
        }
        (_, replacement) => replacement,
    }
}

fn canonicalize_json(v: &Value) -> Result<String> {
    // serde_json's default Map is ordered by key, so this is already canonical.
    serde_json::to_string(v).context("canonical json serialize failed")
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
