//! Config hash stability.
//!
//! GREEN when:
//! - `load_layered_yaml_from_strings` called twice on the same inputs returns
//!   identical config_hash.
//! - Reordering keys within YAML doesn't change the hash (canonicalization).
//! - Different values produce different hashes.
//! - Spelling out a default and omitting it hash the same.

use rsv_config::{load_defaults, load_layered_yaml, load_layered_yaml_from_strings};

const BASE_YAML: &str = r#"
tolerance:
  min_gap: 1
  max_gap: 3
dampener:
  enabled: false
runtime:
  parallel: true
"#;

/// Same content as BASE_YAML but with keys in different order.
const BASE_YAML_REORDERED: &str = r#"
runtime:
  parallel: true
dampener:
  enabled: false
tolerance:
  max_gap: 3
  min_gap: 1
"#;

const OVERLAY_YAML: &str = r#"
tolerance:
  max_gap: 4
"#;

#[test]
fn same_input_produces_identical_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();

    assert_eq!(a.config_hash, b.config_hash);
    assert_eq!(a.canonical_json, b.canonical_json);
    assert_eq!(a.config_hash.len(), 64, "sha256 hex digest");
}

#[test]
fn key_order_does_not_change_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML_REORDERED]).unwrap();
    assert_eq!(a.config_hash, b.config_hash);
}

#[test]
fn different_values_produce_different_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML, OVERLAY_YAML]).unwrap();
    assert_ne!(a.config_hash, b.config_hash);
    assert_eq!(b.settings.tolerance.max_gap, 4);
}

#[test]
fn explicit_defaults_hash_like_no_config() {
    let explicit = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let implicit = load_defaults().unwrap();
    assert_eq!(explicit.config_hash, implicit.config_hash);
}

#[test]
fn shipped_base_config_is_the_standard_policy() {
    let base = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config/defaults/base.yaml");
    let base_s = base.to_string_lossy().to_string();

    let loaded = load_layered_yaml(&[base_s.as_str()]).unwrap();
    assert_eq!(loaded.config_hash, load_defaults().unwrap().config_hash);
}
