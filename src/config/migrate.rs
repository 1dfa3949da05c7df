//! Config file migration: detect and fill fields added after the file was
//! first written, without touching values the user already set.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;

const EXPECTED_FIELDS: [&str; 4] = ["database", "progress_width", "recent_limit", "show_weekday"];

/// Names of expected fields missing from the given YAML content.
pub fn missing_fields(content: &str) -> Vec<&'static str> {
    let Ok(yaml) = serde_yaml::from_str::<Value>(content) else {
        return EXPECTED_FIELDS.to_vec();
    };

    let Some(map) = yaml.as_mapping() else {
        return EXPECTED_FIELDS.to_vec();
    };

    EXPECTED_FIELDS
        .iter()
        .filter(|field| !map.contains_key(&Value::String(field.to_string())))
        .copied()
        .collect()
}

/// Rewrite the config file with defaults filled in for missing fields.
/// Returns true when the file was changed.
pub fn migrate_config() -> AppResult<bool> {
    let path = Config::config_file();

    if !path.exists() {
        return Err(AppError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(&path)?;

    if missing_fields(&content).is_empty() {
        return Ok(false);
    }

    // Round-trip through Config: serde fills the missing fields with their
    // defaults, present values are preserved.
    let cfg: Config = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Cannot parse config file: {e}")))?;
    cfg.save()?;

    Ok(true)
}
