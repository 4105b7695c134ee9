//! Dataset loading from JSON or TOML documents

use crate::dataset::Dataset;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

/// Bundled sample dataset
const DEFAULT_DATASET: &str = include_str!("../../data/weapons_full.json");

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read dataset file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Parse a dataset from a JSON string
pub fn parse_dataset_json(content: &str) -> Result<Dataset, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a dataset from a TOML string
pub fn parse_dataset_toml(content: &str) -> Result<Dataset, ConfigError> {
    parse_toml(content)
}

/// Load a dataset, picking the format from the file extension (`.json` or `.toml`)
pub fn load_dataset(path: &Path) -> Result<Dataset, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let dataset: Dataset = match extension.as_str() {
        "json" => load_json(path)?,
        "toml" => load_toml(path)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };

    info!(
        path = %path.display(),
        weapons = dataset.weapons.len(),
        affinities = dataset.affinity_rules.len(),
        scaling = dataset.has_scaling_curves(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse the sample dataset shipped with the crate
pub fn bundled_dataset() -> Result<Dataset, ConfigError> {
    parse_dataset_json(DEFAULT_DATASET)
}

/// The bundled sample dataset, or an empty one if it fails to parse
///
/// Callers that need to report the failure use [`bundled_dataset`].
pub fn default_dataset() -> Dataset {
    match bundled_dataset() {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("bundled dataset failed to parse: {}", err);
            Dataset::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{calculate, CalculationRequest};
    use crate::types::Stats;

    #[test]
    fn test_default_dataset_parses() {
        let dataset = parse_dataset_json(DEFAULT_DATASET).unwrap();
        assert!(!dataset.weapons.is_empty());
        assert!(dataset.has_scaling_curves());
        assert!(!dataset.affinity_rules.is_empty());
    }

    #[test]
    fn test_every_bundled_weapon_calculates() {
        let dataset = default_dataset();
        for weapon in &dataset.weapons {
            for affinity in dataset.affinity_names() {
                let request = CalculationRequest::new(weapon.id.as_str(), Stats::uniform(20))
                    .upgrade_level(5)
                    .affinity(affinity);
                let result = calculate(&dataset, &request).unwrap();
                assert!(result.total_sum() > 0.0, "{} / {}", weapon.id, affinity);
            }
        }
    }

    #[test]
    fn test_parse_toml_dataset() {
        let toml = r#"
[[weapons]]
id = "club"
name = "Club"
weapon_class = "hammer"
upgrade_path = "standard"
weight = 3.0

[weapons.requirements]
str = 10

[weapons.base_damage_plus0]
phys = 103

[weapons.scaling_grade_display]
str = "C"

[[scaling_curves.default]]
stat = 1
mult = 0.0

[[scaling_curves.default]]
stat = 99
mult = 1.0

[reinforce_tables.standard.0]
base_mult = 1.0
scaling_mult = 1.0

[[affinity_rules]]
affinity = "Standard"
"#;

        let dataset = parse_dataset_toml(toml).unwrap();
        let club = dataset.weapon("club").unwrap();
        assert_eq!(club.requirements.str, 10);
        assert!((club.base_damage_plus0.phys - 103.0).abs() < f64::EPSILON);
        assert_eq!(dataset.scaling_curves.as_ref().map(|c| c["default"].len()), Some(2));
        assert_eq!(dataset.max_upgrade_level("standard"), Some(0));
    }

    #[test]
    fn test_bundled_dataset_matches_default() {
        let bundled = bundled_dataset().unwrap();
        assert_eq!(bundled.weapons.len(), default_dataset().weapons.len());
    }

    #[test]
    fn test_null_fields_resolve_to_defaults() {
        let dataset = parse_dataset_json(
            r#"{
                "weapons": [{
                    "id": "w",
                    "weight": null,
                    "requirements": {"str": null, "dex": 10},
                    "base_damage_plus0": {"phys": 100, "mag": null},
                    "scaling_grade_display": {"str": "E", "dex": null}
                }],
                "scaling_curves": {
                    "default": [{"stat": 10, "mult": 1.0}, {"stat": 40, "mult": 2.0}]
                },
                "reinforce_tables": {"standard": {"0": {"base_mult": null, "scaling_mult": 1.0}}},
                "affinity_rules": [
                    {"affinity": "Heavy", "base_mult": null, "scaling_mult": {"str": null, "dex": 0}, "notes": null}
                ]
            }"#,
        )
        .unwrap();

        let weapon = dataset.weapon("w").unwrap();
        assert_eq!(weapon.weight, 0.0);
        assert_eq!(weapon.requirements.str, 0);
        assert_eq!(weapon.requirements.dex, 10);
        assert_eq!(weapon.base_damage_plus0.mag, 0.0);
        assert_eq!(weapon.scaling_grade_display.dex, crate::types::Grade::NoScaling);

        assert!((dataset.reinforce_row("standard", 0).base_mult - 1.0).abs() < f64::EPSILON);
        let heavy = dataset.affinity_rule("Heavy");
        assert!((heavy.base_mult.phys - 1.0).abs() < f64::EPSILON);
        assert!((heavy.scaling_mult.str - 1.0).abs() < f64::EPSILON);
        assert_eq!(heavy.scaling_mult.dex, 0.0);
        assert!(heavy.notes.is_empty());

        // str requirement of 0 is met; E grade at 10 str scales 100 by 0.4
        let request = CalculationRequest::new("w", Stats::new(10, 10, 0, 0, 0)).affinity("Heavy");
        let result = calculate(&dataset, &request).unwrap();
        assert!(result.requirements_met);
        assert!((result.total.phys - 140.0).abs() < f64::EPSILON);
        assert_eq!(result.total.mag, 0.0);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_dataset(Path::new("weapons.csv")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "csv"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_dataset(Path::new("/nonexistent/weapons_full.json")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = parse_dataset_json("{\"weapons\": [").unwrap_err();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }
}
