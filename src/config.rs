//! Configuration file support for mvn-dep-audit.
//!
//! Provides YAML-based configuration through `mvn-dep-audit.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::shared::error::AuditError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "mvn-dep-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub max_depth: Option<usize>,
    pub scope: Option<String>,
    pub fail_on_findings: Option<bool>,
    pub ignore_findings: Option<Vec<IgnoreFinding>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Coordinates listed under `ignore_findings`
    pub fn ignored_coordinates(&self) -> Vec<String> {
        self.ignore_findings
            .iter()
            .flatten()
            .map(|entry| entry.coordinate.trim().to_string())
            .collect()
    }
}

/// A declared dependency that should never be reported as redundant.
#[derive(Debug, Deserialize)]
pub struct IgnoreFinding {
    pub coordinate: String,
    pub reason: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    debug!("Loaded config from {}", path.display());

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref ignore_findings) = config.ignore_findings {
        for (i, entry) in ignore_findings.iter().enumerate() {
            if entry.coordinate.trim().is_empty() {
                return Err(AuditError::InvalidConfig {
                    details: format!("ignore_findings[{}].coordinate must not be empty", i),
                    hint: "Each ignore_findings entry needs a coordinate \
                           (e.g., \"org.springframework.boot:spring-boot-starter-web:3.2.0\")."
                        .to_string(),
                }
                .into());
            }
        }
    }

    if let Some(ref scope) = config.scope {
        if scope.trim().is_empty() {
            return Err(AuditError::InvalidConfig {
                details: "scope must not be empty".to_string(),
                hint: "Remove the field or set a Maven scope such as compile or test.".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
max_depth: 3
scope: compile
fail_on_findings: true
ignore_findings:
  - coordinate: org.springframework.boot:spring-boot-starter-web:3.2.0
    reason: "Kept for auto-configuration"
  - coordinate: com.google.guava:guava:33.0.0-jre
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.scope.as_deref(), Some("compile"));
        assert_eq!(config.fail_on_findings, Some(true));
        let ignored = config.ignore_findings.as_ref().unwrap();
        assert_eq!(ignored.len(), 2);
        assert_eq!(
            ignored[0].reason.as_deref(),
            Some("Kept for auto-configuration")
        );
        assert!(ignored[1].reason.is_none());
        assert_eq!(
            config.ignored_coordinates(),
            vec![
                "org.springframework.boot:spring-boot-starter-web:3.2.0",
                "com.google.guava:guava:33.0.0-jre",
            ]
        );
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert!(config.ignored_coordinates().is_empty());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "max_depth: deep\n").unwrap();

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_empty_ignore_coordinate_is_invalid() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
ignore_findings:
  - coordinate: "  "
    reason: "blank"
"#,
        )
        .unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuditError>(),
            Some(AuditError::InvalidConfig { .. })
        ));
        assert!(err.to_string().contains("ignore_findings[0].coordinate"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: text\ncheck_cve: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert_eq!(config.format.as_deref(), Some("text"));
    }
}
