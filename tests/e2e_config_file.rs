/// End-to-end tests for config file loading, CLI option merging, and ignored findings.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const CONFIG_FILENAME: &str = "mvn-dep-audit.config.yml";

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn tree_fixture() -> String {
    fixtures_path()
        .join("spring-demo-tree.json")
        .to_string_lossy()
        .into_owned()
}

fn analysis_fixture() -> String {
    fixtures_path()
        .join("spring-demo-analyze.txt")
        .to_string_lossy()
        .into_owned()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join(CONFIG_FILENAME), "format: markdown\n");

        let output = cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args(["analyze", "-t", &tree_fixture()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# Maven Dependency Audit"));
        // stderr should mention auto-discovery
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_tree_options() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            r#"
max_depth: 1
scope: compile
"#,
        );

        cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args(["show-tree", "-t", &tree_fixture()])
            .assert()
            .success()
            .stdout(
                "com.example:demo:0.0.1-SNAPSHOT\n\
                 ├── org.springframework.boot:spring-boot-starter-webmvc:4.0.1 [compile]\n\
                 └── org.slf4j:slf4j-api:2.0.17 [compile]\n",
            );
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args(["analyze", "-t", &tree_fixture()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("Project: com.example:demo:0.0.1-SNAPSHOT"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_unknown_field_warns_but_succeeds() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "format: json\nexclude_packages:\n  - junit\n",
        );

        cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args(["analyze", "-t", &tree_fixture()])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'exclude_packages' will be ignored",
            ));
    }
}

// ============================================================================
// Explicit Config Path Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("audit.yml");
        write_config(&config_path, "format: json\n");

        let output = cargo_bin_cmd!("mvn-dep-audit")
            .args(["analyze", "-t", &tree_fixture(), "-c"])
            .arg(&config_path)
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["statistics"]["total_dependencies"], 11);
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        cargo_bin_cmd!("mvn-dep-audit")
            .args(["analyze", "-t", &tree_fixture(), "-c", "nonexistent-config.yml"])
            .assert()
            .code(3) // ApplicationError
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("audit.yml");
        write_config(&config_path, "format: [unclosed\n");

        cargo_bin_cmd!("mvn-dep-audit")
            .args(["analyze", "-t", &tree_fixture(), "-c"])
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_ignore_coordinate_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("audit.yml");
        write_config(
            &config_path,
            r#"
ignore_findings:
  - coordinate: ""
    reason: "placeholder"
"#,
        );

        cargo_bin_cmd!("mvn-dep-audit")
            .args(["analyze", "-t", &tree_fixture(), "-c"])
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid config"));
    }

    #[test]
    fn test_invalid_format_value_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("audit.yml");
        write_config(&config_path, "format: xlsx\n");

        cargo_bin_cmd!("mvn-dep-audit")
            .args(["analyze", "-t", &tree_fixture(), "-c"])
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid format: xlsx"));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join(CONFIG_FILENAME), "format: json\n");

        let output = cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args(["analyze", "-t", &tree_fixture(), "-f", "markdown"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# Maven Dependency Audit"));
    }

    #[test]
    fn test_cli_max_depth_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join(CONFIG_FILENAME), "max_depth: 1\n");

        cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args(["show-tree", "-t", &tree_fixture(), "-d", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("org.yaml:snakeyaml:2.5"));
    }

    #[test]
    fn test_fail_on_findings_from_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join(CONFIG_FILENAME), "fail_on_findings: true\n");

        cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args([
                "check-redundancy",
                "-t",
                &tree_fixture(),
                "-a",
                &analysis_fixture(),
            ])
            .assert()
            .code(1);
    }
}

// ============================================================================
// Ignored Findings Tests
// ============================================================================

mod ignore_findings_tests {
    use super::*;

    #[test]
    fn test_ignore_finding_via_config_file() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            r#"
fail_on_findings: true
ignore_findings:
  - coordinate: org.springframework.boot:spring-boot-starter-webmvc:4.0.1
    reason: "Starter kept for auto-configuration"
"#,
        );

        cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args([
                "check-redundancy",
                "-t",
                &tree_fixture(),
                "-a",
                &analysis_fixture(),
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("No redundancy issues detected."));
    }

    #[test]
    fn test_ignore_full_coordinate_via_config_file() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            r#"
ignore_findings:
  - coordinate: org.springframework.boot:spring-boot-starter-webmvc:jar:4.0.1:compile
"#,
        );

        let output = cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args([
                "check-redundancy",
                "-t",
                &tree_fixture(),
                "-a",
                &analysis_fixture(),
                "-f",
                "json",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["findings"], serde_json::json!([]));
    }

    #[test]
    fn test_ignore_cli_and_config_merged() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            r#"
ignore_findings:
  - coordinate: org.slf4j:slf4j-api:2.0.17
"#,
        );

        cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args([
                "check-redundancy",
                "-t",
                &tree_fixture(),
                "-a",
                &analysis_fixture(),
                "--fail-on-findings",
                "--ignore",
                "org.springframework.boot:spring-boot-starter-webmvc:4.0.1",
            ])
            .assert()
            .code(0);
    }

    #[test]
    fn test_without_ignore_detects_redundancy() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("mvn-dep-audit")
            .current_dir(dir.path())
            .args([
                "check-redundancy",
                "-t",
                &tree_fixture(),
                "-a",
                &analysis_fixture(),
                "--fail-on-findings",
            ])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("1. Redundant Dependency:"));
    }
}
