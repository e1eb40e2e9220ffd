use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a clean audit from one that
/// found redundant dependencies, and both from tool failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - audit completed (findings only fail the run with `--fail-on-findings`)
    Success = 0,
    /// Redundant dependencies were found and `--fail-on-findings` was requested
    RedundancyDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, malformed input, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RedundancyDetected => write!(f, "Redundancy Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency auditing.
///
/// Parse failures for either input abort that parse entirely and surface as one
/// of these variants, wrapped in `anyhow::Error`. Callers that need to branch on
/// the kind use `err.downcast_ref::<AuditError>()`.
///
/// Query misses (`find_dependency`, `find_path_to`) are not errors; they return
/// empty values.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Input file not found: {path}\n\n💡 Hint: {suggestion}")]
    InputNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read {source_name}: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    Io {
        source_name: String,
        path: PathBuf,
        details: String,
    },

    #[error("Malformed {source_name} at {location}\nDetails: {details}\n\n💡 Hint: {hint}")]
    MalformedInput {
        source_name: String,
        location: String,
        details: String,
        hint: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config: {details}\n\n💡 Hint: {hint}")]
    InvalidConfig { details: String, hint: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl AuditError {
    /// Builds a `MalformedInput` error for the dependency tree document
    pub fn malformed_tree(location: impl Into<String>, details: impl Into<String>) -> Self {
        AuditError::MalformedInput {
            source_name: "dependency tree".to_string(),
            location: location.into(),
            details: details.into(),
            hint: "Generate the tree with `mvn dependency:tree -DoutputType=json -DoutputFile=<file>`"
                .to_string(),
        }
    }

    /// Builds a `MalformedInput` error for the dependency:analyze report
    pub fn malformed_report(location: impl Into<String>, details: impl Into<String>) -> Self {
        AuditError::MalformedInput {
            source_name: "analysis report".to_string(),
            location: location.into(),
            details: details.into(),
            hint: "Save the plain-text output of `mvn dependency:analyze` as UTF-8".to_string(),
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, AuditError::MalformedInput { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(
            self,
            AuditError::Io { .. } | AuditError::InputNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::RedundancyDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::RedundancyDetected),
            "Redundancy Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_input_not_found_display() {
        let error = AuditError::InputNotFound {
            path: PathBuf::from("/test/tree.json"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Input file not found"));
        assert!(display.contains("/test/tree.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
        assert!(error.is_io());
    }

    #[test]
    fn test_malformed_tree_display() {
        let error = AuditError::malformed_tree("children[0].artifactId", "missing required field");
        let display = format!("{}", error);
        assert!(display.contains("Malformed dependency tree"));
        assert!(display.contains("children[0].artifactId"));
        assert!(display.contains("missing required field"));
        assert!(display.contains("dependency:tree"));
        assert!(error.is_malformed_input());
        assert!(!error.is_io());
    }

    #[test]
    fn test_malformed_report_display() {
        let error = AuditError::malformed_report("byte 12", "invalid UTF-8");
        let display = format!("{}", error);
        assert!(display.contains("Malformed analysis report"));
        assert!(display.contains("dependency:analyze"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = AuditError::FileWriteError {
            path: PathBuf::from("/test/report.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.md"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = AuditError::InvalidConfig {
            details: "ignore_findings[0].coordinate must not be empty".to_string(),
            hint: "Give every entry a coordinate".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.starts_with("Invalid config: ignore_findings[0]"));
        assert!(display.contains("💡 Hint: Give every entry a coordinate"));
    }

    #[test]
    fn test_security_error_display() {
        let error = AuditError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = AuditError::malformed_tree("root", "bad").into();
        let audit = err.downcast_ref::<AuditError>().unwrap();
        assert!(audit.is_malformed_input());
    }
}
