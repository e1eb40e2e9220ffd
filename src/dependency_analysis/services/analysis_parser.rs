use crate::dependency_analysis::domain::AnalysisResult;
use crate::shared::error::AuditError;
use crate::shared::security::read_file_bytes;
use crate::shared::Result;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Header of the "used but undeclared" section of `mvn dependency:analyze`
pub const USED_UNDECLARED_MARKER: &str = "Used undeclared dependencies found:";

/// Header of the "declared but unused" section of `mvn dependency:analyze`
pub const UNUSED_DECLARED_MARKER: &str = "Unused declared dependencies found:";

/// Maven log-level tags stripped, with the single space Maven prints after
/// them, before looking at indentation
const LOG_LEVEL_TAGS: [&str; 4] = ["[INFO]", "[WARNING]", "[ERROR]", "[DEBUG]"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    UsedUndeclared,
    UnusedDeclared,
}

/// Matches the module banner, e.g. `[INFO] -------< com.example:demo >-------`
fn project_banner() -> &'static Regex {
    static BANNER: OnceLock<Regex> = OnceLock::new();
    BANNER.get_or_init(|| {
        Regex::new(r"-+<\s*([^\s<>]+:[^\s<>]+)\s*>-+").expect("banner pattern is valid")
    })
}

/// AnalysisParser service reading the text output of `mvn dependency:analyze`
///
/// Section membership is decided line by line on the text after the log-level
/// tag: a marker opens its section, every following indented non-empty line is
/// one coordinate (trimmed, kept verbatim), and the first other line closes it.
/// `[INFO] ----` separators, `BUILD SUCCESS` and other `[WARNING]` headers are
/// therefore never taken as entries.
/// Reports without markers are valid and yield empty lists.
pub struct AnalysisParser;

impl AnalysisParser {
    /// Parses a report held in memory. Never fails.
    pub fn parse_str(content: &str) -> AnalysisResult {
        let mut project_coordinate: Option<String> = None;
        let mut used_undeclared = Vec::new();
        let mut unused_declared = Vec::new();
        let mut section = Section::Outside;

        for line in content.lines() {
            if line.contains(USED_UNDECLARED_MARKER) {
                section = Section::UsedUndeclared;
                continue;
            }
            if line.contains(UNUSED_DECLARED_MARKER) {
                section = Section::UnusedDeclared;
                continue;
            }

            if section == Section::Outside {
                if project_coordinate.is_none() {
                    project_coordinate = Self::extract_project_coordinate(line);
                }
                continue;
            }

            let body = Self::strip_log_level(line);
            let is_entry = body.starts_with(char::is_whitespace) && !body.trim().is_empty();
            if !is_entry {
                section = Section::Outside;
                continue;
            }

            let coordinate = body.trim().to_string();
            match section {
                Section::UsedUndeclared => used_undeclared.push(coordinate),
                Section::UnusedDeclared => unused_declared.push(coordinate),
                Section::Outside => {}
            }
        }

        debug!(
            "Parsed analysis report: {} used undeclared, {} unused declared",
            used_undeclared.len(),
            unused_declared.len()
        );

        AnalysisResult::new(project_coordinate, used_undeclared, unused_declared)
    }

    /// Parses raw bytes
    ///
    /// # Errors
    /// Returns [`AuditError::MalformedInput`] when the bytes are not valid UTF-8
    pub fn parse_slice(bytes: &[u8]) -> Result<AnalysisResult> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            AuditError::malformed_report(
                format!("byte {}", e.valid_up_to()),
                format!("report is not valid UTF-8: {}", e),
            )
        })?;
        Ok(Self::parse_str(content))
    }

    /// Reads and parses a report from disk
    ///
    /// # Errors
    /// Returns an I/O-kind [`AuditError`] when the file cannot be read and
    /// `MalformedInput` when it cannot be decoded as text.
    pub fn parse_file(path: &Path) -> Result<AnalysisResult> {
        let bytes = read_file_bytes(path, "analysis report")?;
        Self::parse_slice(&bytes)
    }

    fn strip_log_level(line: &str) -> &str {
        match LOG_LEVEL_TAGS.iter().find_map(|tag| line.strip_prefix(tag)) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    fn extract_project_coordinate(line: &str) -> Option<String> {
        project_banner()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
