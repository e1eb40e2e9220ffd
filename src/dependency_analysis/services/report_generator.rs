use crate::dependency_analysis::domain::ReportMetadata;
use chrono::Utc;

/// ReportGenerator service stamping exported reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with the current UTC time in RFC 3339 form
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Metadata naming this tool, with the compile-time crate version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
