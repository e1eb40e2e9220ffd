use mvn_dep_audit::prelude::*;
use std::path::Path;

/// Mock AnalysisReportReader that parses in-memory report text
pub struct MockReportReader {
    content: String,
}

impl MockReportReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Reader for a clean `dependency:analyze` run
    #[allow(dead_code)]
    pub fn clean() -> Self {
        Self::new(
            "[INFO] --------------------< com.example:demo >--------------------\n\
             [INFO] --- dependency:3.8.1:analyze (default-cli) @ demo ---\n\
             [INFO] BUILD SUCCESS\n",
        )
    }
}

impl AnalysisReportReader for MockReportReader {
    fn read_analysis_report(&self, _path: &Path) -> Result<AnalysisResult> {
        Ok(AnalysisParser::parse_str(&self.content))
    }
}
