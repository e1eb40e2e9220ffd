use crate::dependency_analysis::domain::AnalysisResult;
use crate::shared::Result;
use std::path::Path;

/// AnalysisReportReader port for loading the text output of `mvn dependency:analyze`
pub trait AnalysisReportReader {
    /// Reads and parses the report at `path`
    ///
    /// A report without any issue sections is not an error.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid UTF-8
    fn read_analysis_report(&self, path: &Path) -> Result<AnalysisResult>;
}
