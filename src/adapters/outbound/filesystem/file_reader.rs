use crate::dependency_analysis::domain::{AnalysisResult, DependencyTree};
use crate::dependency_analysis::services::{AnalysisParser, TreeParser};
use crate::ports::outbound::{AnalysisReportReader, DependencyTreeReader};
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading input documents from disk
///
/// Implements both reader ports. Every read goes through the checks in
/// [`crate::shared::security`]: no symbolic links, regular files only, and a
/// size cap.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeReader for FileSystemReader {
    fn read_dependency_tree(&self, path: &Path) -> Result<DependencyTree> {
        TreeParser::parse_file(path)
    }
}

impl AnalysisReportReader for FileSystemReader {
    fn read_analysis_report(&self, path: &Path) -> Result<AnalysisResult> {
        AnalysisParser::parse_file(path)
    }
}
