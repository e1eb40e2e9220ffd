use serde::Serialize;

/// AnalysisResult value object holding the two issue lists of a
/// `mvn dependency:analyze` report
///
/// Entries are kept verbatim and in report order; duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    project_coordinate: Option<String>,
    used_undeclared: Vec<String>,
    unused_declared: Vec<String>,
}

impl AnalysisResult {
    pub fn new(
        project_coordinate: Option<String>,
        used_undeclared: Vec<String>,
        unused_declared: Vec<String>,
    ) -> Self {
        Self {
            project_coordinate,
            used_undeclared,
            unused_declared,
        }
    }

    /// `groupId:artifactId` of the analysed module, when the report banner carries it
    pub fn project_coordinate(&self) -> Option<&str> {
        self.project_coordinate.as_deref()
    }

    /// Dependencies referenced by the code but only available transitively
    pub fn used_undeclared(&self) -> &[String] {
        &self.used_undeclared
    }

    /// Dependencies declared in the POM but never referenced by the code
    pub fn unused_declared(&self) -> &[String] {
        &self.unused_declared
    }

    pub fn issue_count(&self) -> usize {
        self.used_undeclared.len() + self.unused_declared.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}
