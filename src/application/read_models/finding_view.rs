use crate::dependency_analysis::domain::RedundancyFinding;
use serde::Serialize;

/// View representation of a redundancy finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingView {
    pub declared_dependency: String,
    pub actually_used: Vec<String>,
    pub dependency_path: Vec<String>,
    pub severity: String,
    pub recommendation: String,
}

impl From<&RedundancyFinding> for FindingView {
    fn from(finding: &RedundancyFinding) -> Self {
        Self {
            declared_dependency: finding.declared_dependency().to_string(),
            actually_used: finding.actually_used().to_vec(),
            dependency_path: finding.dependency_path().to_vec(),
            severity: finding.severity().to_string(),
            recommendation: finding.recommendation().to_string(),
        }
    }
}

impl FindingView {
    /// Path rendered as `a -> b -> c`
    pub fn path_display(&self) -> String {
        self.dependency_path.join(" -> ")
    }
}
