use crate::dependency_analysis::domain::{
    AnalysisResult, DependencyTree, RedundancyFinding, ReportMetadata, TransitiveWeight,
    TreeStatistics, UnusedDirectDependency,
};

/// AuditResponse - Internal response DTO for the dependency audit use case
///
/// When no analysis report was requested, `analysis` is `None` and the
/// report-derived lists are empty.
#[derive(Debug, Clone)]
pub struct AuditResponse {
    pub tree: DependencyTree,
    pub analysis: Option<AnalysisResult>,
    pub statistics: TreeStatistics,
    pub findings: Vec<RedundancyFinding>,
    pub unused_direct: Vec<UnusedDirectDependency>,
    pub heaviest: Vec<TransitiveWeight>,
    pub metadata: ReportMetadata,
}

impl AuditResponse {
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}
