//! Audit read model for report rendering

use super::finding_view::FindingView;
use crate::application::dto::ReportView;
use crate::dependency_analysis::domain::{
    DependencyRow, TransitiveWeight, TreeStatistics, UnusedDirectDependency,
};
use serde::Serialize;

/// Main read model for an audit report
///
/// Sections that the selected [`ReportView`] leaves out are `None` (or empty)
/// and are skipped by every formatter, JSON included.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReadModel {
    #[serde(skip)]
    pub view: ReportView,
    pub metadata: ReportMetadataView,
    pub project: ProjectView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<TreeStatistics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub heaviest_dependencies: Vec<TransitiveWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<IssuesView>,
    /// Present whenever an analysis report was loaded, even when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<Vec<FindingView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<DependencyRow>>,
}

impl AuditReadModel {
    pub fn finding_count(&self) -> usize {
        self.findings.as_ref().map_or(0, Vec::len)
    }
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// The audited module
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    /// Simple coordinate of the tree root
    pub coordinate: String,
    /// `groupId:artifactId` from the analysis report banner, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzed_module: Option<String>,
}

/// The two `dependency:analyze` lists plus the direct dependencies among the unused ones
#[derive(Debug, Clone, Serialize)]
pub struct IssuesView {
    pub used_undeclared: Vec<String>,
    pub unused_declared: Vec<String>,
    pub unused_direct: Vec<UnusedDirectDependency>,
}
