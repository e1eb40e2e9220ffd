//! Builder for constructing AuditReadModel from an audit response

use super::audit_read_model::{AuditReadModel, IssuesView, ProjectView, ReportMetadataView};
use super::finding_view::FindingView;
use crate::application::dto::{AuditResponse, ReportView};
use crate::dependency_analysis::domain::ReportMetadata;

/// Builder for constructing AuditReadModel from domain objects
pub struct AuditReadModelBuilder;

impl AuditReadModelBuilder {
    /// Builds the read model, keeping only the sections `view` asks for
    pub fn build(response: &AuditResponse, view: ReportView) -> AuditReadModel {
        let project = ProjectView {
            coordinate: response.tree.root().simple_coordinate(),
            analyzed_module: response
                .analysis
                .as_ref()
                .and_then(|a| a.project_coordinate())
                .map(str::to_string),
        };

        let findings = response
            .analysis
            .as_ref()
            .map(|_| response.findings.iter().map(FindingView::from).collect());

        let issues = match (&response.analysis, view) {
            (Some(analysis), ReportView::Full | ReportView::Summary) => Some(IssuesView {
                used_undeclared: analysis.used_undeclared().to_vec(),
                unused_declared: analysis.unused_declared().to_vec(),
                unused_direct: response.unused_direct.clone(),
            }),
            _ => None,
        };

        let (statistics, heaviest_dependencies) = if view.includes_statistics() {
            (Some(response.statistics.clone()), response.heaviest.clone())
        } else {
            (None, Vec::new())
        };

        let dependencies = view
            .includes_dependency_table()
            .then(|| response.tree.to_rows());

        AuditReadModel {
            view,
            metadata: Self::build_metadata(&response.metadata),
            project,
            statistics,
            heaviest_dependencies,
            issues,
            findings,
            dependencies,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::sample_response;
    use super::*;

    #[test]
    fn test_full_view_has_every_section() {
        let model = AuditReadModelBuilder::build(&sample_response(true), ReportView::Full);

        assert_eq!(model.project.coordinate, "com.example:demo:0.0.1");
        assert_eq!(model.project.analyzed_module.as_deref(), Some("com.example:demo"));
        assert_eq!(model.statistics.as_ref().unwrap().total_dependencies, 6);
        assert_eq!(model.dependencies.as_ref().unwrap().len(), 6);
        assert_eq!(model.finding_count(), 1);
        let issues = model.issues.as_ref().unwrap();
        assert_eq!(issues.used_undeclared.len(), 1);
        assert_eq!(issues.unused_direct.len(), 1);
        assert_eq!(model.metadata.timestamp, "2026-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_summary_view_omits_dependency_table() {
        let model = AuditReadModelBuilder::build(&sample_response(true), ReportView::Summary);
        assert!(model.dependencies.is_none());
        assert!(model.statistics.is_some());
        assert!(model.issues.is_some());
    }

    #[test]
    fn test_redundancy_view_keeps_findings_only() {
        let model =
            AuditReadModelBuilder::build(&sample_response(true), ReportView::Redundancy);
        assert!(model.statistics.is_none());
        assert!(model.heaviest_dependencies.is_empty());
        assert!(model.issues.is_none());
        assert!(model.dependencies.is_none());
        let findings = model.findings.as_ref().unwrap();
        assert_eq!(
            findings[0].path_display(),
            "com.example:demo:0.0.1 -> org.springframework.boot:spring-boot-starter-webmvc:4.0.1"
        );
    }

    #[test]
    fn test_tree_only_response_has_no_findings_section() {
        let model = AuditReadModelBuilder::build(&sample_response(false), ReportView::Full);
        assert!(model.findings.is_none());
        assert!(model.issues.is_none());
        assert!(model.project.analyzed_module.is_none());
    }
}
