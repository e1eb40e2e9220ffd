use crate::application::read_models::{AuditReadModel, FindingView, IssuesView};
use crate::dependency_analysis::domain::{DependencyRow, TreeStatistics};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the full dependency list
const DEPENDENCY_TABLE_HEADER: &str =
    "| Depth | Group ID | Artifact ID | Version | Scope | Type |\n";

/// Markdown table separator line for the dependency list
const DEPENDENCY_TABLE_SEPARATOR: &str =
    "|-------|----------|-------------|---------|-------|------|\n";

/// Markdown table header for redundancy findings
const FINDING_TABLE_HEADER: &str =
    "| # | Declared Dependency | Actually Used | Severity | Dependency Path |\n";

/// Markdown table separator line for redundancy findings
const FINDING_TABLE_SEPARATOR: &str =
    "|---|---------------------|---------------|----------|-----------------|\n";

/// MarkdownFormatter adapter generating a Markdown audit report
///
/// Sections follow the order overview, issues, findings, version conflicts,
/// dependency table. Sections the report view leaves out are omitted.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn code(text: &str) -> String {
        format!("`{}`", Self::escape_markdown_table_cell(text))
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &AuditReadModel) {
        output.push_str("# Maven Dependency Audit\n\n");
        output.push_str(&format!("- **Project:** {}\n", Self::code(&model.project.coordinate)));
        if let Some(module) = &model.project.analyzed_module {
            output.push_str(&format!("- **Analyzed module:** {}\n", Self::code(module)));
        }
        output.push_str(&format!(
            "- **Generated:** {} by {} {}\n\n",
            model.metadata.timestamp, model.metadata.tool_name, model.metadata.tool_version
        ));
    }

    fn render_overview(&self, output: &mut String, stats: &TreeStatistics) {
        output.push_str("## Overview\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        let rows = [
            ("Total dependencies", stats.total_dependencies),
            ("Direct dependencies", stats.direct_dependencies),
            ("Transitive dependencies", stats.transitive_dependencies),
            ("Max depth", stats.max_depth),
            ("Unique artifacts", stats.unique_artifacts),
            ("Version conflicts", stats.version_conflicts.len()),
        ];
        for (metric, value) in rows {
            output.push_str(&format!("| {} | {} |\n", metric, value));
        }
        output.push('\n');

        output.push_str("### Scope Distribution\n\n");
        output.push_str("| Scope | Count |\n");
        output.push_str("|-------|-------|\n");
        for (scope, count) in stats.scope_distribution.iter().filter(|(s, _)| !s.is_empty()) {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(scope),
                count
            ));
        }
        output.push('\n');
    }

    fn render_heaviest(&self, output: &mut String, model: &AuditReadModel) {
        if model.heaviest_dependencies.is_empty() {
            return;
        }
        output.push_str("### Heaviest Direct Dependencies\n\n");
        output.push_str("| Dependency | Transitive Dependencies |\n");
        output.push_str("|------------|-------------------------|\n");
        for weight in &model.heaviest_dependencies {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::code(&weight.dependency),
                weight.transitive_count
            ));
        }
        output.push('\n');
    }

    fn render_issues(&self, output: &mut String, issues: &IssuesView) {
        output.push_str("## Dependency Issues\n\n");

        let lists = [
            ("Used Undeclared Dependencies", &issues.used_undeclared),
            ("Unused Declared Dependencies", &issues.unused_declared),
        ];
        for (title, entries) in lists {
            output.push_str(&format!("### {} ({})\n\n", title, entries.len()));
            if entries.is_empty() {
                output.push_str("*None.*\n\n");
                continue;
            }
            for entry in entries {
                output.push_str(&format!("- {}\n", Self::code(entry)));
            }
            output.push('\n');
        }

        if !issues.unused_direct.is_empty() {
            output.push_str("### Unused Direct Dependencies\n\n");
            output.push_str("| Dependency | Scope | Transitive Dependencies |\n");
            output.push_str("|------------|-------|-------------------------|\n");
            for unused in &issues.unused_direct {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    Self::code(&unused.coordinate),
                    Self::escape_markdown_table_cell(&unused.scope),
                    unused.transitive_count
                ));
            }
            output.push('\n');
        }
    }

    fn render_findings(&self, output: &mut String, findings: &[FindingView]) {
        output.push_str("## Redundant Dependencies\n\n");
        if findings.is_empty() {
            output.push_str("No redundancy issues detected.\n\n");
            return;
        }

        output.push_str(
            "Declared dependencies reported as unused whose direct children are used by the code.\n\n",
        );
        output.push_str(FINDING_TABLE_HEADER);
        output.push_str(FINDING_TABLE_SEPARATOR);
        for (i, finding) in findings.iter().enumerate() {
            let used = finding
                .actually_used
                .iter()
                .map(|c| Self::code(c))
                .collect::<Vec<_>>()
                .join("<br>");
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                i + 1,
                Self::code(&finding.declared_dependency),
                used,
                finding.severity,
                Self::escape_markdown_table_cell(&finding.path_display())
            ));
        }
        output.push('\n');

        output.push_str("### Recommendations\n\n");
        for finding in findings {
            output.push_str(&format!(
                "- {}\n",
                Self::escape_markdown_table_cell(&finding.recommendation)
            ));
        }
        output.push('\n');
    }

    fn render_version_conflicts(&self, output: &mut String, stats: &TreeStatistics) {
        if stats.version_conflicts.is_empty() {
            return;
        }
        output.push_str("## Version Conflicts\n\n");
        output.push_str("| Artifact | Versions |\n");
        output.push_str("|----------|----------|\n");
        for conflict in &stats.version_conflicts {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::code(&conflict.group_artifact),
                Self::escape_markdown_table_cell(&conflict.versions.join(", "))
            ));
        }
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, rows: &[DependencyRow]) {
        output.push_str("## All Dependencies\n\n");
        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                row.depth,
                Self::escape_markdown_table_cell(&row.group_id),
                Self::escape_markdown_table_cell(&row.artifact_id),
                Self::escape_markdown_table_cell(&row.version),
                Self::escape_markdown_table_cell(&row.scope),
                Self::escape_markdown_table_cell(&row.packaging)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        if let Some(stats) = &model.statistics {
            self.render_overview(&mut output, stats);
        }
        self.render_heaviest(&mut output, model);
        if let Some(issues) = &model.issues {
            self.render_issues(&mut output, issues);
        }
        if let Some(findings) = &model.findings {
            self.render_findings(&mut output, findings);
        }
        if let Some(stats) = &model.statistics {
            self.render_version_conflicts(&mut output, stats);
        }
        if let Some(rows) = &model.dependencies {
            self.render_dependencies(&mut output, rows);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ReportView;
    use crate::application::read_models::test_support::sample_response;
    use crate::application::read_models::AuditReadModelBuilder;

    fn render(view: ReportView, with_analysis: bool) -> String {
        let model = AuditReadModelBuilder::build(&sample_response(with_analysis), view);
        MarkdownFormatter::new().format(&model).unwrap()
    }

    #[test]
    fn test_full_report_sections_in_order() {
        let output = render(ReportView::Full, true);

        let sections = [
            "# Maven Dependency Audit",
            "## Overview",
            "## Dependency Issues",
            "## Redundant Dependencies",
            "## Version Conflicts",
            "## All Dependencies",
        ];
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| output.find(s).unwrap_or_else(|| panic!("missing {}", s)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_overview_table() {
        let output = render(ReportView::Summary, true);
        assert!(output.contains("| Total dependencies | 6 |"));
        assert!(output.contains("| Version conflicts | 1 |"));
        assert!(output.contains("| test | 2 |"));
        assert!(output.contains("- **Analyzed module:** `com.example:demo`"));
    }

    #[test]
    fn test_findings_table() {
        let output = render(ReportView::Redundancy, true);
        assert!(output.contains(FINDING_TABLE_HEADER));
        assert!(output.contains(
            "| 1 | `org.springframework.boot:spring-boot-starter-webmvc:jar:4.0.1:compile` | \
             `org.springframework.boot:spring-boot-starter:jar:4.0.1:compile` | high | \
             com.example:demo:0.0.1 -> org.springframework.boot:spring-boot-starter-webmvc:4.0.1 |"
        ));
        assert!(output.contains("### Recommendations"));
        assert!(!output.contains("## Overview"));
    }

    #[test]
    fn test_dependency_table_rows() {
        let output = render(ReportView::Full, false);
        assert!(output.contains(DEPENDENCY_TABLE_HEADER));
        assert!(output.contains("| 1 | junit | junit | 4.13.2 | test | jar |"));
        assert!(!output.contains("## Redundant Dependencies"));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }
}
