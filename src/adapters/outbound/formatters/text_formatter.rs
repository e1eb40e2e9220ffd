use crate::application::read_models::{AuditReadModel, FindingView, IssuesView};
use crate::dependency_analysis::domain::TreeStatistics;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Width of the label column in the statistics block
const LABEL_WIDTH: usize = 25;

/// TextFormatter adapter producing the console report
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().blue().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.color {
            text.bold().yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn good(&self, text: &str) -> String {
        if self.color {
            text.bold().green().to_string()
        } else {
            text.to_string()
        }
    }

    fn bad(&self, text: &str) -> String {
        if self.color {
            text.bold().red().to_string()
        } else {
            text.to_string()
        }
    }
}

impl TextFormatter {
    fn render_project(&self, out: &mut String, model: &AuditReadModel) -> std::fmt::Result {
        write!(out, "{} {}", self.heading("Project:"), model.project.coordinate)?;
        if let Some(module) = &model.project.analyzed_module {
            write!(out, " (analyzed module {})", module)?;
        }
        writeln!(out)?;
        writeln!(out)
    }

    fn render_statistics(&self, out: &mut String, stats: &TreeStatistics) -> std::fmt::Result {
        let rows = [
            ("Total Dependencies:", stats.total_dependencies),
            ("Direct Dependencies:", stats.direct_dependencies),
            ("Transitive Dependencies:", stats.transitive_dependencies),
            ("Max Depth:", stats.max_depth),
            ("Unique Artifacts:", stats.unique_artifacts),
        ];
        for (label, value) in rows {
            writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH)?;
        }
        writeln!(out)?;

        self.render_distribution(out, "Scope Distribution:", &stats.scope_distribution)?;
        self.render_distribution(out, "Type Distribution:", &stats.type_distribution)?;

        if !stats.version_conflicts.is_empty() {
            writeln!(
                out,
                "{}",
                self.warning(&format!(
                    "Version Conflicts ({}):",
                    stats.version_conflicts.len()
                ))
            )?;
            for conflict in &stats.version_conflicts {
                writeln!(
                    out,
                    "  • {}: {}",
                    conflict.group_artifact,
                    conflict.versions.join(", ")
                )?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Empty keys (the project root's scope) are left out
    fn render_distribution(
        &self,
        out: &mut String,
        title: &str,
        distribution: &BTreeMap<String, usize>,
    ) -> std::fmt::Result {
        writeln!(out, "{}", self.heading(title))?;
        for (key, count) in distribution.iter().filter(|(k, _)| !k.is_empty()) {
            writeln!(out, "  {:<12}{}", key, count)?;
        }
        writeln!(out)
    }

    fn render_heaviest(&self, out: &mut String, model: &AuditReadModel) -> std::fmt::Result {
        if model.heaviest_dependencies.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", self.heading("Heaviest Direct Dependencies:"))?;
        for weight in &model.heaviest_dependencies {
            writeln!(
                out,
                "  {} ({} transitive)",
                weight.dependency, weight.transitive_count
            )?;
        }
        writeln!(out)
    }

    fn render_issues(&self, out: &mut String, issues: &IssuesView) -> std::fmt::Result {
        let lists = [
            ("Used Undeclared Dependencies", &issues.used_undeclared),
            ("Unused Declared Dependencies", &issues.unused_declared),
        ];
        for (title, entries) in lists {
            if entries.is_empty() {
                continue;
            }
            writeln!(
                out,
                "{}",
                self.warning(&format!("{} ({}):", title, entries.len()))
            )?;
            for entry in entries {
                writeln!(out, "  • {}", entry)?;
            }
            writeln!(out)?;
        }

        if !issues.unused_direct.is_empty() {
            writeln!(out, "{}", self.warning("Unused Direct Dependencies:"))?;
            for unused in &issues.unused_direct {
                writeln!(
                    out,
                    "  • {} [{}] pulls in {} transitive dependencies",
                    unused.coordinate, unused.scope, unused.transitive_count
                )?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_findings(&self, out: &mut String, findings: &[FindingView]) -> std::fmt::Result {
        writeln!(out, "{}", self.heading("Redundancy Analysis:"))?;
        if findings.is_empty() {
            writeln!(out, "  {}", self.good("No redundancy issues detected."))?;
            return writeln!(out);
        }

        writeln!(
            out,
            "  Found {} potential redundancy issue(s).",
            findings.len()
        )?;
        writeln!(out)?;
        for (i, finding) in findings.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} {}",
                i + 1,
                self.bad("Redundant Dependency:"),
                finding.declared_dependency
            )?;
            writeln!(out, "     Actually Used: {}", finding.actually_used.join(", "))?;
            writeln!(out, "     Recommendation: {}", finding.recommendation)?;
            if !finding.dependency_path.is_empty() {
                writeln!(out, "     Dependency Path: {}", finding.path_display())?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_dependencies(&self, out: &mut String, model: &AuditReadModel) -> std::fmt::Result {
        let Some(rows) = &model.dependencies else {
            return Ok(());
        };
        writeln!(out, "{}", self.heading("All Dependencies:"))?;
        for row in rows {
            let indent = "  ".repeat(row.depth + 1);
            if row.scope.is_empty() {
                writeln!(out, "{}{}", indent, row.simple_coordinate)?;
            } else {
                writeln!(out, "{}{} ({})", indent, row.simple_coordinate, row.scope)?;
            }
        }
        writeln!(out)
    }

    fn render(&self, model: &AuditReadModel) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();
        self.render_project(&mut out, model)?;
        if let Some(stats) = &model.statistics {
            self.render_statistics(&mut out, stats)?;
        }
        self.render_heaviest(&mut out, model)?;
        if let Some(issues) = &model.issues {
            self.render_issues(&mut out, issues)?;
        }
        if let Some(findings) = &model.findings {
            self.render_findings(&mut out, findings)?;
        }
        self.render_dependencies(&mut out, model)?;
        Ok(out)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        self.render(model)
            .map_err(|e| anyhow::anyhow!("Failed to render text report: {}", e))
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
        TextFormatter::new(false).format(&model).unwrap()
    }

    #[test]
    fn test_summary_report() {
        let output = render(ReportView::Summary, true);

        assert!(output.starts_with("Project: com.example:demo:0.0.1 (analyzed module com.example:demo)"));
        assert!(output.contains("Total Dependencies:      6"));
        assert!(output.contains("Direct Dependencies:     3"));
        assert!(output.contains("Scope Distribution:\n  compile     3\n  test        2\n"));
        assert!(output.contains("  • org.slf4j:slf4j-api: 1.7.36, 2.0.9"));
        assert!(output.contains("Used Undeclared Dependencies (1):"));
        assert!(output.contains("Unused Direct Dependencies:"));
        assert!(output.contains("Found 1 potential redundancy issue(s)."));
        assert!(output.contains(
            "Recommendation: Remove 'org.springframework.boot:spring-boot-starter-webmvc:jar:4.0.1:compile' \
             and declare 'org.springframework.boot:spring-boot-starter:jar:4.0.1:compile' directly"
        ));
        assert!(!output.contains("All Dependencies:"));
    }

    #[test]
    fn test_full_report_lists_dependencies() {
        let output = render(ReportView::Full, true);
        assert!(output.contains("All Dependencies:\n  com.example:demo:0.0.1\n"));
        assert!(output.contains("      org.springframework.boot:spring-boot-starter:4.0.1 (compile)"));
    }

    #[test]
    fn test_redundancy_report() {
        let output = render(ReportView::Redundancy, true);
        assert!(!output.contains("Total Dependencies"));
        assert!(output.contains("1. Redundant Dependency:"));
        assert!(output.contains(
            "Dependency Path: com.example:demo:0.0.1 -> org.springframework.boot:spring-boot-starter-webmvc:4.0.1"
        ));
    }

    #[test]
    fn test_no_findings_message() {
        let mut response = sample_response(true);
        response.findings.clear();
        let model = AuditReadModelBuilder::build(&response, ReportView::Redundancy);
        let output = TextFormatter::new(false).format(&model).unwrap();
        assert!(output.contains("No redundancy issues detected."));
    }

    #[test]
    fn test_tree_only_report_has_no_redundancy_section() {
        let output = render(ReportView::Summary, false);
        assert!(!output.contains("Redundancy Analysis"));
        assert!(output.contains("Heaviest Direct Dependencies:"));
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        assert!(!render(ReportView::Full, true).contains('\u{1b}'));
    }
}
