use crate::application::dto::{AuditRequest, AuditResponse, InputSource};
use crate::dependency_analysis::domain::{AnalysisResult, DependencyTree, RedundancyFinding};
use crate::dependency_analysis::services::{
    AnalysisParser, RedundancyAnalyzer, ReportGenerator, TreeAnalyzer, TreeParser,
};
use crate::ports::outbound::{AnalysisReportReader, DependencyTreeReader, ProgressReporter};
use crate::shared::Result;
use tracing::debug;

/// AuditDependenciesUseCase - Core use case for auditing a Maven module
///
/// Loads the dependency tree and, when requested, the `dependency:analyze`
/// report, then derives statistics and redundancy findings. Infrastructure
/// is injected through generics.
///
/// # Type Parameters
/// * `TR` - DependencyTreeReader implementation
/// * `AR` - AnalysisReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AuditDependenciesUseCase<TR, AR, PR> {
    tree_reader: TR,
    report_reader: AR,
    progress_reporter: PR,
}

impl<TR, AR, PR> AuditDependenciesUseCase<TR, AR, PR>
where
    TR: DependencyTreeReader,
    AR: AnalysisReportReader,
    PR: ProgressReporter,
{
    pub fn new(tree_reader: TR, report_reader: AR, progress_reporter: PR) -> Self {
        Self {
            tree_reader,
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the audit
    ///
    /// # Errors
    /// Fails when either input cannot be read or parsed. Finding redundant
    /// dependencies is not an error.
    pub fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Load the dependency tree
        let tree = self.load_tree(&request.tree)?;

        // Step 2: Load the usage report if one was given
        let analysis = match &request.analysis {
            Some(source) => Some(self.load_analysis(source)?),
            None => None,
        };

        // Step 3: Tree statistics
        let statistics = TreeAnalyzer::statistics(&tree);
        let heaviest = TreeAnalyzer::most_transitive(&tree, request.top_n);

        // Step 4: Cross-reference tree and report
        let (findings, unused_direct) = match &analysis {
            Some(report) => (
                self.detect_redundancy(&tree, report, &request),
                TreeAnalyzer::unused_direct(&tree, report),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Ok(AuditResponse {
            tree,
            analysis,
            statistics,
            findings,
            unused_direct,
            heaviest,
            metadata: ReportGenerator::generate_default_metadata(),
        })
    }

    fn load_tree(&self, source: &InputSource) -> Result<DependencyTree> {
        self.progress_reporter.start_step(&format!(
            "📖 Loading dependency tree from: {}",
            source.describe()
        ));

        let result = match source {
            InputSource::Path(path) => self.tree_reader.read_dependency_tree(path),
            InputSource::Inline(content) => TreeParser::parse_str(content),
        };
        self.progress_reporter.finish_step();
        let tree = result?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} dependencies (max depth {})",
            tree.total_dependencies(),
            tree.max_depth()
        ));
        Ok(tree)
    }

    fn load_analysis(&self, source: &InputSource) -> Result<AnalysisResult> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency analysis from: {}",
            source.describe()
        ));

        let analysis = match source {
            InputSource::Path(path) => self.report_reader.read_analysis_report(path)?,
            InputSource::Inline(content) => AnalysisParser::parse_str(content),
        };

        self.progress_reporter.report(&format!(
            "✅ Found {} used undeclared and {} unused declared dependencies",
            analysis.used_undeclared().len(),
            analysis.unused_declared().len()
        ));
        Ok(analysis)
    }

    fn detect_redundancy(
        &self,
        tree: &DependencyTree,
        analysis: &AnalysisResult,
        request: &AuditRequest,
    ) -> Vec<RedundancyFinding> {
        let analyzer = if request.ignored_coordinates.is_empty() {
            RedundancyAnalyzer::new()
        } else {
            debug!(
                "Ignoring {} coordinate(s) from configuration",
                request.ignored_coordinates.len()
            );
            RedundancyAnalyzer::with_ignored(request.ignored_coordinates.iter().cloned())
        };

        let findings = analyzer.analyze(tree, analysis);
        if findings.is_empty() {
            self.progress_reporter
                .report("✅ No redundant dependencies detected");
        } else {
            self.progress_reporter.report_error(&format!(
                "⚠️  Found {} potentially redundant dependency declaration(s)",
                findings.len()
            ));
        }
        findings
    }
}
