pub mod analysis_result;
pub mod coordinate;
pub mod dependency;
pub mod dependency_tree;
pub mod redundancy_finding;
pub mod report_metadata;
pub mod tree_statistics;

pub use analysis_result::AnalysisResult;
pub use dependency::{Dependency, DEFAULT_PACKAGING};
pub use dependency_tree::{DependencyRow, DependencyTree, NodePath};
pub use redundancy_finding::{RedundancyFinding, Severity};
pub use report_metadata::ReportMetadata;
pub use tree_statistics::{
    TransitiveWeight, TreeStatistics, UnusedDirectDependency, VersionConflict,
};
