use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate figures about a dependency tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStatistics {
    /// Every node, root included
    pub total_dependencies: usize,
    /// Nodes at depth 1
    pub direct_dependencies: usize,
    pub transitive_dependencies: usize,
    pub max_depth: usize,
    /// Distinct `groupId:artifactId` keys
    pub unique_artifacts: usize,
    pub scope_distribution: BTreeMap<String, usize>,
    pub type_distribution: BTreeMap<String, usize>,
    pub depth_distribution: BTreeMap<usize, usize>,
    pub version_conflicts: Vec<VersionConflict>,
}

/// Same `groupId:artifactId` present in the tree with more than one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionConflict {
    pub group_artifact: String,
    /// Distinct versions, sorted
    pub versions: Vec<String>,
}

/// A direct dependency and how many nodes it pulls in below itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitiveWeight {
    pub dependency: String,
    pub transitive_count: usize,
}

/// A direct dependency reported as unused by `dependency:analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnusedDirectDependency {
    pub coordinate: String,
    pub scope: String,
    pub transitive_count: usize,
}
