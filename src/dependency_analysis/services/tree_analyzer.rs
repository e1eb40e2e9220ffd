use crate::dependency_analysis::domain::coordinate::to_simple_coordinate;
use crate::dependency_analysis::domain::{
    AnalysisResult, Dependency, DependencyTree, TransitiveWeight, TreeStatistics,
    UnusedDirectDependency, VersionConflict,
};
use std::collections::{BTreeMap, BTreeSet};

/// TreeAnalyzer service computing descriptive figures about a tree
///
/// Everything here is derived on demand from [`DependencyTree::flatten`];
/// nothing is cached on the tree.
pub struct TreeAnalyzer;

impl TreeAnalyzer {
    pub fn statistics(tree: &DependencyTree) -> TreeStatistics {
        let nodes = tree.flatten();

        let mut type_distribution = BTreeMap::new();
        let mut depth_distribution = BTreeMap::new();
        let mut unique = BTreeSet::new();
        for node in &nodes {
            *type_distribution
                .entry(node.packaging().to_string())
                .or_insert(0) += 1;
            *depth_distribution.entry(node.depth()).or_insert(0) += 1;
            unique.insert(node.group_artifact());
        }

        let total = nodes.len();
        let direct = tree.direct_dependencies().len();

        TreeStatistics {
            total_dependencies: total,
            direct_dependencies: direct,
            transitive_dependencies: total - direct,
            max_depth: tree.max_depth(),
            unique_artifacts: unique.len(),
            scope_distribution: tree.scope_distribution(),
            type_distribution,
            depth_distribution,
            version_conflicts: Self::version_conflicts(tree),
        }
    }

    /// Artifacts present with more than one version, sorted by `groupId:artifactId`
    pub fn version_conflicts(tree: &DependencyTree) -> Vec<VersionConflict> {
        let mut versions: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
        for node in tree.flatten() {
            versions
                .entry(node.group_artifact())
                .or_default()
                .insert(node.version());
        }

        versions
            .into_iter()
            .filter(|(_, v)| v.len() > 1)
            .map(|(group_artifact, v)| VersionConflict {
                group_artifact,
                versions: v.into_iter().map(str::to_string).collect(),
            })
            .collect()
    }

    /// Every root-to-node chain ending at a node that matches `coordinate`, in pre-order
    pub fn dependency_paths<'t>(
        tree: &'t DependencyTree,
        coordinate: &str,
    ) -> Vec<Vec<&'t Dependency>> {
        tree.occurrences(coordinate)
            .iter()
            .filter_map(|path| tree.path_of(path))
            .collect()
    }

    /// Direct dependencies ranked by how many nodes they pull in, heaviest first
    ///
    /// Ties keep document order.
    pub fn most_transitive(tree: &DependencyTree, limit: usize) -> Vec<TransitiveWeight> {
        let mut weights: Vec<TransitiveWeight> = tree
            .direct_dependencies()
            .iter()
            .map(|d| TransitiveWeight {
                dependency: d.simple_coordinate(),
                transitive_count: d.descendant_count(),
            })
            .collect();

        weights.sort_by(|a, b| b.transitive_count.cmp(&a.transitive_count));
        weights.truncate(limit);
        weights
    }

    /// Direct dependencies that the usage report lists as unused declared
    ///
    /// Report entries are compared verbatim and in simple form, so classifier
    /// layouts still match their tree node.
    pub fn unused_direct(
        tree: &DependencyTree,
        analysis: &AnalysisResult,
    ) -> Vec<UnusedDirectDependency> {
        let unused: BTreeSet<String> = analysis
            .unused_declared()
            .iter()
            .flat_map(|entry| [Some(entry.clone()), to_simple_coordinate(entry)])
            .flatten()
            .collect();

        tree.direct_dependencies()
            .iter()
            .filter(|d| unused.contains(&d.simple_coordinate()) || unused.contains(&d.coordinate()))
            .map(|d| UnusedDirectDependency {
                coordinate: d.simple_coordinate(),
                scope: d.scope().to_string(),
                transitive_count: d.descendant_count(),
            })
            .collect()
    }
}
