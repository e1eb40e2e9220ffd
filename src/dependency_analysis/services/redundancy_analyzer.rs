use crate::dependency_analysis::domain::coordinate::to_simple_coordinate;
use crate::dependency_analysis::domain::{
    AnalysisResult, DependencyTree, NodePath, RedundancyFinding,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// RedundancyAnalyzer service cross-referencing a tree with a usage report
///
/// A finding is raised for a declared-but-unused dependency A when one of A's
/// immediate children in the tree is reported as used-but-undeclared. The usual
/// cause is a starter or BOM-style artifact declared only to obtain a child.
///
/// This is a pure transformation: no I/O, and the same inputs always give the
/// same findings in the same order.
#[derive(Debug, Default)]
pub struct RedundancyAnalyzer {
    ignored: HashSet<String>,
}

impl RedundancyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer that never reports the given declared coordinates
    ///
    /// Entries are compared both verbatim and by their simple
    /// `groupId:artifactId:version` form.
    pub fn with_ignored<I, S>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ignored = HashSet::new();
        for coordinate in coordinates {
            let coordinate: String = coordinate.into();
            if let Some(simple) = to_simple_coordinate(&coordinate) {
                ignored.insert(simple);
            }
            ignored.insert(coordinate);
        }
        Self { ignored }
    }

    /// Produces the findings, ordered by the report's unused-declared order and
    /// then by tree pre-order of the occurrences.
    pub fn analyze(
        &self,
        tree: &DependencyTree,
        analysis: &AnalysisResult,
    ) -> Vec<RedundancyFinding> {
        let used_undeclared = Self::used_lookup(analysis);

        let mut findings = Vec::new();

        for declared in analysis.unused_declared() {
            if self.is_ignored(declared) {
                debug!("Ignoring finding candidate {} (listed in ignore_findings)", declared);
                continue;
            }

            let occurrences = Self::resolve_occurrences(tree, declared);
            if occurrences.is_empty() {
                info!("Declared dependency {} not found in the dependency tree", declared);
                continue;
            }

            for occurrence in occurrences {
                if let Some(finding) =
                    Self::examine_occurrence(tree, declared, occurrence, &used_undeclared)
                {
                    findings.push(finding);
                }
            }
        }

        debug!("Redundancy analysis produced {} finding(s)", findings.len());
        findings
    }

    fn is_ignored(&self, declared: &str) -> bool {
        if self.ignored.is_empty() {
            return false;
        }
        self.ignored.contains(declared)
            || to_simple_coordinate(declared).is_some_and(|simple| self.ignored.contains(&simple))
    }

    /// Keys each used-undeclared entry verbatim and by simple form, pointing back
    /// at the entry as printed. The first entry wins a shared key.
    fn used_lookup(analysis: &AnalysisResult) -> HashMap<String, &str> {
        let mut lookup = HashMap::new();
        for entry in analysis.used_undeclared() {
            lookup.entry(entry.clone()).or_insert(entry.as_str());
            if let Some(simple) = to_simple_coordinate(entry) {
                lookup.entry(simple).or_insert(entry.as_str());
            }
        }
        lookup
    }

    /// Looks the coordinate up as given, then by its simple form
    fn resolve_occurrences<'t>(tree: &'t DependencyTree, declared: &str) -> &'t [NodePath] {
        let direct = tree.occurrences(declared);
        if !direct.is_empty() {
            return direct;
        }
        match to_simple_coordinate(declared) {
            Some(simple) if simple != declared => tree.occurrences(&simple),
            _ => &[],
        }
    }

    fn examine_occurrence(
        tree: &DependencyTree,
        declared: &str,
        occurrence: &NodePath,
        used_undeclared: &HashMap<String, &str>,
    ) -> Option<RedundancyFinding> {
        let node = tree.node_at(occurrence)?;

        let mut actually_used: Vec<String> = Vec::new();
        for child in node.children() {
            let matched = used_undeclared
                .get(&child.coordinate())
                .or_else(|| used_undeclared.get(&child.simple_coordinate()))
                .copied();

            if let Some(entry) = matched {
                if !actually_used.iter().any(|u| u == entry) {
                    actually_used.push(entry.to_string());
                }
            }
        }

        let dependency_path = tree
            .path_of(occurrence)?
            .iter()
            .map(|d| d.simple_coordinate())
            .collect();

        RedundancyFinding::new(declared.to_string(), actually_used, dependency_path)
    }
}
