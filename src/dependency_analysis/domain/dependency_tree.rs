use super::Dependency;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Route from the tree root to a node, as child indices
///
/// This is the non-owning back-reference of a node: its parent is the route
/// with the last index dropped. An empty route designates the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Depth of the designated node (root = 0)
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// One row of the tabular projection of a tree, in pre-order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRow {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
    #[serde(rename = "type")]
    pub packaging: String,
    pub depth: usize,
    pub coordinate: String,
    pub simple_coordinate: String,
}

/// DependencyTree aggregate owning the root node and the coordinate index
///
/// The index maps both the full and the simple coordinate of every node to
/// the routes of all its occurrences, in pre-order. It is built by [`DependencyTree::new`].
///
/// # Index staleness
/// After mutating the tree through [`DependencyTree::root_mut`] the index no
/// longer reflects the tree. Queries made before [`DependencyTree::rebuild_index`]
/// return stale results; this is not detected.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyTree {
    root: Dependency,
    #[serde(skip)]
    index: HashMap<String, Vec<NodePath>>,
}

impl DependencyTree {
    pub fn new(root: Dependency) -> Self {
        let mut tree = Self {
            root,
            index: HashMap::new(),
        };
        tree.rebuild_index();
        tree
    }

    pub fn root(&self) -> &Dependency {
        &self.root
    }

    /// Mutable access to the root. Call [`DependencyTree::rebuild_index`] afterwards.
    pub fn root_mut(&mut self) -> &mut Dependency {
        &mut self.root
    }

    /// Rebuilds the coordinate index with a single pre-order walk. Idempotent.
    pub fn rebuild_index(&mut self) {
        let mut index: HashMap<String, Vec<NodePath>> = HashMap::new();
        for (path, node) in self.walk() {
            index
                .entry(node.coordinate())
                .or_default()
                .push(path.clone());
            index.entry(node.simple_coordinate()).or_default().push(path);
        }
        self.index = index;
    }

    /// Pre-order walk with an explicit stack, yielding each node with its route
    fn walk(&self) -> Vec<(NodePath, &Dependency)> {
        let mut visited = Vec::new();
        let mut stack: Vec<(NodePath, &Dependency)> = vec![(NodePath::root(), &self.root)];

        while let Some((path, node)) = stack.pop() {
            for (i, child) in node.children().iter().enumerate().rev() {
                stack.push((path.child(i), child));
            }
            visited.push((path, node));
        }

        visited
    }

    /// Every node in depth-first pre-order: root first, then children in document order
    pub fn flatten(&self) -> Vec<&Dependency> {
        let mut nodes = Vec::new();
        let mut stack: Vec<&Dependency> = vec![&self.root];

        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.children().iter().rev());
        }

        nodes
    }

    /// Routes of every node whose full or simple coordinate equals `coordinate`
    pub fn occurrences(&self, coordinate: &str) -> &[NodePath] {
        self.index
            .get(coordinate)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All nodes matching `coordinate`, in pre-order. Empty when there is no match.
    pub fn find_dependency(&self, coordinate: &str) -> Vec<&Dependency> {
        self.occurrences(coordinate)
            .iter()
            .filter_map(|path| self.node_at(path))
            .collect()
    }

    /// Resolves a route to its node
    pub fn node_at(&self, path: &NodePath) -> Option<&Dependency> {
        let mut node = &self.root;
        for &i in path.indices() {
            node = node.children().get(i)?;
        }
        Some(node)
    }

    /// Resolves a route to the chain of nodes from the root to the designated node
    pub fn path_of(&self, path: &NodePath) -> Option<Vec<&Dependency>> {
        let mut node = &self.root;
        let mut chain = vec![node];
        for &i in path.indices() {
            node = node.children().get(i)?;
            chain.push(node);
        }
        Some(chain)
    }

    /// First root-to-node chain (pre-order) reaching `target`; `None` when absent
    ///
    /// `target` may be a full or a simple coordinate. A simple coordinate ignores
    /// type, classifier and scope, so it can stop at an earlier node that carries
    /// the same `groupId:artifactId:version` under a different scope.
    pub fn find_path_to(&self, target: &str) -> Option<Vec<&Dependency>> {
        self.root.find_path_to(target)
    }

    /// Number of nodes, root included
    pub fn total_dependencies(&self) -> usize {
        self.flatten().len()
    }

    pub fn max_depth(&self) -> usize {
        self.flatten()
            .iter()
            .map(|d| d.depth())
            .max()
            .unwrap_or(0)
    }

    /// Nodes at depth 1
    pub fn direct_dependencies(&self) -> &[Dependency] {
        self.root.children()
    }

    /// Node count per scope, empty scope included
    pub fn scope_distribution(&self) -> BTreeMap<String, usize> {
        let mut distribution = BTreeMap::new();
        for node in self.flatten() {
            *distribution.entry(node.scope().to_string()).or_insert(0) += 1;
        }
        distribution
    }

    /// Tabular projection for bulk export
    pub fn to_rows(&self) -> Vec<DependencyRow> {
        self.flatten()
            .into_iter()
            .map(|d| DependencyRow {
                group_id: d.group_id().to_string(),
                artifact_id: d.artifact_id().to_string(),
                version: d.version().to_string(),
                scope: d.scope().to_string(),
                packaging: d.packaging().to_string(),
                depth: d.depth(),
                coordinate: d.coordinate(),
                simple_coordinate: d.simple_coordinate(),
            })
            .collect()
    }
}
