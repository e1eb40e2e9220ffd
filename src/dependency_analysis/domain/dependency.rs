use crate::shared::Result;
use serde::Serialize;

/// Packaging type assumed when the tree document omits `type`
pub const DEFAULT_PACKAGING: &str = "jar";

/// Dependency entity representing one artifact occurrence in the tree
///
/// Each node exclusively owns its children. There is no parent pointer: the
/// route back to the root is held by the owning [`super::DependencyTree`] as a
/// [`super::NodePath`], so serializing a node can never recurse into a cycle.
///
/// Depth is maintained by [`Dependency::add_child`], which keeps every child
/// exactly one level below its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    group_id: String,
    artifact_id: String,
    version: String,
    scope: String,
    #[serde(rename = "type")]
    packaging: String,
    classifier: String,
    optional: bool,
    depth: usize,
    children: Vec<Dependency>,
}

impl Dependency {
    /// Creates a root-level node (depth 0) with default scope, type and classifier
    pub fn new(group_id: String, artifact_id: String, version: String) -> Result<Self> {
        if group_id.trim().is_empty() {
            anyhow::bail!("groupId cannot be empty");
        }
        if artifact_id.trim().is_empty() {
            anyhow::bail!("artifactId cannot be empty");
        }
        if version.trim().is_empty() {
            anyhow::bail!("version cannot be empty");
        }

        Ok(Self {
            group_id,
            artifact_id,
            version,
            scope: String::new(),
            packaging: DEFAULT_PACKAGING.to_string(),
            classifier: String::new(),
            optional: false,
            depth: 0,
            children: Vec::new(),
        })
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Scope as printed by Maven; empty for the project root
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn children(&self) -> &[Dependency] {
        &self.children
    }

    /// Full coordinate: `groupId:artifactId:type:version:scope`
    pub fn coordinate(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.packaging, self.version, self.scope
        )
    }

    /// Simple coordinate: `groupId:artifactId:version`
    pub fn simple_coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// `groupId:artifactId`, the key used to spot version conflicts
    pub fn group_artifact(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// True when the full or the simple coordinate equals `coordinate`
    pub fn matches(&self, coordinate: &str) -> bool {
        self.simple_coordinate() == coordinate || self.coordinate() == coordinate
    }

    /// Appends a child, shifting the child's subtree so that it sits one level below `self`.
    ///
    /// When this node belongs to a [`super::DependencyTree`], the tree's index is
    /// stale until [`super::DependencyTree::rebuild_index`] is called.
    pub fn add_child(&mut self, mut child: Dependency) {
        let expected = self.depth + 1;
        if child.depth != expected {
            child.shift_depth(expected);
        }
        self.children.push(child);
    }

    /// Re-roots this subtree at `new_depth`, keeping the relative depths below it.
    fn shift_depth(&mut self, new_depth: usize) {
        let old_depth = self.depth;
        let mut stack: Vec<&mut Dependency> = vec![self];
        while let Some(node) = stack.pop() {
            node.depth = node.depth - old_depth + new_depth;
            stack.extend(node.children.iter_mut());
        }
    }

    /// Number of nodes below this one (children, grandchildren, ...)
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Dependency> = self.children.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Finds the first node in pre-order (starting with `self`) whose full or
    /// simple coordinate equals `target`.
    ///
    /// Returns the chain from `self` to the match, both inclusive. Only the first
    /// occurrence is reported; use the tree index for every occurrence.
    pub fn find_path_to(&self, target: &str) -> Option<Vec<&Dependency>> {
        let mut path: Vec<&Dependency> = Vec::new();
        let mut stack: Vec<(&Dependency, usize)> = vec![(self, 0)];

        while let Some((node, level)) = stack.pop() {
            path.truncate(level);
            path.push(node);

            if node.matches(target) {
                return Some(path);
            }

            for child in node.children.iter().rev() {
                stack.push((child, level + 1));
            }
        }

        None
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.simple_coordinate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(group: &str, artifact: &str, version: &str) -> Dependency {
        Dependency::new(group.to_string(), artifact.to_string(), version.to_string()).unwrap()
    }

    #[test]
    fn test_new_applies_defaults() {
        let node = dep("org.slf4j", "slf4j-api", "2.0.9");
        assert_eq!(node.scope(), "");
        assert_eq!(node.packaging(), "jar");
        assert_eq!(node.classifier(), "");
        assert!(!node.is_optional());
        assert_eq!(node.depth(), 0);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_new_rejects_empty_fields() {
        assert!(Dependency::new("".into(), "a".into(), "1".into()).is_err());
        assert!(Dependency::new("g".into(), " ".into(), "1".into()).is_err());
        assert!(Dependency::new("g".into(), "a".into(), "".into()).is_err());
    }

    #[test]
    fn test_coordinates() {
        let node = dep("org.slf4j", "slf4j-api", "2.0.9").with_scope("compile");
        assert_eq!(node.coordinate(), "org.slf4j:slf4j-api:jar:2.0.9:compile");
        assert_eq!(node.simple_coordinate(), "org.slf4j:slf4j-api:2.0.9");
        assert_eq!(node.group_artifact(), "org.slf4j:slf4j-api");
        assert!(node.matches("org.slf4j:slf4j-api:2.0.9"));
        assert!(node.matches("org.slf4j:slf4j-api:jar:2.0.9:compile"));
        assert!(!node.matches("org.slf4j:slf4j-api:jar:2.0.9:test"));
    }

    #[test]
    fn test_add_child_assigns_depth_to_whole_subtree() {
        let mut grandchild_parent = dep("g", "b", "1");
        grandchild_parent.add_child(dep("g", "c", "1"));
        assert_eq!(grandchild_parent.children()[0].depth(), 1);

        let mut root = dep("g", "root", "1");
        root.add_child(grandchild_parent);

        let child = &root.children()[0];
        assert_eq!(child.depth(), 1);
        assert_eq!(child.children()[0].depth(), 2);
    }

    #[test]
    fn test_descendant_count() {
        let mut b = dep("g", "b", "1");
        b.add_child(dep("g", "c", "1"));
        b.add_child(dep("g", "d", "1"));
        let mut root = dep("g", "a", "1");
        root.add_child(b);

        assert_eq!(root.descendant_count(), 3);
        assert_eq!(root.children()[0].children()[0].descendant_count(), 0);
    }

    #[test]
    fn test_find_path_to_returns_chain() {
        let mut b = dep("g", "b", "1");
        b.add_child(dep("g", "c", "1"));
        let mut root = dep("g", "a", "1");
        root.add_child(dep("g", "x", "1"));
        root.add_child(b);

        let path = root.find_path_to("g:c:1").unwrap();
        let coords: Vec<String> = path.iter().map(|d| d.simple_coordinate()).collect();
        assert_eq!(coords, vec!["g:a:1", "g:b:1", "g:c:1"]);
    }

    #[test]
    fn test_find_path_to_self() {
        let root = dep("g", "a", "1");
        let path = root.find_path_to("g:a:1").unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_find_path_to_missing() {
        let mut root = dep("g", "a", "1");
        root.add_child(dep("g", "b", "1"));
        assert!(root.find_path_to("g:zzz:1").is_none());
    }

    #[test]
    fn test_find_path_to_prefers_first_in_pre_order() {
        let mut left = dep("g", "left", "1");
        left.add_child(dep("g", "shared", "1").with_scope("compile"));
        let mut root = dep("g", "a", "1");
        root.add_child(left);
        root.add_child(dep("g", "shared", "1").with_scope("runtime"));

        let path = root.find_path_to("g:shared:1").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[2].scope(), "compile");
    }

    #[test]
    fn test_serialization_uses_maven_field_names() {
        let node = dep("g", "a", "1").with_scope("test");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["groupId"], "g");
        assert_eq!(json["artifactId"], "a");
        assert_eq!(json["type"], "jar");
        assert_eq!(json["scope"], "test");
        assert!(json.get("parent").is_none());
    }
}
