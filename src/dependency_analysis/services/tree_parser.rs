use crate::dependency_analysis::domain::{Dependency, DependencyTree, DEFAULT_PACKAGING};
use crate::shared::error::AuditError;
use crate::shared::security::read_file_bytes;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Node as it appears in `mvn dependency:tree -DoutputType=json`
///
/// Optional fields carry their defaults here so the conversion below never has
/// to guess. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDependencyNode {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(rename = "type", default)]
    packaging: Option<String>,
    #[serde(default)]
    classifier: Option<String>,
    #[serde(default)]
    optional: Option<OptionalFlag>,
    #[serde(default)]
    children: Vec<RawDependencyNode>,
}

/// Maven writes `"optional": "false"`; hand-written documents often use a bool.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionalFlag {
    Bool(bool),
    Text(String),
}

impl OptionalFlag {
    fn as_bool(&self) -> bool {
        match self {
            OptionalFlag::Bool(value) => *value,
            OptionalFlag::Text(text) => text.trim().eq_ignore_ascii_case("true"),
        }
    }
}

/// TreeParser service turning a dependency tree document into a [`DependencyTree`]
///
/// The whole parse fails on the first schema violation; no partial tree is returned.
pub struct TreeParser;

impl TreeParser {
    /// Parses a tree document held in memory
    ///
    /// # Errors
    /// Returns [`AuditError::MalformedInput`] when the JSON is broken, when a
    /// required field (`groupId`, `artifactId`, `version`) is missing, empty or
    /// not a string, or when `children` is not an array of objects.
    pub fn parse_str(content: &str) -> Result<DependencyTree> {
        Self::parse_slice(content.as_bytes())
    }

    /// Reads and parses a tree document from disk
    ///
    /// # Errors
    /// Returns an I/O-kind [`AuditError`] when the file cannot be read, and the
    /// errors of [`TreeParser::parse_str`] otherwise.
    pub fn parse_file(path: &Path) -> Result<DependencyTree> {
        let bytes = read_file_bytes(path, "dependency tree")?;
        Self::parse_slice(&bytes)
    }

    /// Parses raw bytes; invalid UTF-8 is reported as malformed input
    pub fn parse_slice(bytes: &[u8]) -> Result<DependencyTree> {
        let raw = Self::deserialize_raw(bytes).map_err(|e| {
            AuditError::malformed_tree(
                format!("line {}, column {}", e.line(), e.column()),
                e.to_string(),
            )
        })?;

        let root = Self::build_node(raw, "root")?;
        let tree = DependencyTree::new(root);

        debug!(
            "Parsed dependency tree: {} nodes, max depth {}",
            tree.total_dependencies(),
            tree.max_depth()
        );

        Ok(tree)
    }

    /// Nesting depth is bounded only by the tree itself; the stack grows on
    /// demand while the document is read.
    fn deserialize_raw(bytes: &[u8]) -> serde_json::Result<RawDependencyNode> {
        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        deserializer.disable_recursion_limit();
        let raw = RawDependencyNode::deserialize(serde_stacker::Deserializer::new(
            &mut deserializer,
        ))?;
        deserializer.end()?;
        Ok(raw)
    }

    /// Recursive descent, one frame per tree level. Depths are assigned by
    /// `add_child` (parent + 1), the root staying at 0.
    ///
    /// `location` names the node in error messages, e.g. `root.children[2]`.
    fn build_node(raw: RawDependencyNode, location: &str) -> Result<Dependency> {
        let group_id = Self::required(raw.group_id, location, "groupId")?;
        let artifact_id = Self::required(raw.artifact_id, location, "artifactId")?;
        let version = Self::required(raw.version, location, "version")?;

        let mut node = Dependency::new(group_id, artifact_id, version)?
            .with_scope(raw.scope.unwrap_or_default())
            .with_packaging(
                raw.packaging
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_PACKAGING.to_string()),
            )
            .with_classifier(raw.classifier.unwrap_or_default())
            .with_optional(raw.optional.map(|o| o.as_bool()).unwrap_or(false));

        for (i, child) in raw.children.into_iter().enumerate() {
            let child_location = format!("{}.children[{}]", location, i);
            let child = Self::build_node(child, &child_location)?;
            node.add_child(child);
        }

        Ok(node)
    }

    fn required(value: Option<String>, location: &str, field: &str) -> Result<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            Some(_) => Err(AuditError::malformed_tree(
                format!("{}.{}", location, field),
                format!("required field `{}` is empty", field),
            )
            .into()),
            None => Err(AuditError::malformed_tree(
                format!("{}.{}", location, field),
                format!("missing required field `{}`", field),
            )
            .into()),
        }
    }
}
