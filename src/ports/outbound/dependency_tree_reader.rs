use crate::dependency_analysis::domain::DependencyTree;
use crate::shared::Result;
use std::path::Path;

/// DependencyTreeReader port for loading a `mvn dependency:tree` JSON document
pub trait DependencyTreeReader {
    /// Reads and parses the tree document at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The document is not a well-formed dependency tree
    fn read_dependency_tree(&self, path: &Path) -> Result<DependencyTree>;
}
