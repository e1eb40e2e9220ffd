use mvn_dep_audit::prelude::*;
use mvn_dep_audit::shared::error::AuditError;
use std::path::Path;

/// Mock DependencyTreeReader that parses in-memory JSON regardless of path
pub struct MockTreeReader {
    content: String,
    should_fail: bool,
}

impl MockTreeReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    /// Reader that behaves like a missing file
    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DependencyTreeReader for MockTreeReader {
    fn read_dependency_tree(&self, path: &Path) -> Result<DependencyTree> {
        if self.should_fail {
            return Err(AuditError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: "Mock tree reader configured to fail".to_string(),
            }
            .into());
        }
        TreeParser::parse_str(&self.content)
    }
}
