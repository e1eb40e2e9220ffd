use serde::Serialize;

/// Severity of a redundancy finding
///
/// Every finding currently rates `High`; the field leaves room for graded severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
        }
    }
}

/// A declared-but-unused dependency whose immediate children are the ones actually used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedundancyFinding {
    declared_dependency: String,
    actually_used: Vec<String>,
    dependency_path: Vec<String>,
    severity: Severity,
    recommendation: String,
}

impl RedundancyFinding {
    /// Creates a finding, or `None` when there is no used child to justify it
    ///
    /// # Arguments
    /// * `declared_dependency` - The unused declared coordinate, as given in the report
    /// * `actually_used` - Used-undeclared coordinates matched among its children, in child order
    /// * `dependency_path` - Simple coordinates from the tree root down to the declared dependency
    pub fn new(
        declared_dependency: String,
        actually_used: Vec<String>,
        dependency_path: Vec<String>,
    ) -> Option<Self> {
        if actually_used.is_empty() {
            return None;
        }

        let recommendation = Self::recommend(&declared_dependency, &actually_used);
        Some(Self {
            declared_dependency,
            actually_used,
            dependency_path,
            severity: Severity::High,
            recommendation,
        })
    }

    fn recommend(declared: &str, used: &[String]) -> String {
        let used_list = used
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Remove '{}' and declare {} directly", declared, used_list)
    }

    pub fn declared_dependency(&self) -> &str {
        &self.declared_dependency
    }

    pub fn actually_used(&self) -> &[String] {
        &self.actually_used
    }

    pub fn dependency_path(&self) -> &[String] {
        &self.dependency_path
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }
}
