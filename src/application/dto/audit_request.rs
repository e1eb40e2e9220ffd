use std::path::PathBuf;

/// Where an input document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file read through the reader ports
    Path(PathBuf),
    /// Document text already in memory
    Inline(String),
}

impl InputSource {
    /// Human-readable origin for progress messages
    pub fn describe(&self) -> String {
        match self {
            InputSource::Path(path) => path.display().to_string(),
            InputSource::Inline(_) => "<inline>".to_string(),
        }
    }
}

/// AuditRequest - Internal request DTO for the dependency audit use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// The `mvn dependency:tree -DoutputType=json` document
    pub tree: InputSource,
    /// The `mvn dependency:analyze` output; tree-only audits leave it out
    pub analysis: Option<InputSource>,
    /// Declared coordinates never reported as redundant
    pub ignored_coordinates: Vec<String>,
    /// How many direct dependencies to rank by transitive weight
    pub top_n: usize,
}

impl AuditRequest {
    /// Default size of the "heaviest direct dependencies" ranking
    pub const DEFAULT_TOP_N: usize = 5;

    pub fn new(tree: InputSource, analysis: Option<InputSource>) -> Self {
        Self {
            tree,
            analysis,
            ignored_coordinates: Vec::new(),
            top_n: Self::DEFAULT_TOP_N,
        }
    }

    pub fn with_ignored_coordinates(mut self, coordinates: Vec<String>) -> Self {
        self.ignored_coordinates = coordinates;
        self
    }
}
