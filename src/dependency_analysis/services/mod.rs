mod analysis_parser;
mod redundancy_analyzer;
mod report_generator;
mod tree_analyzer;
mod tree_parser;

pub use analysis_parser::{AnalysisParser, UNUSED_DECLARED_MARKER, USED_UNDECLARED_MARKER};
pub use redundancy_analyzer::RedundancyAnalyzer;
pub use report_generator::ReportGenerator;
pub use tree_analyzer::TreeAnalyzer;
pub use tree_parser::TreeParser;
