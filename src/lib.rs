//! mvn-dep-audit - dependency auditing for Maven modules
//!
//! This library reconciles the declared dependency graph
//! (`mvn dependency:tree -DoutputType=json`) with the bytecode usage report
//! (`mvn dependency:analyze`) to find used-but-undeclared dependencies,
//! unused declarations, and declared dependencies that are only present to
//! pull in a child the code actually uses.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): Tree model, parsers and analyzers
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn_dep_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = AuditDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = AuditRequest::new(
//!     InputSource::Path(PathBuf::from("tree.json")),
//!     Some(InputSource::Path(PathBuf::from("analyze.txt"))),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = AuditReadModelBuilder::build(&response, ReportView::Redundancy);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        StderrProgressReporter, TreeRenderOptions, TreeRenderer,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{
        AuditRequest, AuditResponse, InputSource, OutputFormat, ReportView,
    };
    pub use crate::application::read_models::{AuditReadModel, AuditReadModelBuilder};
    pub use crate::application::use_cases::AuditDependenciesUseCase;
    pub use crate::dependency_analysis::domain::{
        AnalysisResult, Dependency, DependencyTree, RedundancyFinding, ReportMetadata,
        TreeStatistics,
    };
    pub use crate::dependency_analysis::services::{
        AnalysisParser, RedundancyAnalyzer, TreeAnalyzer, TreeParser,
    };
    pub use crate::ports::outbound::{
        AnalysisReportReader, DependencyTreeReader, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
