//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for the formatters.

mod audit_read_model;
mod audit_read_model_builder;
mod finding_view;

pub use audit_read_model::{AuditReadModel, IssuesView, ProjectView, ReportMetadataView};
pub use audit_read_model_builder::AuditReadModelBuilder;
pub use finding_view::FindingView;

#[cfg(test)]
pub(crate) use audit_read_model_builder::test_support;
