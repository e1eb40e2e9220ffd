/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_request;
mod audit_response;
mod output_format;
mod report_view;

pub use audit_request::{AuditRequest, InputSource};
pub use audit_response::AuditResponse;
pub use output_format::OutputFormat;
pub use report_view::ReportView;
