use crate::application::read_models::AuditReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering an audit report
///
/// Implementations exist for plain text, JSON and Markdown.
pub trait ReportFormatter {
    /// Formats the audit read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &AuditReadModel) -> Result<String>;
}
