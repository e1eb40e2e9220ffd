use crate::application::read_models::AuditReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter producing a pretty-printed JSON report
///
/// The document mirrors [`AuditReadModel`]; sections left out by the report
/// view are absent rather than `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(model).context("Failed to serialize report to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
