/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures travel as an [`crate::shared::error::AuditError`] at the root of the chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
