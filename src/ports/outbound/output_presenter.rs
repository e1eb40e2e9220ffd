use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted report is written.
pub trait OutputPresenter {
    /// Presents the formatted content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link or its directory does not exist
    fn present(&self, content: &str) -> Result<()>;
}
