/// ProgressReporter port for user-facing progress messages
///
/// Messages go to stderr in the CLI so they never mix with the report on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate step (e.g. parsing a large tree)
    fn start_step(&self, message: &str);

    /// Finishes the step started last, if any
    fn finish_step(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
