/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_report_reader;
mod mock_tree_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_reader::MockReportReader;
pub use mock_tree_reader::MockTreeReader;
