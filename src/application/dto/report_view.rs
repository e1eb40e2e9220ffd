/// Which sections a rendered report contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportView {
    /// Statistics, issue lists, findings, version conflicts and the dependency table
    Full,
    /// Statistics, issue lists, findings and version conflicts
    Summary,
    /// Redundancy findings only
    Redundancy,
}

impl ReportView {
    pub fn includes_statistics(self) -> bool {
        !matches!(self, ReportView::Redundancy)
    }

    pub fn includes_dependency_table(self) -> bool {
        matches!(self, ReportView::Full)
    }
}
