/// Console adapters: progress on stderr and the colored tree view
mod progress_reporter;
mod tree_renderer;

pub use progress_reporter::StderrProgressReporter;
pub use tree_renderer::{TreeRenderOptions, TreeRenderer};
