/// Ports module defining the interfaces of the hexagonal architecture
///
/// Only driven (outbound) ports exist: the CLI calls the use case directly.
pub mod outbound;
