/// Dependency analysis core - domain model and pure services
///
/// Nothing in this module performs I/O except the `parse_file` conveniences
/// of the parsers, which delegate to the shared security helpers.
pub mod domain;
pub mod services;
