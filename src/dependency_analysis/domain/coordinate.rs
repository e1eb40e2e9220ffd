//! Coordinate string helpers
//!
//! Maven prints artifact coordinates in several layouts depending on the goal
//! and on whether a classifier is present:
//!
//! - `groupId:artifactId:version`
//! - `groupId:artifactId:type:version`
//! - `groupId:artifactId:type:version:scope`
//! - `groupId:artifactId:type:classifier:version:scope`

/// Derives the simple `groupId:artifactId:version` form of a coordinate.
///
/// Returns `None` for strings that do not match any known layout or that
/// carry empty segments.
pub fn to_simple_coordinate(coordinate: &str) -> Option<String> {
    let parts: Vec<&str> = coordinate.trim().split(':').collect();
    let (group_id, artifact_id, version) = match parts.as_slice() {
        [g, a, v] => (*g, *a, *v),
        [g, a, _packaging, v] => (*g, *a, *v),
        [g, a, _packaging, v, _scope] => (*g, *a, *v),
        [g, a, _packaging, _classifier, v, _scope] => (*g, *a, *v),
        _ => return None,
    };

    if group_id.is_empty() || artifact_id.is_empty() || version.is_empty() {
        return None;
    }

    Some(format!("{}:{}:{}", group_id, artifact_id, version))
}
