use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
/// Dependency trees of very large reactors stay far below this.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "dependency tree") for error messages
///
/// # Errors
/// Returns an [`AuditError`] if:
/// - The path doesn't exist (`InputNotFound`)
/// - The path is a symbolic link (`SecurityError`)
/// - The path is not a regular file (`Io`)
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "The {} file does not exist. Check the path passed on the command line.",
                    file_description
                ),
            }
        } else {
            AuditError::Io {
                source_name: file_description.to_string(),
                path: path.to_path_buf(),
                details: format!("Failed to read metadata: {}", e),
            }
        }
    })?;

    if metadata.is_symlink() {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input path is a symbolic link".to_string(),
            hint: "Pass the path of the regular file the link points to".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(AuditError::Io {
            source_name: file_description.to_string(),
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", path.display()),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns a `SecurityError` if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the reactor build and audit modules one at a time".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a whole input file into memory after the security checks above.
///
/// Decoding is left to the caller so each parser can report undecodable
/// content as malformed input of its own kind.
pub fn read_file_bytes(path: &Path, file_description: &str) -> Result<Vec<u8>> {
    let file_size = validate_regular_file(path, file_description)?;
    validate_file_size(file_size, path, MAX_FILE_SIZE)?;

    fs::read(path).map_err(|e| {
        AuditError::Io {
            source_name: file_description.to_string(),
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
