//! Error conversion helpers for file reads and writes
//!
//! Provides an extension trait that attaches the path to I/O failures.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// A missing file becomes `ApplicationError::NotFound`, so the CLI can
    /// report it as missing input rather than a generic I/O failure.
    ///
    /// # Example
    /// ```ignore
    /// self.fs.read_to_string(path)
    ///     .with_path_context("read dataset", path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::NotFound(path.to_path_buf()),
            _ => ApplicationError::OperationFailed {
                context: format!("{}: {}", action, path.display()),
                source: Box::new(e),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn given_missing_file_error_when_adding_context_then_not_found() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result
            .with_path_context("read", Path::new("plantings.json"))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(p) if p == PathBuf::from("plantings.json")));
    }

    #[test]
    fn given_other_io_error_when_adding_context_then_operation_failed_with_path() {
        let result: io::Result<()> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result
            .with_path_context("write csv", Path::new("out.csv"))
            .unwrap_err();
        assert_eq!(err.to_string(), "operation failed: write csv: out.csv");
    }
}
