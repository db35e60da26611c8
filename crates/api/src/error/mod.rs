//! Error handling for the key generation pipeline

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

/// Extension trait for attaching kemgen context to foreign results.
pub trait ResultExt<T> {
    /// Map an I/O failure on `path` to [`Error::FileWriteError`].
    fn for_file(self, path: &std::path::Path) -> Result<T>;
}

impl<T> ResultExt<T> for core::result::Result<T, std::io::Error> {
    fn for_file(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| Error::file_write(path, &e))
    }
}
