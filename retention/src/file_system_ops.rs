//! File system operations abstraction for testing
//!
//! This module provides a trait-based abstraction over the file system
//! operations the cleaner needs, allowing the retention logic to be tested
//! without touching the real file system.
//!
//! # Usage in Production
//!
//! ```rust,ignore
//! use retention::restart_cleaner::RestartCleaner;
//!
//! // Uses the default implementation (StdFileSystemOps)
//! let cleaner = RestartCleaner::new("/path/to/restarts", 5, "KEEP_RECENT_N", false)?;
//! ```
//!
//! # Usage in Tests
//!
//! ```rust,ignore
//! use retention::file_system_ops::mock::MockFileSystemOps;
//! use retention::restart_cleaner::RestartCleaner;
//!
//! let mock_fs = Arc::new(MockFileSystemOps::new());
//! mock_fs.add_dir("/restarts");
//! mock_fs.add_entry("/restarts/restore.000100", true);
//!
//! let cleaner = RestartCleaner::new_with_fs_ops(
//!     "/restarts", 1, "KEEP_RECENT_N", false, mock_fs.clone(),
//! )?;
//!
//! // Call the cleaner methods...
//!
//! // Verify the mock's state
//! assert!(mock_fs.was_deleted("/restarts/restore.000100"));
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// One immediate child of the scanned base directory.
// Our own entry type instead of std::fs::DirEntry for easier mocking; the
// boxed iterator avoids associated type complications in the trait.
#[derive(Debug, Clone)]
pub struct SimpleDirEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Trait for file system operations to enable testing
pub trait FileSystemOps: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List the immediate children of a directory
    fn read_dir(
        &self,
        path: &Path,
    ) -> io::Result<Box<dyn Iterator<Item = io::Result<SimpleDirEntry>>>>;

    /// Remove a directory and everything under it
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Production implementation using std::fs
#[derive(Debug, Clone, Copy)]
pub struct StdFileSystemOps;

impl FileSystemOps for StdFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(
        &self,
        path: &Path,
    ) -> io::Result<Box<dyn Iterator<Item = io::Result<SimpleDirEntry>>>> {
        let iter = std::fs::read_dir(path)?;
        Ok(Box::new(iter.map(|res| {
            res.and_then(|entry| {
                let file_type = entry.file_type()?;
                Ok(SimpleDirEntry {
                    path: entry.path(),
                    is_dir: file_type.is_dir(),
                })
            })
        })))
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }
}
