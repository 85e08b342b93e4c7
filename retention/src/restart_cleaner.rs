use std::path::PathBuf;
use std::sync::Arc;

use core_types::{CleanupStrategy, RestartIteration};

use crate::{
    error::RetentionError,
    file_system_ops::{FileSystemOps, StdFileSystemOps},
};

/// Retention manager for simulation restart directories.
///
/// Scans a base directory for subdirectories named `restore.NNNNNN`, ranks
/// them by iteration number and removes all but the `keep_count` most
/// recent ones according to the configured cleanup strategy. With
/// `dry_run` set, deletion candidates are reported but nothing on disk is
/// touched.
///
/// The cleaner is a pure configuration holder: every operation performs a
/// fresh scan and no state is cached between calls.
pub struct RestartCleaner<F: FileSystemOps = StdFileSystemOps> {
    base_path: PathBuf,
    keep_count: usize,
    strategy: CleanupStrategy,
    dry_run: bool,
    fs_ops: Arc<F>,
}

/// Outcome of one deletion candidate. In dry-run mode `success` means the
/// directory would have been deleted; no mutation happened.
#[derive(Debug, Clone, PartialEq)]
pub struct DirDeletionResult {
    pub iteration: u32,
    pub path: PathBuf,
    pub success: bool,
    pub error_message: Option<String>,
}

/// Structured result of a `cleanup` run.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupReport {
    /// Valid restart directories found by the scan
    pub found: usize,
    /// Directories retained (never more than `found`)
    pub kept: usize,
    pub dry_run: bool,
    /// One entry per deletion candidate, in ascending iteration order
    pub deletion_results: Vec<DirDeletionResult>,
}

impl CleanupReport {
    fn no_deletions(found: usize, dry_run: bool) -> Self {
        Self {
            found,
            kept: found,
            dry_run,
            deletion_results: Vec::new(),
        }
    }

    /// Number of directories actually removed from disk
    pub fn deleted_count(&self) -> usize {
        if self.dry_run {
            return 0;
        }
        self.deletion_results.iter().filter(|r| r.success).count()
    }

    /// Deletion candidates that failed, in ascending iteration order
    pub fn failed(&self) -> Vec<&DirDeletionResult> {
        self.deletion_results.iter().filter(|r| !r.success).collect()
    }
}

impl RestartCleaner<StdFileSystemOps> {
    /// Creates a cleaner operating on the real file system.
    ///
    /// Fails with `RetentionError::ConfigurationError` when `keep_count`
    /// is zero, `strategy_name` is not a known strategy, or `base_path`
    /// does not reference an existing directory.
    pub fn new(
        base_path: impl Into<PathBuf>,
        keep_count: usize,
        strategy_name: &str,
        dry_run: bool,
    ) -> Result<Self, RetentionError> {
        Self::new_with_fs_ops(
            base_path,
            keep_count,
            strategy_name,
            dry_run,
            Arc::new(StdFileSystemOps),
        )
    }
}

impl<F: FileSystemOps> RestartCleaner<F> {
    pub fn new_with_fs_ops(
        base_path: impl Into<PathBuf>,
        keep_count: usize,
        strategy_name: &str,
        dry_run: bool,
        fs_ops: Arc<F>,
    ) -> Result<Self, RetentionError> {
        if keep_count == 0 {
            return Err(RetentionError::ConfigurationError(
                "keep count must be positive".to_string(),
            ));
        }

        let strategy = CleanupStrategy::try_from(strategy_name)?;

        let base_path = base_path.into();
        if !fs_ops.exists(&base_path) {
            return Err(RetentionError::ConfigurationError(format!(
                "restart base path does not exist: {}",
                base_path.display()
            )));
        }
        if !fs_ops.is_dir(&base_path) {
            return Err(RetentionError::ConfigurationError(format!(
                "restart base path is not a directory: {}",
                base_path.display()
            )));
        }

        Ok(Self {
            base_path,
            keep_count,
            strategy,
            dry_run,
            fs_ops,
        })
    }

    /// Runs the configured cleanup strategy and returns what happened.
    ///
    /// A failure to delete one directory is recorded in the report and
    /// does not abort the rest of the batch; only a failed scan of the
    /// base path is returned as an error.
    pub fn cleanup(&self) -> Result<CleanupReport, RetentionError> {
        tracing::info!(
            "Starting cleanup of {} (keeping {} most recent)",
            self.base_path.display(),
            self.keep_count
        );

        match self.strategy {
            CleanupStrategy::KeepRecentN => self.keep_recent_n(),
        }
    }

    /// Returns the iteration numbers of all valid restart directories
    /// under the base path, sorted ascending.
    ///
    /// This is an advisory query: scan errors are logged and degrade to an
    /// empty list instead of propagating.
    pub fn get_available_iterations(&self) -> Vec<u32> {
        match self.get_all_restart_dirs() {
            Ok(mut restart_dirs) => {
                restart_dirs.sort();
                restart_dirs.into_iter().map(|dir| dir.iteration).collect()
            }
            Err(e) => {
                tracing::error!("Error scanning restart directories: {}", e);
                Vec::new()
            }
        }
    }

    /// Lists the immediate subdirectories of the base path whose name is a
    /// valid restart directory name. Non-directory entries are excluded
    /// regardless of name.
    fn get_all_restart_dirs(&self) -> Result<Vec<RestartIteration>, RetentionError> {
        let entries = self.fs_ops.read_dir(&self.base_path).map_err(|e| {
            RetentionError::ScanError(format!(
                "Failed to read restart base path {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let mut restart_dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                RetentionError::ScanError(format!("Failed to read directory entry: {}", e))
            })?;
            if !entry.is_dir {
                continue;
            }
            if let Some(restart_dir) = RestartIteration::from_path(entry.path) {
                restart_dirs.push(restart_dir);
            }
        }

        Ok(restart_dirs)
    }

    fn keep_recent_n(&self) -> Result<CleanupReport, RetentionError> {
        let mut restart_dirs = self.get_all_restart_dirs()?;

        if restart_dirs.is_empty() {
            tracing::info!("No restart directories found");
            return Ok(CleanupReport::no_deletions(0, self.dry_run));
        }

        let found = restart_dirs.len();
        tracing::info!("Found {} restart directories", found);

        restart_dirs.sort();

        if found <= self.keep_count {
            tracing::info!("No cleanup needed, keeping all {} directories", found);
            return Ok(CleanupReport::no_deletions(found, self.dry_run));
        }

        let num_to_delete = found - self.keep_count;
        tracing::info!(
            "Deleting {} old restart directories (keeping {} most recent)",
            num_to_delete,
            self.keep_count
        );

        let mut deletion_results = Vec::with_capacity(num_to_delete);
        for restart_dir in restart_dirs.into_iter().take(num_to_delete) {
            deletion_results.push(self.delete_restart_dir(restart_dir));
        }

        Ok(CleanupReport {
            found,
            kept: self.keep_count,
            dry_run: self.dry_run,
            deletion_results,
        })
    }

    fn delete_restart_dir(&self, restart_dir: RestartIteration) -> DirDeletionResult {
        if self.dry_run {
            tracing::info!("DRY RUN: Would delete {}", restart_dir.path.display());
            return DirDeletionResult {
                iteration: restart_dir.iteration,
                path: restart_dir.path,
                success: true,
                error_message: None,
            };
        }

        match self.fs_ops.remove_dir_all(&restart_dir.path) {
            Ok(_) => {
                tracing::info!("Deleted {}", restart_dir.path.display());
                DirDeletionResult {
                    iteration: restart_dir.iteration,
                    path: restart_dir.path,
                    success: true,
                    error_message: None,
                }
            }
            Err(e) => {
                // Log and continue, a single failure must not abort the batch
                tracing::warn!("Failed to delete {}: {}", restart_dir.path.display(), e);
                DirDeletionResult {
                    iteration: restart_dir.iteration,
                    path: restart_dir.path,
                    success: false,
                    error_message: Some(e.to_string()),
                }
            }
        }
    }
}
