//! Directory traversal.
//!
//! This module provides [`FileWalker`], which uses the `ignore` crate's
//! iterative walker to visit every file below a root directory.
//!
//! # Behaviour
//!
//! - Nothing is filtered: hidden files and `.gitignore`d paths are counted
//! - Symbolic links are not followed; a link is visited like a file. The
//!   root itself is always walked, even when it is a link to a directory
//! - Entries are visited in file-name order, so repeated walks agree
//! - The first read error aborts the walk
//!
//! # Examples
//!
//! ```ignore
//! use ft_scanner::FileWalker;
//! use camino::Utf8Path;
//!
//! let walker = FileWalker::new(Utf8Path::new("./src"))?.with_recursive(false);
//! let stats = walker.walk(|path| println!("Found: {}", path.display()))?;
//! println!("{} files", stats.files);
//! ```

use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use ft_core::TallyConfig;
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::ScanError;
use crate::stats::WalkStats;

/// A depth-first walker over the files of a directory tree.
///
/// The underlying walker keeps an explicit stack of open listings rather
/// than recursing, so very deep trees do not grow the call stack.
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// The root directory to walk.
    root: Utf8PathBuf,
    /// Whether to descend into sub-directories of the root.
    recursive: bool,
}

impl FileWalker {
    /// Creates a new recursive walker for the given root directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if the root path doesn't exist or
    /// isn't a directory.
    pub fn new(root: &Utf8Path) -> Result<Self, ScanError> {
        Self::from_config(&TallyConfig::new(root))
    }

    /// Creates a walker for the root and recursion setting of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if the root path doesn't exist or
    /// isn't a directory.
    pub fn from_config(config: &TallyConfig) -> Result<Self, ScanError> {
        config.validate()?;

        Ok(Self {
            root: config.root.clone(),
            recursive: config.recursive,
        })
    }

    /// Configures whether sub-directories are descended into.
    ///
    /// When disabled, sub-directories of the root are skipped entirely.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Walks the tree, calling `visit` once for every non-directory entry.
    ///
    /// Paths are passed as plain [`Path`]s: file names need not be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] on the first directory that cannot be
    /// read. `visit` may already have been called for earlier entries when
    /// an error is returned.
    pub fn walk<F>(&self, mut visit: F) -> Result<WalkStats, ScanError>
    where
        F: FnMut(&Path),
    {
        let mut stats = WalkStats::new();

        for result in self.build_walker() {
            let entry = result?;

            // A symlinked root reports a link file type but is still listed.
            if entry.depth() == 0 {
                stats.record_directory();
                continue;
            }

            // Only stdin entries lack a file type.
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                if self.recursive {
                    stats.record_directory();
                } else {
                    debug!(path = %entry.path().display(), "Skipping sub-directory");
                    stats.record_skipped_directory();
                }
                continue;
            }

            visit(entry.path());
            stats.record_file();
        }

        Ok(stats)
    }

    /// Collects the paths of all files the walk visits, in walk order.
    #[cfg(test)]
    fn collect_paths(&self) -> Result<Vec<std::path::PathBuf>, ScanError> {
        let mut paths = Vec::new();
        self.walk(|path| paths.push(path.to_owned()))?;
        Ok(paths)
    }

    /// Builds the ignore walker with configured settings.
    fn build_walker(&self) -> ignore::Walk {
        WalkBuilder::new(&self.root)
            // Count everything: no hidden-file or ignore-file filtering
            .standard_filters(false)
            .follow_links(false)
            .max_depth(if self.recursive { None } else { Some(1) })
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
    }

    #[cfg(test)]
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    #[cfg(test)]
    const fn is_recursive(&self) -> bool {
        self.recursive
    }
}
