//! Walk statistics.
//!
//! [`WalkStats`] records what a single walk saw. It is filled in by
//! [`FileWalker::walk`](crate::FileWalker::walk) and logged once the scan
//! completes; it plays no part in the printed table.

use serde::{Deserialize, Serialize};

/// Counters for a single walk.
///
/// # Examples
///
/// ```
/// use ft_scanner::WalkStats;
///
/// let mut stats = WalkStats::new();
/// stats.record_directory();
/// stats.record_file();
/// stats.record_file();
///
/// assert_eq!(stats.files, 2);
/// assert_eq!(stats.directories, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalkStats {
    /// Number of files visited.
    pub files: u64,
    /// Number of directories listed, including the root.
    pub directories: u64,
    /// Number of sub-directories skipped because recursion was disabled.
    pub skipped_directories: u64,
}

impl WalkStats {
    /// Creates a new [`WalkStats`] with all counters at zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the files counter.
    #[inline]
    pub fn record_file(&mut self) {
        self.files += 1;
    }

    /// Increments the listed-directories counter.
    #[inline]
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    /// Increments the skipped-directories counter.
    #[inline]
    pub fn record_skipped_directory(&mut self) {
        self.skipped_directories += 1;
    }
}
