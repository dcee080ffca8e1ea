//! Error types for the ft-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! while walking the tree and writing the report.

use ft_core::ConfigError;

/// Errors that can occur during a tally run.
///
/// There is no recoverable category: every error aborts the run before any
/// part of the table is printed (or, for [`ScanError::Output`], while it is
/// being printed).
///
/// # Examples
///
/// ```
/// use ft_scanner::ScanError;
///
/// fn describe(err: &ScanError) -> String {
///     match err {
///         ScanError::Walk(e) => format!("walk error: {e}"),
///         ScanError::Config(e) => format!("config error: {e}"),
///         ScanError::Output(e) => format!("output error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to read a directory during the walk.
    ///
    /// Covers permission errors, entries vanishing mid-walk, and any other
    /// I/O failure reported by the walker.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// The configuration is unusable (root missing or not a directory).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to write the report.
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

impl ScanError {
    /// Creates a new [`ScanError::Output`] error.
    #[inline]
    pub const fn output(source: std::io::Error) -> Self {
        Self::Output(source)
    }
}
