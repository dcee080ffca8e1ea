//! Configuration structures for the ftally tool.
//!
//! This module provides:
//!
//! - [`GroupBy`] - Which dimension files are tallied under
//! - [`SortOrder`] - Direction of the ranking by count
//! - [`TallyConfig`] - Root configuration, built once from the command line
//!
//! [`TallyConfig`] is constructed exactly once at start-up and then passed by
//! reference to the walker, ranker and reporter. It is never mutated after
//! the walk begins.

use std::fmt;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The dimension used as the aggregation key.
///
/// # Examples
///
/// ```
/// use ft_core::GroupBy;
///
/// assert_eq!("ext".parse::<GroupBy>().unwrap(), GroupBy::Extension);
/// assert_eq!("D".parse::<GroupBy>().unwrap(), GroupBy::Directory);
/// assert!("foo".parse::<GroupBy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Group files by their extension (`.rs`, `.md`, or empty).
    #[default]
    Extension,
    /// Group files by the directory that directly contains them.
    Directory,
}

impl GroupBy {
    /// Accepted spellings, in the order they are listed in error messages.
    pub const ALIASES: &'static [&'static str] = &["ext", "e", "dir", "d"];

    /// Returns the column label used in the report header.
    ///
    /// # Examples
    ///
    /// ```
    /// use ft_core::GroupBy;
    ///
    /// assert_eq!(GroupBy::Extension.label(), "extension");
    /// assert_eq!(GroupBy::Directory.label(), "directory");
    /// ```
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Directory => "directory",
        }
    }
}

impl FromStr for GroupBy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ext" | "e" => Ok(Self::Extension),
            "dir" | "d" => Ok(Self::Directory),
            _ => Err(ConfigError::invalid_option(
                "group-by",
                format!(
                    "unknown value '{s}' (expected one of: {})",
                    Self::ALIASES.join(", ")
                ),
            )),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of the ranking by count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest counts first.
    Ascending,
    /// Largest counts first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Maps an "ascending" flag onto a sort order.
    #[inline]
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Returns `true` for [`SortOrder::Ascending`].
    #[inline]
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// Root configuration for a tally run.
///
/// # Examples
///
/// ```
/// use ft_core::{GroupBy, SortOrder, TallyConfig};
///
/// let config = TallyConfig::default();
/// assert_eq!(config.root, ".");
/// assert_eq!(config.group_by, GroupBy::Extension);
/// assert!(config.recursive);
/// assert_eq!(config.order, SortOrder::Descending);
///
/// let config = TallyConfig::new("src")
///     .with_group_by(GroupBy::Directory)
///     .with_recursive(false);
/// assert_eq!(config.root, "src");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Directory the walk starts from.
    pub root: Utf8PathBuf,

    /// Dimension files are tallied under.
    pub group_by: GroupBy,

    /// Whether to descend into sub-directories.
    pub recursive: bool,

    /// Direction of the ranking.
    pub order: SortOrder,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            group_by: GroupBy::default(),
            recursive: true,
            order: SortOrder::default(),
        }
    }
}

impl TallyConfig {
    /// Creates a configuration with default settings rooted at `root`.
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Sets the grouping mode.
    #[must_use]
    pub const fn with_group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    /// Enables or disables recursion into sub-directories.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets the ranking direction.
    #[must_use]
    pub const fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Checks that the root exists and is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDirectory`] or
    /// [`ConfigError::NotADirectory`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_root(&self.root)
    }
}

fn validate_root(root: &Utf8Path) -> Result<(), ConfigError> {
    if !root.exists() {
        return Err(ConfigError::MissingDirectory(root.to_owned()));
    }
    if !root.is_dir() {
        return Err(ConfigError::NotADirectory(root.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_aliases() {
        assert_eq!("ext".parse::<GroupBy>().unwrap(), GroupBy::Extension);
        assert_eq!("e".parse::<GroupBy>().unwrap(), GroupBy::Extension);
        assert_eq!("dir".parse::<GroupBy>().unwrap(), GroupBy::Directory);
        assert_eq!("d".parse::<GroupBy>().unwrap(), GroupBy::Directory);
    }

    #[test]
    fn test_group_by_is_case_insensitive() {
        assert_eq!("EXT".parse::<GroupBy>().unwrap(), GroupBy::Extension);
        assert_eq!("Dir".parse::<GroupBy>().unwrap(), GroupBy::Directory);
    }

    #[test]
    fn test_group_by_rejects_unknown() {
        let err = "foo".parse::<GroupBy>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("group-by"));
        assert!(msg.contains("'foo'"));
        assert!(msg.contains("ext, e, dir, d"));

        assert!("".parse::<GroupBy>().is_err());
        assert!("extension".parse::<GroupBy>().is_err());
    }

    #[test]
    fn test_sort_order_from_ascending() {
        assert_eq!(SortOrder::from_ascending(true), SortOrder::Ascending);
        assert_eq!(SortOrder::from_ascending(false), SortOrder::Descending);
        assert!(SortOrder::Ascending.is_ascending());
        assert!(!SortOrder::Descending.is_ascending());
    }

    #[test]
    fn test_tally_config_defaults() {
        let config = TallyConfig::default();
        assert_eq!(config.root, Utf8PathBuf::from("."));
        assert_eq!(config.group_by, GroupBy::Extension);
        assert!(config.recursive);
        assert_eq!(config.order, SortOrder::Descending);
    }

    #[test]
    fn test_tally_config_builders() {
        let config = TallyConfig::new("src")
            .with_group_by(GroupBy::Directory)
            .with_recursive(false)
            .with_order(SortOrder::Ascending);

        assert_eq!(config.root, Utf8PathBuf::from("src"));
        assert_eq!(config.group_by, GroupBy::Directory);
        assert!(!config.recursive);
        assert!(config.order.is_ascending());
    }

    #[test]
    fn test_validate_missing_root() {
        let config = TallyConfig::new("/nonexistent/path/that/does/not/exist");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingDirectory(_))
        ));
    }

    #[test]
    fn test_validate_current_dir() {
        assert!(TallyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"group_by": "directory"}"#;
        let config: TallyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.group_by, GroupBy::Directory);
        assert!(config.recursive);
        assert_eq!(config.root, Utf8PathBuf::from("."));
    }
}
