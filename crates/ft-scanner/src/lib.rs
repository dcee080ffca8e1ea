//! Directory walker and file tally engine for ftally.
//!
//! This crate walks a directory tree, counts files grouped by extension or
//! by containing directory, ranks the groups by count, and formats the
//! result as a table.
//!
//! # Overview
//!
//! - [`FileWalker`]: Depth-first traversal built on the `ignore` crate
//! - [`group_key`]: Maps a file path to its extension or directory key
//! - [`CountTable`]: Group key to file count mapping
//! - [`rank`]: Orders the table by count
//! - [`write_report`]: Writes the two-column table
//!
//! # Example
//!
//! ```ignore
//! use ft_core::{GroupBy, TallyConfig};
//!
//! let config = TallyConfig::new("./src").with_group_by(GroupBy::Directory);
//! ft_scanner::run(&config, std::io::stdout().lock())?;
//! ```
//!
//! # Architecture
//!
//! ```text
//! run
//!  │
//!  ├── scan ─── FileWalker ──▶ group_key ──▶ CountTable
//!  │
//!  ├── rank ──▶ Vec<RankedEntry>
//!  │
//!  └── write_report ──▶ io::Write
//! ```
//!
//! The table is complete before ranking starts, and nothing is written
//! unless the whole walk succeeded.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod key;
mod rank;
mod report;
mod stats;
mod table;
mod walker;

pub use error::ScanError;
pub use key::{extension_key, group_key};
pub use rank::{RankedEntry, rank};
pub use report::{COUNT_WIDTH, format_count, write_report};
pub use stats::WalkStats;
pub use table::CountTable;
pub use walker::FileWalker;

use std::io::Write;

use ft_core::TallyConfig;
use tracing::info;

/// Result of a completed scan.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// File counts per group key.
    pub table: CountTable,
    /// What the walk visited.
    pub stats: WalkStats,
}

/// Walks the tree described by `config` and tallies every file.
///
/// # Errors
///
/// Returns [`ScanError::Config`] if the root is unusable, and
/// [`ScanError::Walk`] on the first directory that cannot be read.
pub fn scan(config: &TallyConfig) -> Result<ScanResult, ScanError> {
    info!(
        root = %config.root,
        group_by = %config.group_by,
        recursive = config.recursive,
        "Starting scan"
    );

    let walker = FileWalker::from_config(config)?;
    let mut table = CountTable::new();
    let stats = walker.walk(|path| {
        table.increment(&group_key(config.group_by, &config.root, path));
    })?;

    info!(
        files = stats.files,
        directories = stats.directories,
        skipped_directories = stats.skipped_directories,
        groups = table.len(),
        "Scan complete"
    );

    Ok(ScanResult { table, stats })
}

/// Runs the whole pipeline: scan, rank, and write the report to `out`.
///
/// # Errors
///
/// Returns any error from [`scan`], or [`ScanError::Output`] if writing
/// the report fails.
pub fn run<W: Write>(config: &TallyConfig, out: W) -> Result<ScanResult, ScanError> {
    let result = scan(config)?;
    let ranked = rank(&result.table, config.order);
    write_report(out, config.group_by, &ranked)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use ft_core::{GroupBy, SortOrder};
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &std::path::Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, "").expect("write");
    }

    fn create_tree(files: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        for file in files {
            touch(temp_dir.path(), file);
        }
        temp_dir
    }

    fn config_for(temp_dir: &TempDir) -> TallyConfig {
        TallyConfig::new(Utf8Path::from_path(temp_dir.path()).expect("Invalid path"))
    }

    fn run_to_string(config: &TallyConfig) -> String {
        let mut out = Vec::new();
        run(config, &mut out).expect("run");
        String::from_utf8(out).expect("utf-8 report")
    }

    #[test]
    fn test_scan_total_matches_file_count() {
        let files = ["a.rs", "b.rs", "README", "x/c.md", "x/y/d.rs", "x/y/z/.env"];
        let temp_dir = create_tree(&files);

        let result = scan(&config_for(&temp_dir)).expect("scan");
        assert_eq!(result.table.total(), files.len() as u64);
        assert_eq!(result.stats.files, files.len() as u64);
    }

    #[test]
    fn test_scan_by_extension_across_directories() {
        let temp_dir = create_tree(&["a.txt", "sub/b.txt", "README"]);

        let result = scan(&config_for(&temp_dir)).expect("scan");
        assert_eq!(result.table.get(".txt"), 2);
        assert_eq!(result.table.get(""), 1);
        assert_eq!(result.table.len(), 2);
    }

    #[test]
    fn test_scan_by_directory() {
        let temp_dir = create_tree(&["a.go", "b.go", "sub/c.go", "sub/deep/d.go"]);
        let config = config_for(&temp_dir).with_group_by(GroupBy::Directory);
        let root = config.root.clone();

        let result = scan(&config).expect("scan");
        assert_eq!(result.table.get(root.as_str()), 2);
        assert_eq!(result.table.get(root.join("sub").as_str()), 1);
        assert_eq!(result.table.get(root.join("sub/deep").as_str()), 1);
        assert_eq!(result.table.len(), 3);
    }

    #[test]
    fn test_scan_non_recursive_ignores_sub_directories() {
        let temp_dir = create_tree(&["a.go", "sub/b.go", "sub/c.md", "empty/.keep"]);

        for group_by in [GroupBy::Extension, GroupBy::Directory] {
            let config = config_for(&temp_dir)
                .with_group_by(group_by)
                .with_recursive(false);
            let result = scan(&config).expect("scan");

            assert_eq!(result.table.total(), 1, "{group_by}");
            assert_eq!(result.table.len(), 1, "{group_by}");
            assert_eq!(result.stats.skipped_directories, 2);
        }
    }

    #[test]
    fn test_scan_directory_mode_has_no_zero_entries() {
        let temp_dir = create_tree(&["sub/a.go"]);
        fs::create_dir(temp_dir.path().join("empty")).expect("mkdir");
        let config = config_for(&temp_dir).with_group_by(GroupBy::Directory);

        let result = scan(&config).expect("scan");
        assert_eq!(result.table.len(), 1);
        assert!(result.table.iter().all(|(_, count)| count > 0));
    }

    #[test]
    fn test_scan_missing_root() {
        let config = TallyConfig::new("/nonexistent/path/that/does/not/exist");
        assert!(matches!(scan(&config), Err(ScanError::Config(_))));
    }

    #[cfg(unix)]
    #[test]
    #[allow(clippy::print_stderr)]
    fn test_scan_unreadable_directory_is_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = create_tree(&["a.go", "locked/b.go"]);
        let locked = temp_dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

        let readable = fs::read_dir(&locked).is_ok();
        let result = scan(&config_for(&temp_dir));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");

        if readable {
            eprintln!("skipped: privileged user can read mode 000 directories");
            return;
        }
        assert!(matches!(result, Err(ScanError::Walk(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_symlinked_root() {
        let temp_dir = create_tree(&["real/a.go", "real/b.go", "real/c.md"]);
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(temp_dir.path().join("real"), &link).expect("symlink");
        let config = TallyConfig::new(Utf8Path::from_path(&link).expect("Invalid path"));

        let mut out = Vec::new();
        let result = run(&config, &mut out).expect("run");

        assert_eq!(result.stats.files, 3);
        assert_eq!(result.table.total(), 3);
        assert_eq!(result.table.get(""), 0);
        assert_eq!(
            String::from_utf8(out).expect("utf-8 report"),
            "# of files\textension\n       2\t.go\n       1\t.md\n"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_counts_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = create_tree(&["a.go"]);
        let name = std::ffi::OsStr::from_bytes(b"bad\xff.txt");
        fs::write(temp_dir.path().join(name), "").expect("write");

        let result = scan(&config_for(&temp_dir)).expect("scan");
        assert_eq!(result.table.total(), 2);
        assert_eq!(result.table.get(".go"), 1);
        assert_eq!(result.table.get(".txt"), 1);

        let config = config_for(&temp_dir).with_group_by(GroupBy::Directory);
        let result = scan(&config).expect("scan");
        assert_eq!(result.table.get(config.root.as_str()), 2);
    }

    #[test]
    fn test_run_end_to_end() {
        let temp_dir = create_tree(&["a.go", "b.go", "c.md"]);

        let output = run_to_string(&config_for(&temp_dir));
        assert_eq!(output, "# of files\textension\n       2\t.go\n       1\t.md\n");
    }

    #[test]
    fn test_run_ascending() {
        let temp_dir = create_tree(&["a.go", "b.go", "c.md"]);
        let config = config_for(&temp_dir).with_order(SortOrder::Ascending);

        let output = run_to_string(&config);
        assert_eq!(output, "# of files\textension\n       1\t.md\n       2\t.go\n");
    }

    #[test]
    fn test_run_is_idempotent() {
        let temp_dir = create_tree(&["a.go", "b.rs", "c.md", "d/e.go", "d/f.rs", "g/h.txt"]);
        let config = config_for(&temp_dir).with_group_by(GroupBy::Directory);

        assert_eq!(run_to_string(&config), run_to_string(&config));
    }

    #[test]
    fn test_run_writes_nothing_on_failure() {
        let config = TallyConfig::new("/nonexistent/path/that/does/not/exist");
        let mut out = Vec::new();

        assert!(run(&config, &mut out).is_err());
        assert!(out.is_empty());
    }
}
