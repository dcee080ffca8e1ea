//! Report formatting.
//!
//! The report is a two-column, tab-separated table:
//!
//! ```text
//! # of files	extension
//!        2	.go
//!        1	.md
//! ```
//!
//! Counts are right-justified to at least [`COUNT_WIDTH`] columns and use
//! `,` as the thousands separator.

use std::io::Write;

use ft_core::GroupBy;

use crate::error::ScanError;
use crate::rank::RankedEntry;

/// Minimum width of the count column.
pub const COUNT_WIDTH: usize = 8;

/// Writes the header and one line per entry to `out`.
///
/// # Errors
///
/// Returns [`ScanError::Output`] if writing to `out` fails.
///
/// # Examples
///
/// ```
/// use ft_core::GroupBy;
/// use ft_scanner::{RankedEntry, write_report};
///
/// let mut out = Vec::new();
/// write_report(&mut out, GroupBy::Extension, &[RankedEntry::new(".rs", 1_500)]).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "# of files\textension\n   1,500\t.rs\n"
/// );
/// ```
pub fn write_report<W: Write>(
    mut out: W,
    group_by: GroupBy,
    entries: &[RankedEntry],
) -> Result<(), ScanError> {
    writeln!(out, "# of files\t{}", group_by.label()).map_err(ScanError::output)?;
    for entry in entries {
        writeln!(
            out,
            "{:>width$}\t{}",
            format_count(entry.count),
            entry.key,
            width = COUNT_WIDTH
        )
        .map_err(ScanError::output)?;
    }
    out.flush().map_err(ScanError::output)
}

/// Formats `count` with `,` between each group of three digits.
///
/// # Examples
///
/// ```
/// use ft_scanner::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}
