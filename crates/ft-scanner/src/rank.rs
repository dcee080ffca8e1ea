//! Ranking of tallied groups by count.

use std::cmp::Ordering;

use ft_core::SortOrder;

use crate::table::CountTable;

/// A group key and its file count, in ranked position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedEntry {
    /// The group key (extension or directory path).
    pub key: String,
    /// Number of files tallied under the key.
    pub count: u64,
}

impl RankedEntry {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Orders the entries of `table` by count in the given direction.
///
/// Groups with equal counts are ordered by key so that the output is the
/// same on every run; callers should treat the order among ties as
/// arbitrary.
///
/// # Examples
///
/// ```
/// use ft_core::SortOrder;
/// use ft_scanner::{CountTable, rank};
///
/// let table: CountTable = [".go", ".md", ".go"].into_iter().collect();
///
/// let ranked = rank(&table, SortOrder::Descending);
/// assert_eq!(ranked[0].key, ".go");
/// assert_eq!(ranked[0].count, 2);
///
/// let ranked = rank(&table, SortOrder::Ascending);
/// assert_eq!(ranked[0].key, ".md");
/// ```
#[must_use]
pub fn rank(table: &CountTable, order: SortOrder) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(key, count)| RankedEntry::new(key, count))
        .collect();

    entries.sort_by(|a, b| {
        compare_counts(a.count, b.count, order).then_with(|| a.key.cmp(&b.key))
    });
    entries
}

fn compare_counts(a: u64, b: u64, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => a.cmp(&b),
        SortOrder::Descending => b.cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CountTable {
        let mut table = CountTable::new();
        for key in [".go", ".go", ".go", ".md", ".txt", ".txt", ".txt"] {
            table.increment(key);
        }
        table
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(&sample_table(), SortOrder::Descending);
        let counts: Vec<u64> = ranked.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![3, 3, 1]);

        let top: Vec<&str> = ranked[..2].iter().map(|e| e.key.as_str()).collect();
        assert!(top.contains(&".go"));
        assert!(top.contains(&".txt"));
        assert_eq!(ranked[2].key, ".md");
    }

    #[test]
    fn test_rank_ascending() {
        let ranked = rank(&sample_table(), SortOrder::Ascending);
        let counts: Vec<u64> = ranked.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![1, 3, 3]);
        assert_eq!(ranked[0].key, ".md");
    }

    #[test]
    fn test_rank_is_deterministic() {
        let table = sample_table();
        assert_eq!(
            rank(&table, SortOrder::Descending),
            rank(&table.clone(), SortOrder::Descending)
        );
    }

    #[test]
    fn test_rank_preserves_total() {
        let table = sample_table();
        let ranked = rank(&table, SortOrder::Descending);
        assert_eq!(ranked.len(), table.len());
        assert_eq!(ranked.iter().map(|e| e.count).sum::<u64>(), table.total());
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&CountTable::new(), SortOrder::Ascending).is_empty());
    }
}
