//! The file count table.
//!
//! [`CountTable`] maps each group key to the number of files tallied under
//! it. It is filled during the walk and only read afterwards.

use ft_core::{FxHashMap, fx_hash_map};

/// Mapping from group key to file count.
///
/// Keys are unique and every count is at least 1. Iteration order is
/// unspecified; use [`rank`](crate::rank) for ordered output.
///
/// # Examples
///
/// ```
/// use ft_scanner::CountTable;
///
/// let mut table = CountTable::new();
/// table.increment(".rs");
/// table.increment(".rs");
/// table.increment(".md");
///
/// assert_eq!(table.get(".rs"), 2);
/// assert_eq!(table.get(".toml"), 0);
/// assert_eq!(table.total(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    counts: FxHashMap<String, u64>,
}

impl CountTable {
    /// Creates an empty table.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: fx_hash_map(),
        }
    }

    /// Adds one to the count for `key`, starting it at 1 if absent.
    pub fn increment(&mut self, key: &str) {
        // Avoid allocating the key for groups already present.
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_owned(), 1);
        }
    }

    /// Returns the count for `key`, or 0 if no file was tallied under it.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns the number of distinct keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing was tallied.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates over `(key, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(key, &count)| (key.as_str(), count))
    }
}

impl<'a> FromIterator<&'a str> for CountTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}
