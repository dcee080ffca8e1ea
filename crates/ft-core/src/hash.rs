//! Fast hash map type aliases.
//!
//! Group keys are short strings (extensions, directory paths), which is the
//! case the Fx hash from `rustc-hash` is tuned for. The tally is built from
//! local filesystem names, so denial-of-service resistance is not needed.
//!
//! # Examples
//!
//! ```
//! use ft_core::{FxHashMap, fx_hash_map};
//!
//! let mut map: FxHashMap<String, u64> = fx_hash_map();
//! map.insert(".rs".to_owned(), 3);
//! assert_eq!(map.get(".rs"), Some(&3));
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Creates a new empty [`FxHashMap`].
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}
