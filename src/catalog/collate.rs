//! Locale-aware string comparison for product names.
//!
//! Backed by the Unicode Collation Algorithm with the CLDR root tailoring:
//! accented letters sort next to their base letter (`"crème" < "Éclair" <
//! "Fudge"`), case only decides between otherwise equal names, and
//! lowercase comes before uppercase.

use std::cmp::Ordering;

use feruca::Collator;

/// Reusable collator for sorting many names.
pub struct NameCollator {
    inner: Collator,
}

impl NameCollator {
    pub fn new() -> Self {
        Self {
            inner: Collator::default(),
        }
    }

    /// Compare two names the way a user reading a sorted list expects.
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison. Prefer [`NameCollator`] when sorting.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}
