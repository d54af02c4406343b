//! String interning for identifiers, selectors, and class names.
//!
//! Mirrors the teacher workspace's symbol-interning design: a global,
//! thread-safe table backed by `dashmap`, hashed with `ahash`. Strings are
//! leaked to obtain `'static` references, which is acceptable here because
//! the process runs for the duration of a single parse/analyze/serialize
//! pipeline and never needs to free interned text.

use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

/// Keyed by the interned string itself (hashed with `ahash`'s
/// `RandomState`), not by a precomputed hash — two different strings that
/// happen to collide under `ahash` must still resolve to two different
/// indices, which a hash-keyed map cannot guarantee.
struct StringTable {
    by_str: DashMap<&'static str, u32, RandomState>,
    by_index: DashMap<u32, &'static str>,
    next_index: AtomicU32,
}

impl StringTable {
    fn new() -> Self {
        Self {
            by_str: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            by_index: DashMap::with_capacity(256),
            next_index: AtomicU32::new(0),
        }
    }

    fn intern(&self, s: &str) -> u32 {
        if let Some(entry) = self.by_str.get(s) {
            return *entry;
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let index = self.next_index.fetch_add(1, Ordering::Relaxed);
        match self.by_str.entry(leaked) {
            Entry::Occupied(existing) => *existing.get(),
            Entry::Vacant(slot) => {
                slot.insert(index);
                self.by_index.insert(index, leaked);
                index
            }
        }
    }

    fn resolve(&self, index: u32) -> &'static str {
        *self
            .by_index
            .get(&index)
            .expect("symbol index must have been interned")
    }
}

/// A compact, `Copy` handle to an interned string.
///
/// Two symbols compare equal iff the underlying strings are equal; the
/// comparison is O(1) regardless of string length.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern `s`, returning a handle usable for O(1) equality checks.
    pub fn intern(s: &str) -> Self {
        Symbol(STRING_TABLE.intern(s))
    }

    /// Resolve this symbol back to its string contents.
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.resolve(self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::intern(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::intern(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let a = Symbol::intern("run");
        let b = Symbol::intern("run");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "run");
    }

    #[test]
    fn distinct_strings_get_distinct_symbols() {
        let a = Symbol::intern("plus:");
        let b = Symbol::intern("minus:");
        assert_ne!(a, b);
    }

    #[quickcheck_macros::quickcheck]
    fn round_trips_any_string(s: String) -> bool {
        Symbol::intern(&s).as_str() == s
    }

    #[test]
    fn many_distinct_strings_stay_distinct() {
        // Keying the table by string rather than by precomputed hash means a
        // hash collision between two different strings must not merge them
        // into one symbol.
        let symbols: Vec<Symbol> =
            (0..500).map(|i| Symbol::intern(&format!("sym_distinct_{i}"))).collect();
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
            assert_eq!(a.as_str(), format!("sym_distinct_{i}"));
        }
    }
}
