//! Symmetric mutex relation storage.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;

/// A symmetric relation over node ids.
///
/// Pairs are stored canonically ordered as `(min, max)`, so
/// `contains(a, b) == contains(b, a)` holds by construction. A node is never
/// mutex with itself.
#[derive(Clone, PartialEq, Eq)]
pub struct MutexSet<Id: Copy + Eq + Ord + Hash> {
    pairs: HashSet<(Id, Id)>,
}

impl<Id: Copy + Eq + Ord + Hash> Default for MutexSet<Id> {
    fn default() -> Self {
        Self {
            pairs: HashSet::new(),
        }
    }
}

impl<Id: Copy + Eq + Ord + Hash> MutexSet<Id> {
    /// Creates an empty relation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: Id, b: Id) -> (Id, Id) {
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Marks `a` and `b` as mutex. Returns `false` if the pair was already
    /// present or `a == b`.
    pub fn insert(&mut self, a: Id, b: Id) -> bool {
        if a == b {
            return false;
        }
        self.pairs.insert(Self::key(a, b))
    }

    /// Returns `true` if `a` and `b` are mutex.
    #[must_use]
    pub fn contains(&self, a: Id, b: Id) -> bool {
        a != b && self.pairs.contains(&Self::key(a, b))
    }

    /// Returns the number of unordered mutex pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pair is mutex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the canonical `(min, max)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, Id)> + '_ {
        self.pairs.iter().copied()
    }
}

impl<Id: Copy + Eq + Ord + Hash> Extend<(Id, Id)> for MutexSet<Id> {
    fn extend<T: IntoIterator<Item = (Id, Id)>>(&mut self, iter: T) {
        for (a, b) in iter {
            self.insert(a, b);
        }
    }
}

impl<Id: Copy + Eq + Ord + Hash> FromIterator<(Id, Id)> for MutexSet<Id> {
    fn from_iter<T: IntoIterator<Item = (Id, Id)>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<Id: Copy + Eq + Ord + Hash + fmt::Debug> fmt::Debug for MutexSet<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable();
        f.debug_set().entries(pairs).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_symmetric() {
        let mut set = MutexSet::new();
        assert!(set.insert(3, 1));
        assert!(!set.insert(1, 3));

        assert!(set.contains(1, 3));
        assert!(set.contains(3, 1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn self_pairs_are_never_mutex() {
        let mut set = MutexSet::new();
        assert!(!set.insert(2, 2));
        assert!(!set.contains(2, 2));
        assert!(set.is_empty());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: MutexSet<u32> = [(1, 2), (4, 3)].into_iter().collect();
        let b: MutexSet<u32> = [(3, 4), (2, 1)].into_iter().collect();
        assert_eq!(a, b);
    }
}
