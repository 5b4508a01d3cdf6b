use std::collections::{BTreeSet, HashMap, HashSet};

/// Read-only existence check for table numbers
///
/// Parsers only ever ask whether a number exists, so callers can back this
/// with whatever structure holds their table.
pub trait KnownNumbers {
    fn contains(&self, number: &str) -> bool;
}

impl KnownNumbers for HashSet<String> {
    fn contains(&self, number: &str) -> bool {
        HashSet::contains(self, number)
    }
}

impl KnownNumbers for BTreeSet<String> {
    fn contains(&self, number: &str) -> bool {
        BTreeSet::contains(self, number)
    }
}

impl<V> KnownNumbers for HashMap<String, V> {
    fn contains(&self, number: &str) -> bool {
        self.contains_key(number)
    }
}

impl KnownNumbers for [&str] {
    fn contains(&self, number: &str) -> bool {
        self.iter().any(|n| *n == number)
    }
}

impl<T: KnownNumbers + ?Sized> KnownNumbers for &T {
    fn contains(&self, number: &str) -> bool {
        (**self).contains(number)
    }
}
