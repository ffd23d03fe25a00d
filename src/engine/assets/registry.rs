// Array-backed id -> descriptor tables

use enum_map::Enum;
use std::fmt;
use std::marker::PhantomData;

/// Descriptor table for one asset kind
///
/// Ids are dense, so the table is a plain vector with one slot per id.
/// The `K` parameter keeps image ids out of audio registries and so on.
pub struct Registry<K, V> {
    entries: Vec<Option<V>>,
    _phantom: PhantomData<K>,
}

impl<K: Enum + Copy, V> Registry<K, V> {
    /// Create an empty registry with a slot for every id
    pub fn new() -> Self {
        Self {
            entries: (0..K::LENGTH).map(|_| None).collect(),
            _phantom: PhantomData,
        }
    }

    /// Get the descriptor registered for an id
    pub fn get(&self, id: K) -> Option<&V> {
        self.entries[id.into_usize()].as_ref()
    }

    /// Check if an id has a descriptor
    pub fn contains(&self, id: K) -> bool {
        self.entries[id.into_usize()].is_some()
    }

    /// Number of registered ids
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered entries in id order
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.as_ref().map(|value| (K::from_usize(index), value)))
    }
}

impl<K: Enum + Copy, V: PartialEq> Registry<K, V> {
    /// Insert or replace the descriptor for an id
    ///
    /// Returns `true` when the stored descriptor changed. Setting an
    /// identical descriptor again is a no-op.
    pub fn set(&mut self, id: K, descriptor: V) -> bool {
        let entry = &mut self.entries[id.into_usize()];
        if entry.as_ref() == Some(&descriptor) {
            return false;
        }
        *entry = Some(descriptor);
        true
    }
}

impl<K: Enum + Copy, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Enum + Copy + fmt::Debug, V: fmt::Debug> fmt::Debug for Registry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
