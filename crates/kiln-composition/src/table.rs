//! Registration table shared by both registries
//!
//! Entries are fixed once the owning registry is built. Keys iterate in
//! sorted order so listings are deterministic.

use kiln_core::{Discriminator, KilnError, Result};
use std::collections::BTreeMap;

pub(crate) struct RegistrationTable<V> {
    entries: BTreeMap<Discriminator, V>,
}

impl<V> RegistrationTable<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a new entry; an existing key is never overwritten
    pub(crate) fn insert(&mut self, key: Discriminator, value: V) -> Result<()> {
        if self.entries.contains_key(&key) {
            return Err(KilnError::DuplicateRegistration { discriminator: key });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &Discriminator> {
        self.entries.keys()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
