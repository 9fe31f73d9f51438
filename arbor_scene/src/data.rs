// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Identifier for a sequence in a [`DataStore`].
///
/// A small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused. It consists of a slot index
/// and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `DataKey` that pointed to
///   that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `DataKey`. Stale keys never alias newer data because the
///   generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DataKey(pub(crate) u32, pub(crate) u32);

impl DataKey {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

struct Slot {
    generation: u32,
    values: Option<Vec<f64>>,
}

/// Arena of named numeric sequences shared among series.
///
/// Sequences are shared by reference: every series holding a [`DataKey`] to
/// the same slot reads the same slice, and [`DataStore::get`] never copies.
/// Inserting under an existing name replaces that slot's contents in place,
/// so previously handed-out keys observe the new values; this is the
/// update path for live data.
#[derive(Default)]
pub struct DataStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    names: HashMap<String, DataKey>,
}

impl core::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.slots.iter().filter(|s| s.values.is_some()).count();
        f.debug_struct("DataStore")
            .field("total_slots", &self.slots.len())
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl DataStore {
    /// Inserts a sequence under `name` and returns its key.
    ///
    /// If the name is already bound, the existing slot's contents are
    /// replaced and its key returned; outstanding keys to that slot see the
    /// new values.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> DataKey {
        let name = name.into();
        if let Some(&key) = self.names.get(&name)
            && self.is_alive(key)
        {
            self.slots[key.idx()].values = Some(values);
            return key;
        }

        let key = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation += 1;
                slot.values = Some(values);
                DataKey::new(idx, slot.generation)
            }
            None => {
                let idx = u32::try_from(self.slots.len()).expect("slot count exceeds u32");
                self.slots.push(Slot {
                    generation: 1,
                    values: Some(values),
                });
                DataKey::new(idx, 1)
            }
        };
        self.names.insert(name, key);
        key
    }

    /// Returns the sequence behind `key`, or `None` when the key is stale or
    /// was never issued by this store.
    #[must_use]
    pub fn get(&self, key: DataKey) -> Option<&[f64]> {
        let slot = self.slots.get(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        slot.values.as_deref()
    }

    /// Looks up the key currently bound to `name`.
    #[must_use]
    pub fn key(&self, name: &str) -> Option<DataKey> {
        self.names.get(name).copied().filter(|&k| self.is_alive(k))
    }

    /// Returns true when `key` still refers to a live sequence.
    #[must_use]
    pub fn is_alive(&self, key: DataKey) -> bool {
        self.slots
            .get(key.idx())
            .is_some_and(|s| s.generation == key.1 && s.values.is_some())
    }

    /// Removes the sequence behind `key`, freeing its slot for reuse.
    ///
    /// Returns `false` when the key was already stale. The name binding, if
    /// any, is dropped as well.
    pub fn remove(&mut self, key: DataKey) -> bool {
        if !self.is_alive(key) {
            return false;
        }
        self.slots[key.idx()].values = None;
        self.free.push(key.0);
        self.names.retain(|_, &mut k| k != key);
        true
    }

    /// Number of live sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.values.is_some()).count()
    }

    /// Returns true when the store holds no live sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
