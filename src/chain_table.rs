//! ChainTable: structural layer. Separate chaining over an entry arena.
//!
//! Entries live in a `SlotMap` and are addressed by `EntryKey`. Each bucket
//! stores the key of its chain head and each entry stores the key of its
//! successor, so growing the table only rewrites links; entries never move
//! or get rebuilt.

use crate::hashing::bucket_index;
use core::ops::{Index, IndexMut};
use slotmap::{new_key_type, SlotMap};

/// Slot count of a table built with `ChainTable::new`.
pub const DEFAULT_CAPACITY: usize = 8;

/// Load factor threshold, as a fraction: grow once `len / capacity > 3 / 4`.
pub const MAX_LOAD_FACTOR_NUM: usize = 3;
pub const MAX_LOAD_FACTOR_DEN: usize = 4;

new_key_type! {
    /// Stable arena key of one entry. Survives growth; invalid after removal.
    pub struct EntryKey;
}

#[derive(Debug)]
struct Entry<V> {
    headword: String,
    value: V,
    next: Option<EntryKey>,
}

/// Result of walking one chain for a headword.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Probe {
    /// Bucket the headword maps to under the current capacity.
    pub bucket: usize,
    /// Entry preceding `hit` in the chain (or the chain tail on a miss).
    pub prev: Option<EntryKey>,
    /// Entry whose headword matched, if any.
    pub hit: Option<EntryKey>,
}

#[derive(Debug)]
pub struct ChainTable<V> {
    buckets: Vec<Option<EntryKey>>,
    slots: SlotMap<EntryKey, Entry<V>>,
}

impl<V> Default for ChainTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the keys of one bucket's chain, head first.
pub struct Chain<'a, V> {
    slots: &'a SlotMap<EntryKey, Entry<V>>,
    cursor: Option<EntryKey>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = EntryKey;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = self.slots.get(key).and_then(|e| e.next);
        Some(key)
    }
}

/// Iterator over `(headword, value)` pairs in unspecified order.
pub struct Iter<'a, V> {
    it: slotmap::basic::Iter<'a, EntryKey, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .next()
            .map(|(_, e)| (e.headword.as_str(), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<V> ChainTable<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Table with `capacity` buckets. Zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: vec![None; capacity.max(1)],
            slots: SlotMap::with_key(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current number of buckets. Only ever doubles.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn chain(&self, bucket: usize) -> Chain<'_, V> {
        Chain {
            slots: &self.slots,
            cursor: self.buckets.get(bucket).copied().flatten(),
        }
    }

    /// Walk the chain `headword` hashes to, comparing headwords exactly.
    ///
    /// Every lookup, insert and removal goes through here.
    pub fn probe(&self, headword: &str) -> Probe {
        let bucket = bucket_index(headword, self.capacity());
        let mut prev = None;
        for key in self.chain(bucket) {
            if self.slots[key].headword == headword {
                return Probe {
                    bucket,
                    prev,
                    hit: Some(key),
                };
            }
            prev = Some(key);
        }
        Probe {
            bucket,
            prev,
            hit: None,
        }
    }

    pub fn find(&self, headword: &str) -> Option<EntryKey> {
        self.probe(headword).hit
    }

    pub fn contains_key(&self, headword: &str) -> bool {
        self.find(headword).is_some()
    }

    pub fn get(&self, headword: &str) -> Option<&V> {
        let key = self.find(headword)?;
        self.slots.get(key).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, headword: &str) -> Option<&mut V> {
        let key = self.find(headword)?;
        self.slots.get_mut(key).map(|e| &mut e.value)
    }

    pub fn headword(&self, key: EntryKey) -> Option<&str> {
        self.slots.get(key).map(|e| e.headword.as_str())
    }

    /// Find `headword`, or link a new entry built by `default` at the head of
    /// its chain. Returns the entry's key and whether it was created.
    ///
    /// Creating an entry may grow the table; the returned key stays valid.
    pub fn get_or_insert_with<F>(&mut self, headword: &str, default: F) -> (EntryKey, bool)
    where
        F: FnOnce() -> V,
    {
        let probe = self.probe(headword);
        if let Some(key) = probe.hit {
            return (key, false);
        }

        let bucket = probe.bucket;
        let key = self.slots.insert(Entry {
            headword: headword.to_owned(),
            value: default(),
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(key);

        if self.over_load_factor() {
            self.grow();
        }
        (key, true)
    }

    /// Unlink and return the entry for `headword`. Capacity is unchanged.
    pub fn remove(&mut self, headword: &str) -> Option<(String, V)> {
        let Probe { bucket, prev, hit } = self.probe(headword);
        let entry = self.slots.remove(hit?)?;
        match prev {
            Some(p) => self.slots[p].next = entry.next,
            None => self.buckets[bucket] = entry.next,
        }
        Some((entry.headword, entry.value))
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    /// Number of entries in each bucket, in bucket order.
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.capacity()).map(move |b| self.chain(b).count())
    }

    fn over_load_factor(&self) -> bool {
        self.len() * MAX_LOAD_FACTOR_DEN > self.capacity() * MAX_LOAD_FACTOR_NUM
    }

    /// Double the bucket count and relink every entry under the new capacity.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_mul(2)
            .expect("bucket count overflowed usize");
        let old_buckets = std::mem::replace(&mut self.buckets, vec![None; new_capacity]);

        for head in old_buckets {
            let mut cursor = head;
            while let Some(key) = cursor {
                let entry = &mut self.slots[key];
                cursor = entry.next.take();
                let bucket = bucket_index(&entry.headword, new_capacity);
                entry.next = self.buckets[bucket];
                self.buckets[bucket] = Some(key);
            }
        }

        log::debug!(
            "rehashed {} entries: capacity {} -> {}",
            self.len(),
            old_capacity,
            new_capacity
        );
    }

    /// Panics if the bucket structure disagrees with the arena.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let mut reachable = 0;
        for bucket in 0..self.capacity() {
            for key in self.chain(bucket) {
                let hw = &self.slots[key].headword;
                assert_eq!(
                    bucket_index(hw, self.capacity()),
                    bucket,
                    "{hw:?} is chained in the wrong bucket"
                );
                reachable += 1;
            }
        }
        assert_eq!(reachable, self.len(), "every entry reachable exactly once");
        assert!(
            self.len() * MAX_LOAD_FACTOR_DEN <= self.capacity() * MAX_LOAD_FACTOR_NUM,
            "load factor exceeded: {} / {}",
            self.len(),
            self.capacity()
        );
    }
}

impl<V> Index<EntryKey> for ChainTable<V> {
    type Output = V;

    /// Panics if `key` was removed.
    fn index(&self, key: EntryKey) -> &V {
        &self.slots[key].value
    }
}

impl<V> IndexMut<EntryKey> for ChainTable<V> {
    fn index_mut(&mut self, key: EntryKey) -> &mut V {
        &mut self.slots[key].value
    }
}
