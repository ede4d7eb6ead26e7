use crate::compat::{String, Vec};
use crate::error::{Result, StoreError};
use crate::query_value::QueryValue;

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: QueryValue,
}

/// Fixed-capacity key/multi-value store holding decoded query parameters.
///
/// Slots are allocated once by [`QueryStore::initialize`] and never grow.
/// Every lookup is a linear scan, which stays cheap because the capacity is
/// bounded by the number of `&`-segments in a single URL. Keys are unique,
/// case-sensitive and enumerate in slot order.
#[derive(Debug, Clone, Default)]
pub struct QueryStore {
    slots: Vec<Option<Entry>>,
    count: usize,
}

impl QueryStore {
    /// Create an uninitialized store (capacity 0)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut store = Self::new();
        store.initialize(capacity);
        store
    }

    /// (Re)allocate `capacity` empty slots, discarding prior contents.
    pub fn initialize(&mut self, capacity: usize) {
        self.slots.clear();
        self.slots.resize_with(capacity, || None);
        self.count = 0;
    }

    /// Insert `key` into the first unoccupied slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CapacityExhausted`] when every slot is taken and
    /// [`StoreError::DuplicateKey`] when `key` already has an entry. The store
    /// is left untouched in both cases.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Result<()> {
        let key = key.into();
        if self.exists(&key) {
            return Err(StoreError::DuplicateKey);
        }

        let capacity = self.capacity();
        let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_none()) else {
            tracing::warn!(
                capacity,
                key = key.as_str(),
                "query store is full, item was not added"
            );
            return Err(StoreError::CapacityExhausted { capacity });
        };

        *slot = Some(Entry {
            key,
            value: value.into(),
        });
        self.count += 1;
        Ok(())
    }

    /// Add `value` under `key`, or append it to the values already stored there.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CapacityExhausted`] when `key` is new and no slot is free.
    pub fn accumulate(&mut self, key: &str, value: String) -> Result<()> {
        match self.get_mut(key) {
            Some(existing) => {
                existing.push(value);
                Ok(())
            }
            None => self.add(key, value),
        }
    }

    /// Empty the slot holding `key`, returning what it held.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let index = self.find(key)?;
        let entry = self.slots[index].take()?;
        self.count -= 1;
        Some(entry.value)
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.find(key)
            .and_then(|index| self.slots[index].as_ref())
            .map(|entry| &entry.value)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut QueryValue> {
        let index = self.find(key)?;
        self.slots[index].as_mut().map(|entry| &mut entry.value)
    }

    /// Overwrite the value stored under `key`. Never inserts.
    /// Returns whether an entry was found.
    pub fn update(&mut self, key: &str, value: impl Into<QueryValue>) -> bool {
        match self.get_mut(key) {
            Some(existing) => {
                *existing = value.into();
                true
            }
            None => false,
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Slot count fixed by the last `initialize`
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Empty every slot while keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.count = 0;
    }

    /// Keys in slot order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|entry| entry.key.as_str())
    }

    /// Key/value pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries().map(|entry| (entry.key.as_str(), &entry.value))
    }

    fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().flatten()
    }

    fn find(&self, key: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|entry| entry.key == key))
    }
}
