//! Insertion-ordered arena for plot elements.
//!
//! Removal leaves a tombstone so slot indices never shift. Every insert gets a
//! fresh id that is never reused, which makes keys to removed or cleared
//! entries resolve to `None` instead of aliasing a newer element.
//!
//! Tombstones are only reclaimed by [`Registry::clear`], so a long add/remove
//! sequence grows `slots` by one per insert.

/// Stable reference into a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    index: usize,
    id: u64,
}

impl Key {
    /// Insertion position of the entry (counts removed entries too).
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
struct Entry<T> {
    id: u64,
    item: T,
}

#[derive(Debug, Clone)]
pub struct Registry<T> {
    slots: Vec<Option<Entry<T>>>,
    next_id: u64,
    live: usize,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
            live: 0,
        }
    }

    /// Append `item` and return its key.
    pub fn insert(&mut self, item: T) -> Key {
        let id = self.next_id;
        self.next_id += 1;
        let index = self.slots.len();
        self.slots.push(Some(Entry { id, item }));
        self.live += 1;
        Key { index, id }
    }

    pub fn get(&self, key: Key) -> Option<&T> {
        match self.slots.get(key.index) {
            Some(Some(entry)) if entry.id == key.id => Some(&entry.item),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        match self.slots.get_mut(key.index) {
            Some(Some(entry)) if entry.id == key.id => Some(&mut entry.item),
            _ => None,
        }
    }

    /// Remove and return the entry behind `key`; `None` if already gone.
    pub fn remove(&mut self, key: Key) -> Option<T> {
        let slot = self.slots.get_mut(key.index)?;
        if slot.as_ref().is_some_and(|e| e.id == key.id) {
            self.live -= 1;
            slot.take().map(|e| e.item)
        } else {
            None
        }
    }

    /// Drop every entry. Keys issued before the call go stale.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten().map(|e| &e.item)
    }
}
