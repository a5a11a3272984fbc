/// Append-only arena with lock-free slot reservation.
///
/// All slots are allocated up front. `push` takes `&self`, so several
/// registration jobs can append concurrently: each push reserves a unique
/// index with one atomic update and then writes its slot. Entries never move,
/// so indices handed out stay valid until the arena is cleared.
///
/// ```ignore
/// let arena = AppendArena::with_capacity(2);
/// assert_eq!(arena.push("a"), Ok(0));
/// assert_eq!(arena.push("b"), Ok(1));
/// assert_eq!(arena.push("c"), Err("c")); // full
/// ```

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct AppendArena<T> {
    slots: Box<[OnceLock<T>]>,
    /// Number of reserved slots, never above `slots.len()`
    reserved: AtomicUsize,
}

impl<T> AppendArena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| OnceLock::new()).collect(),
            reserved: AtomicUsize::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of reserved entries.
    pub fn len(&self) -> usize {
        self.reserved.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Append `value`, returning its index, or hand it back if full.
    pub fn push(&self, value: T) -> Result<usize, T> {
        let capacity = self.capacity();
        let reservation = self.reserved.fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
            (n < capacity).then_some(n + 1)
        });

        match reservation {
            Ok(index) => self.slots[index].set(value).map(|()| index),
            Err(_) => Err(value),
        }
    }

    /// Entry at `index`, if written.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(OnceLock::get)
    }

    /// Written entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len()].iter().filter_map(OnceLock::get)
    }

    /// Trim the reservation count to the contiguous prefix of written slots
    /// and return it. With exclusive access no push is in flight, so every
    /// entry below the returned count is readable.
    pub fn coalesce(&mut self) -> usize {
        let reserved = *self.reserved.get_mut();
        let written = self.slots[..reserved]
            .iter()
            .position(|slot| slot.get().is_none())
            .unwrap_or(reserved);
        for slot in &mut self.slots[written..reserved] {
            slot.take();
        }
        *self.reserved.get_mut() = written;
        written
    }

    /// Drop every entry; capacity is kept.
    pub fn clear(&mut self) {
        let reserved = *self.reserved.get_mut();
        for slot in &mut self.slots[..reserved] {
            slot.take();
        }
        *self.reserved.get_mut() = 0;
    }
}

#[cfg(test)]
#[path = "arena_tests.rs"]
mod tests;
