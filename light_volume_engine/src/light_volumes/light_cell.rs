/// LightCell - one bucket of the coarse 2D light grid.
///
/// A fixed ring of light ids. Writers reserve a position with one atomic
/// increment, so several light registration jobs may push into the same cell
/// concurrently. Once the ring is full each new id overwrites the oldest one:
/// memory and per-frame cost stay bounded, at the price of silently dropping
/// lights from crowded cells.

use std::sync::atomic::{AtomicU16, AtomicU32, Ordering};

use super::LIGHT_CELL_CAPACITY;

const CELL_MASK: u32 = LIGHT_CELL_CAPACITY as u32 - 1;

const _: () = assert!(LIGHT_CELL_CAPACITY.is_power_of_two());

#[derive(Debug)]
pub struct LightCell {
    light_ids: [AtomicU16; LIGHT_CELL_CAPACITY],
    /// Total pushes since the last clear (not wrapped)
    written: AtomicU32,
}

impl Default for LightCell {
    fn default() -> Self {
        Self {
            light_ids: std::array::from_fn(|_| AtomicU16::new(0)),
            written: AtomicU32::new(0),
        }
    }
}

impl LightCell {
    /// Store `light_id`, overwriting the oldest entry when full.
    pub fn push(&self, light_id: u16) {
        let position = self.written.fetch_add(1, Ordering::AcqRel);
        self.light_ids[(position & CELL_MASK) as usize].store(light_id, Ordering::Release);
    }

    /// Number of readable ids, at most `LIGHT_CELL_CAPACITY`.
    pub fn len(&self) -> usize {
        (self.written.load(Ordering::Acquire) as usize).min(LIGHT_CELL_CAPACITY)
    }

    pub fn is_empty(&self) -> bool {
        self.written.load(Ordering::Acquire) == 0
    }

    /// Whether more ids were pushed than the ring holds.
    pub fn has_overflowed(&self) -> bool {
        self.written.load(Ordering::Acquire) as usize > LIGHT_CELL_CAPACITY
    }

    /// Stored ids in ring order.
    pub fn light_ids(&self) -> impl Iterator<Item = u16> + '_ {
        self.light_ids[..self.len()]
            .iter()
            .map(|id| id.load(Ordering::Acquire))
    }

    pub fn clear(&mut self) {
        *self.written.get_mut() = 0;
        for id in &mut self.light_ids {
            *id.get_mut() = 0;
        }
    }
}

#[cfg(test)]
#[path = "light_cell_tests.rs"]
mod tests;
