//! Slot table with generation-tagged handles for the checked surface.
//!
//! A handle that outlives its object carries a stale generation and
//! resolves to `None`, so use-after-destroy and double-destroy become
//! ordinary lookup misses instead of undefined behavior.

/// Decoded form of a checked handle.
///
/// On the wire the slot index sits in the upper 32 bits and the generation
/// in the lower 32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Handle {
    pub slot: u32,
    pub generation: u32,
}

impl Handle {
    pub fn from_raw(raw: u64) -> Self {
        Self {
            slot: (raw >> 32) as u32,
            generation: raw as u32,
        }
    }

    pub fn into_raw(self) -> u64 {
        ((self.slot as u64) << 32) | self.generation as u64
    }
}

struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Owns values on behalf of foreign callers, addressed by `u64` handles.
///
/// Freed slots are recycled through a free list with their generation
/// bumped. A slot whose generation wraps back to 0 is retired for good,
/// since handing it out again would let epoch-0 handles resolve.
pub(crate) struct SlotTable<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    live: usize,
}

impl<T> SlotTable<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Take ownership of `value` and return its handle.
    pub fn insert(&mut self, value: T) -> u64 {
        self.live += 1;
        let handle = match self.free.pop() {
            Some(slot) => {
                let entry = &mut self.entries[slot as usize];
                entry.value = Some(value);
                Handle {
                    slot,
                    generation: entry.generation,
                }
            }
            None => {
                let slot = self.entries.len() as u32;
                self.entries.push(Entry {
                    generation: 0,
                    value: Some(value),
                });
                Handle {
                    slot,
                    generation: 0,
                }
            }
        };
        handle.into_raw()
    }

    fn entry(&self, raw: u64) -> Option<&Entry<T>> {
        let h = Handle::from_raw(raw);
        self.entries
            .get(h.slot as usize)
            .filter(|e| e.generation == h.generation)
    }

    /// Borrow the value behind `raw`, or `None` if the handle is stale or
    /// was never issued.
    pub fn get(&self, raw: u64) -> Option<&T> {
        self.entry(raw)?.value.as_ref()
    }

    /// Release the value behind `raw` back to the caller.
    ///
    /// Returns `None` for a stale or unknown handle, which makes a second
    /// removal of the same handle harmless.
    pub fn remove(&mut self, raw: u64) -> Option<T> {
        let h = Handle::from_raw(raw);
        let entry = self.entries.get_mut(h.slot as usize)?;
        if entry.generation != h.generation {
            return None;
        }
        let value = entry.value.take()?;
        self.live -= 1;
        entry.generation = entry.generation.wrapping_add(1);
        if entry.generation != 0 {
            self.free.push(h.slot);
        }
        Some(value)
    }
}
