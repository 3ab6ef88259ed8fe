pub const MEMORY_SIZE: u64 = 100;

/// Snapshot of the memory pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStatus {
    pub capacity: u64,
    pub used: u64,
    pub available: u64,
}

/// Scalar memory pool. Only the long-term scheduler mutates it.
#[derive(Debug)]
pub struct Memory {
    capacity: u64,
    used: u64,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::with_capacity(MEMORY_SIZE)
    }

    pub fn with_capacity(capacity: u64) -> Memory {
        Memory { capacity, used: 0 }
    }

    pub fn get_remaining_memory(&self) -> u64 {
        self.capacity - self.used
    }

    pub fn get_used_memory(&self) -> u64 {
        self.used
    }

    pub fn status(&self) -> MemoryStatus {
        MemoryStatus {
            capacity: self.capacity,
            used: self.used,
            available: self.get_remaining_memory(),
        }
    }

    /// Reserves `amount` units, or returns false and leaves the pool untouched.
    pub(super) fn allocate(&mut self, amount: u64) -> bool {
        if amount > self.get_remaining_memory() {
            return false;
        }

        self.used += amount;
        debug_assert!(self.used <= self.capacity);
        true
    }

    pub(super) fn free(&mut self, amount: u64) {
        debug_assert!(amount <= self.used, "freeing more memory than is in use");
        self.used -= amount;
    }

    pub fn clear(&mut self) {
        self.used = 0;
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}
