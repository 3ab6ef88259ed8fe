use super::{Memory, MemoryStatus, ProcessControlBlock};

/// Outcome of an admission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Denied,
}

/// Memory admission gate. Owns the memory pool and is the only thing
/// that moves memory in or out of use.
pub struct LongTermScheduler {
    memory: Memory,
}

impl LongTermScheduler {
    pub fn new(memory: Memory) -> LongTermScheduler {
        LongTermScheduler { memory }
    }

    /// Admits `pcb` if its memory requirement fits in what is left of the
    /// pool. No retry is attempted on denial.
    pub fn try_admit(&mut self, pcb: &mut ProcessControlBlock) -> Admission {
        if pcb.is_admitted() {
            return Admission::Admitted;
        }

        if !self.memory.allocate(pcb.get_memory_requirement()) {
            log::warn!(
                "Process {} denied admission: needs {} units, {} available",
                pcb.get_id(),
                pcb.get_memory_requirement(),
                self.memory.get_remaining_memory()
            );
            return Admission::Denied;
        }

        pcb.set_admitted(true);
        log::debug!(
            "Process {} admitted ({} units, {} in use)",
            pcb.get_id(),
            pcb.get_memory_requirement(),
            self.memory.get_used_memory()
        );
        Admission::Admitted
    }

    pub fn release(&mut self, pcb: &mut ProcessControlBlock) {
        if !pcb.is_admitted() {
            return;
        }

        self.memory.free(pcb.get_memory_requirement());
        pcb.set_admitted(false);
    }

    pub fn status(&self) -> MemoryStatus {
        self.memory.status()
    }

    pub fn reset(&mut self) {
        self.memory.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::io::ProgramInfo;

    fn pcb(id: u32, memory_requirement: u64) -> ProcessControlBlock {
        ProcessControlBlock::new(ProgramInfo::new(id, "P", 1, 0, 1, memory_requirement))
    }

    #[test]
    fn test_long_term_scheduler_admit_then_release() {
        let mut lts = LongTermScheduler::new(Memory::with_capacity(100));
        let mut p1 = pcb(1, 40);

        assert_eq!(lts.try_admit(&mut p1), Admission::Admitted);
        assert!(p1.is_admitted());
        assert_eq!(lts.status().used, 40);

        lts.release(&mut p1);
        assert!(!p1.is_admitted());
        assert_eq!(lts.status().used, 0);
    }

    #[test]
    fn test_long_term_scheduler_denied_leaves_state_unchanged() {
        let mut lts = LongTermScheduler::new(Memory::with_capacity(100));
        let mut p1 = pcb(1, 70);
        let mut p2 = pcb(2, 40);

        lts.try_admit(&mut p1);
        assert_eq!(lts.try_admit(&mut p2), Admission::Denied);
        assert!(!p2.is_admitted());
        assert_eq!(lts.status().used, 70);
    }

    #[test]
    fn test_long_term_scheduler_release_not_admitted_is_noop() {
        let mut lts = LongTermScheduler::new(Memory::with_capacity(100));
        let mut p1 = pcb(1, 70);
        let mut p2 = pcb(2, 20);

        lts.try_admit(&mut p1);
        lts.release(&mut p2);
        assert_eq!(lts.status().used, 70);
    }

    #[test]
    fn test_long_term_scheduler_admit_twice_allocates_once() {
        let mut lts = LongTermScheduler::new(Memory::with_capacity(100));
        let mut p1 = pcb(1, 30);

        lts.try_admit(&mut p1);
        lts.try_admit(&mut p1);
        assert_eq!(lts.status().used, 30);
    }

    #[test]
    fn test_long_term_scheduler_status() {
        let mut lts = LongTermScheduler::new(Memory::with_capacity(100));
        let mut p1 = pcb(1, 25);
        lts.try_admit(&mut p1);

        let status = lts.status();
        assert_eq!((status.capacity, status.used, status.available), (100, 25, 75));

        lts.reset();
        assert_eq!(lts.status().used, 0);
    }
}
