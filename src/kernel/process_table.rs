use super::{ProcessControlBlock, SimError};

use crate::io::ProgramInfo;

pub const MAX_PROCESSES: usize = 100;

/// The fixed set of processes a run operates on, in registration order.
#[derive(Debug, Default)]
pub struct ProcessTable {
    pcbs: Vec<ProcessControlBlock>,
}

impl ProcessTable {
    pub fn new() -> ProcessTable {
        ProcessTable { pcbs: Vec::new() }
    }

    pub fn from_programs(programs: Vec<ProgramInfo>) -> Result<ProcessTable, SimError> {
        let mut table = ProcessTable::new();
        for program in programs {
            table.register(program)?;
        }

        Ok(table)
    }

    pub fn register(&mut self, info: ProgramInfo) -> Result<(), SimError> {
        if self.pcbs.len() >= MAX_PROCESSES {
            return Err(SimError::RegistryFull { max: MAX_PROCESSES });
        }

        if self.pcbs.iter().any(|pcb| pcb.get_id() == info.id) {
            return Err(SimError::DuplicateProcessId(info.id));
        }

        info.validate()?;
        self.pcbs.push(ProcessControlBlock::new(info));
        Ok(())
    }

    pub fn reset(&mut self) {
        self.pcbs.iter_mut().for_each(ProcessControlBlock::reset);
    }

    pub fn len(&self) -> usize {
        self.pcbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pcbs.is_empty()
    }

    pub fn get(&self, idx: usize) -> &ProcessControlBlock {
        &self.pcbs[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut ProcessControlBlock {
        &mut self.pcbs[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessControlBlock> {
        self.pcbs.iter()
    }

    pub fn count_settled(&self) -> usize {
        self.pcbs.iter().filter(|pcb| pcb.is_settled()).count()
    }

    /// Earliest arrival strictly after `now` among processes matching `pending`.
    pub fn next_arrival_after<F>(&self, now: u64, pending: F) -> Option<u64>
    where
        F: Fn(usize, &ProcessControlBlock) -> bool,
    {
        self.pcbs
            .iter()
            .enumerate()
            .filter(|(idx, pcb)| pending(*idx, pcb))
            .map(|(_, pcb)| pcb.get_arrival_time())
            .filter(|&arrival| arrival > now)
            .min()
    }
}
