mod fcfs;
mod round_robin;
mod sjf;

use std::fmt;
use std::num::NonZeroU64;

use super::{Cpu, LongTermScheduler, ProcessTable, SimError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingAlgorithm {
    Fcfs,
    Sjf,
    RoundRobin { quantum: NonZeroU64 },
    Priority,
}

impl SchedulingAlgorithm {
    /// Builds a Round Robin policy, rejecting quanta that are not positive.
    pub fn round_robin(quantum: i64) -> Result<SchedulingAlgorithm, SimError> {
        u64::try_from(quantum)
            .ok()
            .and_then(NonZeroU64::new)
            .map(|quantum| SchedulingAlgorithm::RoundRobin { quantum })
            .ok_or(SimError::InvalidQuantum(quantum))
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingAlgorithm::Fcfs => write!(f, "FCFS Scheduling"),
            SchedulingAlgorithm::Sjf => write!(f, "SJF Scheduling"),
            SchedulingAlgorithm::RoundRobin { quantum } => {
                write!(f, "Round Robin Scheduling (Q = {})", quantum)
            }
            SchedulingAlgorithm::Priority => write!(f, "Priority Scheduling"),
        }
    }
}

pub(crate) struct ShortTermScheduler {
    scheduling_alg: SchedulingAlgorithm,
}

impl ShortTermScheduler {
    pub fn new(scheduling_alg: SchedulingAlgorithm) -> ShortTermScheduler {
        ShortTermScheduler { scheduling_alg }
    }

    /// Drives every process in `table` to a terminal disposition. The table
    /// and memory must already be reset.
    pub fn run(
        &self,
        table: &mut ProcessTable,
        lts: &mut LongTermScheduler,
        cpu: &mut Cpu,
    ) -> Result<(), SimError> {
        match self.scheduling_alg {
            SchedulingAlgorithm::Fcfs => fcfs::schedule(table, lts, cpu),
            SchedulingAlgorithm::Sjf => sjf::schedule(table, lts, cpu),
            SchedulingAlgorithm::RoundRobin { quantum } => {
                round_robin::schedule(table, lts, cpu, quantum.get())
            }
            SchedulingAlgorithm::Priority => {
                return Err(SimError::NotImplemented("priority scheduling"))
            }
        }

        Ok(())
    }
}
