use super::*;

use crate::io::ProgramInfo;

/// Final timing record for one process after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub pid: u32,
    pub name: String,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub waiting_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
    pub skipped: bool,
}

impl From<&ProcessControlBlock> for ProcessOutcome {
    fn from(pcb: &ProcessControlBlock) -> ProcessOutcome {
        ProcessOutcome {
            pid: pcb.get_id(),
            name: pcb.get_name().to_string(),
            start_time: pcb.start_time,
            completion_time: pcb.completion_time,
            waiting_time: pcb.waiting_time,
            turnaround_time: pcb.turnaround_time,
            skipped: pcb.is_skipped(),
        }
    }
}

/// Everything a single scheduling run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub algorithm: SchedulingAlgorithm,
    pub slices: Vec<ExecutionSlice>,
    pub skipped: Vec<SkipNotice>,
    pub outcomes: Vec<ProcessOutcome>,
    pub metrics: Option<Metrics>,
}

/// Holds the virtual system: the process table and the memory it competes
/// for. Every run starts from a full reset.
pub struct Driver {
    processes: ProcessTable,
    lts: LongTermScheduler,
}

impl Driver {
    pub fn new(programs: Vec<ProgramInfo>, memory: Memory) -> Result<Driver, SimError> {
        Ok(Driver {
            processes: ProcessTable::from_programs(programs)?,
            lts: LongTermScheduler::new(memory),
        })
    }

    pub fn run(&mut self, algorithm: SchedulingAlgorithm) -> Result<RunReport, SimError> {
        self.reset();

        let sts = ShortTermScheduler::new(algorithm);
        let mut cpu = Cpu::new();

        if self.processes.is_empty() {
            log::warn!("No processes loaded; {} has nothing to schedule", algorithm);
        }

        log::info!("Starting {} over {} processes", algorithm, self.processes.len());
        sts.run(&mut self.processes, &mut self.lts, &mut cpu)?;

        let end_time = cpu.now();
        let (slices, skipped) = cpu.into_trace();
        let outcomes = self.processes.iter().map(ProcessOutcome::from).collect();
        let metrics = Metrics::calculate(&self.processes);

        match &metrics {
            Some(metrics) => log::info!(
                "{} finished at t={}: {} completed, {} skipped, avg wait {:.2}, avg turnaround {:.2}",
                algorithm,
                end_time,
                metrics.completed,
                skipped.len(),
                metrics.average_waiting_time,
                metrics.average_turnaround_time
            ),
            None => log::info!("{} finished at t={}: no process completed", algorithm, end_time),
        }

        Ok(RunReport {
            algorithm,
            slices,
            skipped,
            outcomes,
            metrics,
        })
    }

    pub fn reset(&mut self) {
        self.processes.reset();
        self.lts.reset();
    }

    pub fn memory_status(&self) -> MemoryStatus {
        self.lts.status()
    }

    pub fn processes(&self) -> &ProcessTable {
        &self.processes
    }
}
