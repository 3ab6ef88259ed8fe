use super::{ProcessControlBlock, ProcessState, Ticks};

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSlice {
    pub pid: u32,
    pub name: String,
    pub start: Ticks,
    pub end: Ticks,
}

/// A process that was denied admission and will not run this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipNotice {
    pub pid: u32,
    pub name: String,
    pub at: Ticks,
}

/// The simulated CPU: a monotonic tick counter plus the trace of what ran.
#[derive(Debug, Default)]
pub struct Cpu {
    now: Ticks,
    slices: Vec<ExecutionSlice>,
    skipped: Vec<SkipNotice>,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu::default()
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Idles the CPU until `time`. Never moves the clock backwards.
    pub fn advance_to(&mut self, time: Ticks) {
        if time > self.now {
            log::trace!("CPU idle [{} - {}]", self.now, time);
            self.now = time;
        }
    }

    /// Runs `pcb` for up to `quantum` ticks starting now and returns the
    /// number of ticks actually executed.
    pub fn execute(&mut self, pcb: &mut ProcessControlBlock, quantum: Ticks) -> Ticks {
        let slice = pcb.remaining_time.min(quantum);
        let start = self.now;

        pcb.state = ProcessState::Running;
        if pcb.start_time.is_none() {
            pcb.start_time = Some(start);
        }

        self.now += slice;
        pcb.run_slice(slice, self.now);

        log::debug!("Process {} ran [{} - {}]", pcb.get_id(), start, self.now);
        self.slices.push(ExecutionSlice {
            pid: pcb.get_id(),
            name: pcb.get_name().to_string(),
            start,
            end: self.now,
        });

        slice
    }

    /// Runs `pcb` to completion.
    pub fn execute_to_completion(&mut self, pcb: &mut ProcessControlBlock) {
        let burst = pcb.remaining_time;
        self.execute(pcb, burst);
    }

    pub fn record_skip(&mut self, pcb: &mut ProcessControlBlock) {
        pcb.mark_skipped();
        self.skipped.push(SkipNotice {
            pid: pcb.get_id(),
            name: pcb.get_name().to_string(),
            at: self.now,
        });
    }

    pub fn into_trace(self) -> (Vec<ExecutionSlice>, Vec<SkipNotice>) {
        (self.slices, self.skipped)
    }
}
