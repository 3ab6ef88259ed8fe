use super::Ticks;

use crate::io::ProgramInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    New,
    Running,
    Terminated,
}

/// A process record: static demand plus the runtime fields a run mutates.
#[derive(Debug, Clone)]
pub struct ProcessControlBlock {
    pub remaining_time: Ticks,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub waiting_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
    pub state: ProcessState,

    info: ProgramInfo,
    admitted: bool,
    skipped: bool,
}

impl ProcessControlBlock {
    pub fn new(info: ProgramInfo) -> ProcessControlBlock {
        ProcessControlBlock {
            remaining_time: info.burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
            state: ProcessState::New,
            info,
            admitted: false,
            skipped: false,
        }
    }

    pub fn reset(&mut self) {
        self.remaining_time = self.info.burst_time;
        self.start_time = None;
        self.completion_time = None;
        self.waiting_time = None;
        self.turnaround_time = None;
        self.state = ProcessState::New;
        self.admitted = false;
        self.skipped = false;
    }

    /// Runs the process for `slice` ticks ending at `now`, terminating it
    /// once no burst time remains.
    pub fn run_slice(&mut self, slice: Ticks, now: Ticks) {
        debug_assert!(slice <= self.remaining_time, "slice exceeds remaining burst");

        self.remaining_time -= slice;
        if self.remaining_time == 0 {
            self.terminate(now);
        }
    }

    fn terminate(&mut self, now: Ticks) {
        let turnaround_time = now - self.info.arrival_time;

        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround_time);
        self.waiting_time = Some(turnaround_time - self.info.burst_time);
        self.state = ProcessState::Terminated;
    }

    pub fn mark_skipped(&mut self) {
        self.skipped = true;
    }

    pub(super) fn set_admitted(&mut self, admitted: bool) {
        self.admitted = admitted;
    }

    pub fn info(&self) -> &ProgramInfo {
        &self.info
    }

    pub fn get_id(&self) -> u32 {
        self.info.id
    }

    pub fn get_name(&self) -> &str {
        &self.info.name
    }

    pub fn get_burst_time(&self) -> Ticks {
        self.info.burst_time
    }

    pub fn get_arrival_time(&self) -> Ticks {
        self.info.arrival_time
    }

    pub fn get_memory_requirement(&self) -> u64 {
        self.info.memory_requirement
    }

    pub fn is_admitted(&self) -> bool {
        self.admitted
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Completed or skipped; either way the process will not run again.
    pub fn is_settled(&self) -> bool {
        self.is_completed() || self.skipped
    }
}
