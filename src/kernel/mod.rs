mod cpu;
mod error;
mod long_term_scheduler;
mod memory;
mod metrics;
mod process_control_block;
mod process_table;
mod short_term_scheduler;

use short_term_scheduler::ShortTermScheduler;

pub use cpu::{Cpu, ExecutionSlice, SkipNotice};
pub use error::SimError;
pub use long_term_scheduler::{Admission, LongTermScheduler};
pub use memory::{Memory, MemoryStatus, MEMORY_SIZE};
pub use metrics::Metrics;
pub use process_control_block::{ProcessControlBlock, ProcessState};
pub use process_table::{ProcessTable, MAX_PROCESSES};
pub use short_term_scheduler::SchedulingAlgorithm;

pub mod driver;

pub use driver::{Driver, RunReport};

/// Simulated clock ticks.
pub type Ticks = u64;
